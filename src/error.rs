//! Error handling for devbench

use crate::types::AddressFamily;
use thiserror::Error;

/// Main error type for devbench
#[derive(Error, Debug, Clone)]
pub enum DevbenchError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Malformed {family} bootstrap registry: {message}")]
    MalformedRegistry {
        family: AddressFamily,
        message: String,
    },

    #[error("No RDAP authority found for {address}")]
    AuthorityNotFound { address: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Network error: {message}")]
    Network {
        message: String,
        status_code: Option<u16>,
        url: Option<String>,
    },

    #[error("Timeout error: {operation} timed out after {timeout_secs}s")]
    Timeout {
        operation: String,
        timeout_secs: u64,
    },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    #[error("Not found upstream: {message}")]
    UpstreamNotFound {
        message: String,
        url: Option<String>,
    },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DevbenchError {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a malformed registry error for one address family
    pub fn malformed_registry(family: AddressFamily, message: impl Into<String>) -> Self {
        Self::MalformedRegistry {
            family,
            message: message.into(),
        }
    }

    /// Create an authority-not-found error
    pub fn authority_not_found(address: impl Into<String>) -> Self {
        Self::AuthorityNotFound {
            address: address.into(),
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a network error
    pub fn network(
        message: impl Into<String>,
        status_code: Option<u16>,
        url: Option<String>,
    ) -> Self {
        Self::Network {
            message: message.into(),
            status_code,
            url,
        }
    }

    /// Create a timeout error
    pub fn timeout(operation: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            operation: operation.into(),
            timeout_secs,
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Create an upstream not-found error
    pub fn upstream_not_found(message: impl Into<String>, url: Option<String>) -> Self {
        Self::UpstreamNotFound {
            message: message.into(),
            url,
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error is an expected "nothing there" outcome rather than a failure
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::AuthorityNotFound { .. } | Self::UpstreamNotFound { .. } => true,
            Self::Network { status_code, .. } => matches!(status_code, Some(404)),
            _ => false,
        }
    }
}

/// Convert from I/O errors
impl From<std::io::Error> for DevbenchError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, DevbenchError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::DevbenchError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DevbenchError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::DevbenchError::validation($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DevbenchError::validation(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! internal_error {
    ($msg:expr) => {
        $crate::error::DevbenchError::internal($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::DevbenchError::internal(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_classification() {
        assert!(DevbenchError::authority_not_found("10.0.0.1").is_not_found());
        assert!(DevbenchError::upstream_not_found("gone", None).is_not_found());
        assert!(DevbenchError::network("missing", Some(404), None).is_not_found());
        assert!(!DevbenchError::network("bad gateway", Some(502), None).is_not_found());
        assert!(!DevbenchError::validation("blank").is_not_found());
    }

    #[test]
    fn test_malformed_registry_message() {
        let err = DevbenchError::malformed_registry(AddressFamily::V6, "missing services");
        assert_eq!(
            err.to_string(),
            "Malformed ipv6 bootstrap registry: missing services"
        );
    }

    #[test]
    fn test_macros() {
        let err = validation_error!("bad {}", "input");
        assert!(matches!(err, DevbenchError::Validation { ref message } if message == "bad input"));
        let err = config_error!("missing");
        assert!(matches!(err, DevbenchError::Config { .. }));
        let err = internal_error!("boom");
        assert!(err.to_string().contains("boom"));
    }
}
