//! api error handling for http handlers

use crate::error::DevbenchError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// api error type for handler responses
#[derive(Debug)]
pub enum ApiError {
    /// invalid input (400)
    BadRequest(String),
    /// nothing to return (404)
    NotFound(String),
    /// upstream provider failed or answered garbage (502)
    BadGateway(String),
    /// upstream provider did not answer in time (504)
    GatewayTimeout(String),
    /// internal server error (500)
    Internal(String),
}

/// JSON body of every error response
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::BadRequest(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// create internal server error from any error type
    pub fn internal(e: impl std::fmt::Display) -> Self {
        Self::Internal(e.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::NotFound(_) => "not_found",
            ApiError::BadGateway(_) => "bad_gateway",
            ApiError::GatewayTimeout(_) => "gateway_timeout",
            ApiError::Internal(_) => "internal",
        }
    }
}

impl From<DevbenchError> for ApiError {
    fn from(err: DevbenchError) -> Self {
        let message = err.to_string();
        if err.is_not_found() {
            return Self::NotFound(message);
        }
        match err {
            DevbenchError::Validation { .. } => Self::BadRequest(message),
            DevbenchError::Network { .. } | DevbenchError::Parse { .. } => {
                tracing::warn!(error = %message, "Upstream provider failure");
                Self::BadGateway(message)
            }
            DevbenchError::Timeout { .. } => {
                tracing::warn!(error = %message, "Upstream provider timed out");
                Self::GatewayTimeout(message)
            }
            _ => {
                tracing::error!(error = %message, "Request failed");
                Self::Internal(message)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error = self.code();
        let message = match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::BadGateway(msg)
            | ApiError::GatewayTimeout(msg)
            | ApiError::Internal(msg) => msg,
        };
        (status, Json(ErrorBody { error, message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DevbenchError::validation("bad"), StatusCode::BAD_REQUEST),
            (DevbenchError::authority_not_found("10.0.0.1"), StatusCode::NOT_FOUND),
            (DevbenchError::upstream_not_found("gone", None), StatusCode::NOT_FOUND),
            (DevbenchError::network("missing", Some(404), None), StatusCode::NOT_FOUND),
            (DevbenchError::network("refused", None, None), StatusCode::BAD_GATEWAY),
            (DevbenchError::network("unavailable", Some(503), None), StatusCode::BAD_GATEWAY),
            (DevbenchError::parse("garbage", None), StatusCode::BAD_GATEWAY),
            (DevbenchError::timeout("RDAP request", 10), StatusCode::GATEWAY_TIMEOUT),
            (DevbenchError::config("broken"), StatusCode::INTERNAL_SERVER_ERROR),
            (DevbenchError::internal("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[test]
    fn test_response_status() {
        let response = ApiError::not_found("no such route").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
