//! html entity search endpoint

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use super::ApiError;
use crate::entities::{EntityQuery, HtmlEntity, Page, DEFAULT_PAGE_SIZE};
use crate::error::DevbenchError;
use crate::server::AppState;

/// raw query string; numbers are parsed here so bad input gets a JSON error
#[derive(Debug, Deserialize)]
pub struct EntityParams {
    q: Option<String>,
    page: Option<String>,
    size: Option<String>,
}

/// GET /api/entities?q=&page=&size=
pub async fn search_entities(
    State(state): State<AppState>,
    Query(params): Query<EntityParams>,
) -> Result<Json<Page<HtmlEntity>>, ApiError> {
    let query = EntityQuery {
        query: params.q.unwrap_or_default(),
        page: parse_number("page", params.page.as_deref(), 0)?,
        size: parse_number("size", params.size.as_deref(), DEFAULT_PAGE_SIZE)?,
    };
    Ok(Json(state.entities.search(&query).await?))
}

fn parse_number(key: &str, value: Option<&str>, default: usize) -> Result<usize, DevbenchError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(v) => v
            .parse()
            .map_err(|_| crate::validation_error!("'{}' must be a non-negative integer, got '{}'", key, v)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("page", None, 0).unwrap(), 0);
        assert_eq!(parse_number("page", Some(""), 3).unwrap(), 3);
        assert_eq!(parse_number("size", Some("15"), 20).unwrap(), 15);
        assert!(parse_number("size", Some("-1"), 20).is_err());
        assert!(parse_number("size", Some("ten"), 20).is_err());
    }
}
