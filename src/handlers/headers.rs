//! request header echo

use std::collections::BTreeMap;

use axum::{http::HeaderMap, Json};

/// GET /api/headers - echo request headers, repeated names grouped
pub async fn request_headers(headers: HeaderMap) -> Json<BTreeMap<String, Vec<String>>> {
    let mut echoed: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers.iter() {
        echoed
            .entry(name.as_str().to_string())
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    Json(echoed)
}
