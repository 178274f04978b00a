//! Echo handler reporting the request as the handler received it.

use std::collections::BTreeMap;

use axum::{body::Body, http::Request, Json};
use serde::{Deserialize, Serialize};

/// JSON view of a request after the middleware stack ran.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EchoResponse {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    /// Header names are lowercase; repeated headers are joined with ", ".
    pub headers: BTreeMap<String, String>,
}

impl EchoResponse {
    pub fn from_request<B>(request: &Request<B>) -> Self {
        let mut headers: BTreeMap<String, String> = BTreeMap::new();
        for (name, value) in request.headers() {
            let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
            headers
                .entry(name.as_str().to_string())
                .and_modify(|existing| {
                    existing.push_str(", ");
                    existing.push_str(&value);
                })
                .or_insert(value);
        }

        Self {
            method: request.method().to_string(),
            path: request.uri().path().to_string(),
            query: request.uri().query().map(str::to_string),
            headers,
        }
    }
}

pub async fn echo_handler(request: Request<Body>) -> Json<EchoResponse> {
    Json(EchoResponse::from_request(&request))
}
