//! Backend gateway: forwards API calls to the notice backend unchanged.
//!
//! Method, path, query string, `content-type` and body go upstream; status,
//! `content-type` and body come back. Only transport failures are answered
//! locally, as JSON in the same `{success, detail}` shape the backend uses.

use axum::Json;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::state::AppState;

/// Largest request body forwarded upstream.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// A request could not be relayed.
#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    /// The backend HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),

    /// The incoming body could not be read.
    #[error("request body rejected: {0}")]
    Body(String),

    /// The backend did not answer in time.
    #[error("backend timed out")]
    Timeout,

    /// The backend could not be reached or its response could not be read.
    #[error("backend unavailable: {0}")]
    Upstream(String),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::ClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Timeout => StatusCode::GATEWAY_TIMEOUT,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() { Self::Timeout } else { Self::Upstream(e.to_string()) }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "success": false, "detail": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Upstream URL for an incoming path and query.
pub fn upstream_url(backend_url: &str, path_and_query: &str) -> String {
    format!("{backend_url}{path_and_query}")
}

/// Relay one request to the backend.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.backend_url, path_and_query);

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let mut upstream = state.http.request(parts.method.clone(), &url).body(bytes);
    if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
        upstream = upstream.header(header::CONTENT_TYPE, content_type.clone());
    }

    let resp = upstream.send().await.map_err(|e| {
        tracing::warn!(error = %e, method = %parts.method, %url, "backend request failed");
        ProxyError::from(e)
    })?;

    let status = resp.status();
    let content_type = resp.headers().get(header::CONTENT_TYPE).cloned();
    let payload = resp.bytes().await.map_err(|e| {
        tracing::warn!(error = %e, %url, "backend response body failed");
        ProxyError::from(e)
    })?;

    tracing::debug!(method = %parts.method, %url, status = status.as_u16(), "relayed");
    Ok(relay(status, content_type, Body::from(payload)))
}

fn relay(status: StatusCode, content_type: Option<HeaderValue>, body: Body) -> Response {
    let mut headers = HeaderMap::new();
    if let Some(value) = content_type {
        headers.insert(header::CONTENT_TYPE, value);
    }
    (status, headers, body).into_response()
}

#[cfg(test)]
#[path = "proxy_test.rs"]
mod tests;
