//! Errors surfaced by backend calls.
//!
//! The `Display` text is user-facing: pages append it to error toasts.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure of a single backend request.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted).
    #[error("{0}")]
    Transport(String),

    /// Non-2xx status with a body that carried no usable message.
    #[error("서버 응답 오류 ({status})")]
    Status { status: u16 },

    /// A 2xx response whose body did not match the expected shape.
    #[error("응답 형식 오류: {0}")]
    Decode(String),

    /// The backend answered but reported failure.
    #[error("{0}")]
    Rejected(String),

    /// Called outside the browser (SSR).
    #[error("not available on server")]
    Unavailable,
}

/// Pick the most specific failure message from a backend payload.
///
/// FastAPI puts errors in `detail` (string, or a list for validation
/// failures); handlers put them in `message`.
pub fn rejection(detail: Option<&serde_json::Value>, message: Option<&str>, fallback: &str) -> ApiError {
    let from_detail = detail.and_then(|d| match d {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    });
    let text = from_detail
        .or_else(|| message.filter(|m| !m.is_empty()).map(str::to_owned))
        .unwrap_or_else(|| fallback.to_owned());
    ApiError::Rejected(text)
}
