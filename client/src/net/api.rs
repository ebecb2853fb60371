//! REST calls against the notice backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Bodies are decoded even on
//! non-2xx statuses because the backend reports failures as JSON
//! (`{"detail": ...}`); only an undecodable error body becomes
//! [`ApiError::Status`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{ChatReply, Notice, TemplateStructure};
#[cfg(feature = "hydrate")]
use super::types::{Ack, ChatResponse, GenerateResponse, NoticeList};

/// Ordered `name=value` pairs for a form body.
pub type FormFields = Vec<(&'static str, String)>;

#[cfg(any(test, feature = "hydrate"))]
const CHAT_ENDPOINT: &str = "/api/chat";
#[cfg(any(test, feature = "hydrate"))]
const NOTICES_ENDPOINT: &str = "/api/notices";
#[cfg(any(test, feature = "hydrate"))]
const GENERATE_ENDPOINT: &str = "/generate-notice";
#[cfg(any(test, feature = "hydrate"))]
const TEMPLATE_ENDPOINT: &str = "/api/template-structure";

#[cfg(any(test, feature = "hydrate"))]
fn chat_session_endpoint(session_id: &str) -> String {
    format!("/api/chat/session/{session_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn notice_endpoint(notice_id: &str) -> String {
    format!("{NOTICES_ENDPOINT}/{notice_id}")
}

/// Form body for a chat turn.
pub fn chat_fields(message: &str, session_id: &str) -> FormFields {
    vec![("message", message.to_owned()), ("session_id", session_id.to_owned())]
}

#[cfg(feature = "hydrate")]
fn url_encoded(fields: &[(&'static str, String)]) -> Result<web_sys::UrlSearchParams, ApiError> {
    let params = web_sys::UrlSearchParams::new().map_err(transport)?;
    for (name, value) in fields {
        params.append(name, value);
    }
    Ok(params)
}

#[cfg(feature = "hydrate")]
fn multipart(fields: &[(&'static str, String)]) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(transport)?;
    for (name, value) in fields {
        form.append_with_str(name, value).map_err(transport)?;
    }
    Ok(form)
}

#[cfg(feature = "hydrate")]
fn transport(value: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Transport(crate::util::browser::js_error_message(&value))
}

#[cfg(feature = "hydrate")]
fn gloo_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Decode a JSON body regardless of status; fall back to the status code
/// when an error response is not JSON.
#[cfg(feature = "hydrate")]
async fn decode_lenient<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    match resp.json::<T>().await {
        Ok(body) => Ok(body),
        Err(e) if ok => Err(ApiError::Decode(e.to_string())),
        Err(_) => Err(ApiError::Status { status }),
    }
}

/// Decode a JSON body, rejecting non-2xx statuses first.
#[cfg(feature = "hydrate")]
async fn decode_strict<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(ApiError::Status { status: resp.status() });
    }
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Send one chat turn via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error on transport failure or when the backend reports failure.
pub async fn send_chat(message: &str, session_id: &str) -> Result<ChatReply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = url_encoded(&chat_fields(message, session_id))?;
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .body(body)
            .map_err(gloo_error)?
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<ChatResponse>(resp).await?.into_reply()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (message, session_id);
        Err(ApiError::Unavailable)
    }
}

/// Drop the server-side conversation via `DELETE /api/chat/session/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or when the backend reports failure.
pub async fn clear_chat_session(session_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&chat_session_endpoint(session_id))
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<Ack>(resp).await?.into_result("초기화 실패").map(|_| ())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session_id;
        Err(ApiError::Unavailable)
    }
}

/// Fetch every notice via `GET /api/notices`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or malformed body.
pub async fn fetch_notices() -> Result<Vec<Notice>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(NOTICES_ENDPOINT)
            .send()
            .await
            .map_err(gloo_error)?;
        Ok(decode_strict::<NoticeList>(resp).await?.notices)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch one notice via `GET /api/notices/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or malformed body.
pub async fn fetch_notice(notice_id: &str) -> Result<Notice, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&notice_endpoint(notice_id))
            .send()
            .await
            .map_err(gloo_error)?;
        decode_strict::<Notice>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notice_id;
        Err(ApiError::Unavailable)
    }
}

/// Create a notice via `POST /api/notices`.
///
/// # Errors
///
/// Returns an error on transport failure or when the backend reports failure.
pub async fn create_notice(fields: FormFields) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = url_encoded(&fields)?;
        let resp = gloo_net::http::Request::post(NOTICES_ENDPOINT)
            .body(body)
            .map_err(gloo_error)?
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<Ack>(resp).await?.into_result("저장 실패")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(ApiError::Unavailable)
    }
}

/// Replace a notice via `PUT /api/notices/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or when the backend reports failure.
pub async fn update_notice(notice_id: &str, fields: FormFields) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = url_encoded(&fields)?;
        let resp = gloo_net::http::Request::put(&notice_endpoint(notice_id))
            .body(body)
            .map_err(gloo_error)?
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<Ack>(resp).await?.into_result("수정 실패")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (notice_id, fields);
        Err(ApiError::Unavailable)
    }
}

/// Delete a notice via `DELETE /api/notices/{id}`.
///
/// # Errors
///
/// Returns an error on transport failure or when the backend reports failure.
pub async fn delete_notice(notice_id: &str) -> Result<Option<String>, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::delete(&notice_endpoint(notice_id))
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<Ack>(resp).await?.into_result("삭제 실패")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = notice_id;
        Err(ApiError::Unavailable)
    }
}

/// Generate notice text from the structured form via `POST /generate-notice`.
///
/// Sent as multipart form data.
///
/// # Errors
///
/// Returns an error on transport failure or when generation fails.
pub async fn generate_notice(fields: FormFields) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let body = multipart(&fields)?;
        let resp = gloo_net::http::Request::post(GENERATE_ENDPOINT)
            .body(body)
            .map_err(gloo_error)?
            .send()
            .await
            .map_err(gloo_error)?;
        decode_lenient::<GenerateResponse>(resp).await?.into_text()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = fields;
        Err(ApiError::Unavailable)
    }
}

/// Fetch the notice template description via `GET /api/template-structure`.
///
/// # Errors
///
/// Returns an error on transport failure, non-2xx status, or malformed body.
pub async fn fetch_template_structure() -> Result<TemplateStructure, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(TEMPLATE_ENDPOINT)
            .send()
            .await
            .map_err(gloo_error)?;
        decode_strict::<TemplateStructure>(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Unavailable)
    }
}
