//! Wire DTOs for the notice backend.
//!
//! DESIGN
//! ======
//! Response structs are lenient (`#[serde(default)]` everywhere the backend
//! may omit a field) and convert into `Result` through `into_*` methods, so
//! application-level failures (`success: false`, FastAPI `detail`) follow the
//! same error path as transport failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::{ApiError, rejection};

/// A stored notice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub id: String,
    pub title: String,
    /// Notice date as `YYYY-MM-DD`.
    pub date: String,
    pub content: String,
    #[serde(default)]
    pub systems: Vec<String>,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Notice {
    /// Title and body as copied to the clipboard or downloaded.
    pub fn full_text(&self) -> String {
        crate::util::format::notice_text(&self.title, &self.content)
    }

    /// Case-insensitive substring match on title or content, combined with
    /// an optional exact system tag.
    pub fn matches(&self, search_lower: &str, system: &str) -> bool {
        let matches_search = self.title.to_lowercase().contains(search_lower)
            || self.content.to_lowercase().contains(search_lower);
        let matches_system = system.is_empty() || self.systems.iter().any(|s| s == system);
        matches_search && matches_system
    }
}

/// `GET /api/notices` payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NoticeList {
    #[serde(default)]
    pub notices: Vec<Notice>,
}

/// Notice inferred by the backend from the chat conversation.
///
/// The backend sends a full stored notice; only title and body are shown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoticeDraft {
    pub title: String,
    pub content: String,
}

impl NoticeDraft {
    pub fn full_text(&self) -> String {
        crate::util::format::notice_text(&self.title, &self.content)
    }
}

/// `POST /api/chat` payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub notice_generated: bool,
    #[serde(default)]
    pub notice: Option<NoticeDraft>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

/// Successful assistant turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatReply {
    pub message: String,
    /// Present only when the backend flagged `notice_generated`.
    pub notice: Option<NoticeDraft>,
}

impl ChatResponse {
    /// Convert into a reply, treating `success: false` as a rejection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with the backend's detail text.
    pub fn into_reply(self) -> Result<ChatReply, ApiError> {
        if !self.success {
            return Err(rejection(self.detail.as_ref(), None, "메시지 전송 실패"));
        }
        let notice = if self.notice_generated { self.notice } else { None };
        Ok(ChatReply { message: self.message.unwrap_or_default(), notice })
    }
}

/// Generic `{success, message?}` acknowledgement for mutations.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Ack {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl Ack {
    /// Convert into the optional confirmation message.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] using `detail`, then `message`, then
    /// `fallback`.
    pub fn into_result(self, fallback: &str) -> Result<Option<String>, ApiError> {
        if self.success {
            Ok(self.message)
        } else {
            Err(rejection(self.detail.as_ref(), self.message.as_deref(), fallback))
        }
    }
}

/// `POST /generate-notice` payload.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub notice: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl GenerateResponse {
    /// Convert into the generated notice text.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] when generation failed or produced no text.
    pub fn into_text(self) -> Result<String, ApiError> {
        match (self.success, self.notice) {
            (true, Some(text)) => Ok(text),
            _ => Err(rejection(self.detail.as_ref(), self.message.as_deref(), "공지 생성에 실패했습니다.")),
        }
    }
}

/// One entry of the template's system list: a bare name or an object with
/// a `name` field.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SystemEntry {
    Name(String),
    Detailed { name: String },
}

impl SystemEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name } => name,
        }
    }
}

/// `GET /api/template-structure` payload (only the parts the UI uses).
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TemplateStructure {
    #[serde(default, deserialize_with = "system_list")]
    pub systems: Vec<SystemEntry>,
}

/// Accept `systems` as a list of entries or as an object keyed by name.
fn system_list<'de, D>(deserializer: D) -> Result<Vec<SystemEntry>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        List(Vec<SystemEntry>),
        Keyed(serde_json::Map<String, serde_json::Value>),
    }

    Ok(match Shape::deserialize(deserializer)? {
        Shape::List(entries) => entries,
        Shape::Keyed(map) => map.into_iter().map(|(name, _)| SystemEntry::Name(name)).collect(),
    })
}
