//! Chat transcript and session state for the drafting conversation.
//!
//! DESIGN
//! ======
//! Every submit attempt appends exactly two messages: the user's text up
//! front and then either the assistant reply or the fallback apology. The
//! conversation never shows a broken state; failures surface as toasts.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use leptos::prelude::*;

use crate::net::error::ApiError;
use crate::net::types::{ChatReply, NoticeDraft};

/// Timestamp label used for the greeting and outside the browser.
pub const JUST_NOW: &str = "방금 전";

/// Opening assistant message shown on load and after a reset.
pub const GREETING: &str = "안녕하세요! 전산 공지문 작성을 도와드리는 AI 어시스턴트입니다.\n\n\
어떤 공지를 작성하시겠어요? 다음 정보를 알려주세요:\n\
- 공지 날짜\n\
- 적용 시스템\n\
- 업데이트 내용\n\n\
편하게 대화하듯이 말씀해주시면 됩니다! 😊";

/// Assistant message substituted for any failed turn.
pub const FALLBACK_REPLY: &str = "죄송합니다. 오류가 발생했습니다. 다시 시도해주세요.";

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn avatar(self) -> &'static str {
        match self {
            Self::User => "👤",
            Self::Assistant => "🤖",
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Self::User => "message--user",
            Self::Assistant => "message--assistant",
        }
    }
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub text: String,
    pub timestamp: String,
}

/// What a finished turn should tell the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Plain assistant reply.
    Replied,
    /// Reply carried a generated notice, now in the preview panel.
    NoticeGenerated,
    /// Fallback message appended; carries the error text for the toast.
    Failed(String),
}

/// Page-scoped chat state.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub session_id: String,
    pub messages: Vec<ChatMessage>,
    pub sending: bool,
    /// Draft shown in the preview panel; `None` keeps the panel closed.
    pub preview: Option<NoticeDraft>,
    next_id: u64,
}

impl ChatState {
    /// Fresh conversation showing only the greeting.
    pub fn new(session_id: String) -> Self {
        let mut state = Self { session_id, messages: Vec::new(), sending: false, preview: None, next_id: 0 };
        state.push(Role::Assistant, GREETING.to_owned(), JUST_NOW.to_owned());
        state
    }

    fn push(&mut self, role: Role, text: String, timestamp: String) {
        self.next_id += 1;
        self.messages.push(ChatMessage { id: self.next_id, role, text, timestamp });
    }

    /// Start a turn: append the user's message and mark the session busy.
    ///
    /// Returns the trimmed message to send, or `None` when the input is blank
    /// or a turn is already in flight.
    pub fn begin_turn(&mut self, input: &str, timestamp: String) -> Option<String> {
        let message = input.trim();
        if message.is_empty() || self.sending {
            return None;
        }
        self.push(Role::User, message.to_owned(), timestamp);
        self.sending = true;
        Some(message.to_owned())
    }

    /// Finish the in-flight turn with exactly one assistant message.
    pub fn finish_turn(&mut self, result: Result<ChatReply, ApiError>, timestamp: String) -> TurnOutcome {
        self.sending = false;
        match result {
            Ok(reply) => {
                self.push(Role::Assistant, reply.message, timestamp);
                match reply.notice {
                    Some(draft) => {
                        self.preview = Some(draft);
                        TurnOutcome::NoticeGenerated
                    }
                    None => TurnOutcome::Replied,
                }
            }
            Err(err) => {
                self.push(Role::Assistant, FALLBACK_REPLY.to_owned(), timestamp);
                TurnOutcome::Failed(err.to_string())
            }
        }
    }

    /// Back to the greeting with the preview closed. The session id is kept;
    /// the backend has already forgotten its history.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.preview = None;
        self.push(Role::Assistant, GREETING.to_owned(), JUST_NOW.to_owned());
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }
}

/// The open draft, changing only when the preview itself does.
pub fn preview_memo(chat: RwSignal<ChatState>) -> Memo<Option<NoticeDraft>> {
    Memo::new(move |_| chat.with(|c| c.preview.clone()))
}

/// Client-generated session id, unique for the lifetime of the page.
pub fn new_session_id() -> String {
    format!("session_{}", uuid::Uuid::new_v4().simple())
}
