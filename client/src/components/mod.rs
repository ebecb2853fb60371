//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and dialogs. App-wide state (toasts, the
//! system catalog) comes from context; page state is passed in as signals or
//! plain values with callbacks for actions.

pub mod chat_transcript;
pub mod nav_bar;
pub mod notice_card;
pub mod notice_detail_modal;
pub mod notice_edit_modal;
pub mod notice_preview;
pub mod systems_picker;
pub mod toast_host;
