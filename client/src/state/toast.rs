//! Transient toast notification state.
//!
//! DESIGN
//! ======
//! Exactly one toast is visible at a time; showing a new one replaces the
//! old. Each toast carries a sequence id so a delayed dismissal only removes
//! the toast it was scheduled for.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// How long a toast stays on screen.
pub const TOAST_DURATION_MS: u32 = 3_000;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    #[default]
    Info,
    Warning,
}

impl ToastKind {
    /// BEM modifier class for styling.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast--success",
            Self::Error => "toast--error",
            Self::Info => "toast--info",
            Self::Warning => "toast--warning",
        }
    }
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Toast slot provided app-wide via context.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Replace the visible toast and return the new toast's id.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast { id: self.next_id, kind, message: message.into() });
        self.next_id
    }

    /// Remove the visible toast if it is still the one with `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
        }
    }
}
