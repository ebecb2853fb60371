//! Utility helpers shared across client UI modules.
//!
//! Browser-only effects live in `browser` and `scroll`; `format` is pure.

pub mod browser;
pub mod format;
pub mod notify;
pub mod scroll;
