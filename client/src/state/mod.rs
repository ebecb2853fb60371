//! Client-side state models.
//!
//! DESIGN
//! ======
//! Each page owns one plain struct wrapped in an `RwSignal`; the toast slot
//! and system catalog are app-wide and provided as context. Transitions are
//! ordinary methods so they can be tested without a browser.

pub mod catalog;
pub mod chat;
pub mod generator;
pub mod notices;
pub mod toast;
