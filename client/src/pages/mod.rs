//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its state signal and the async request flows; rendering
//! details are delegated to `components`.

pub mod chat;
pub mod generator;
pub mod notices;
