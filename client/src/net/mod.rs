//! Networking modules for the notice backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the REST calls, `types` defines the wire schema, and `error`
//! classifies failures into user-facing messages.

pub mod api;
pub mod error;
pub mod types;
