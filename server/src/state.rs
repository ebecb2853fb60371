//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds one pooled HTTP client for the notice backend and the backend's
//! origin; both are cheap to clone.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::routes::proxy::ProxyError;

#[derive(Clone)]
pub struct AppState {
    pub http: reqwest::Client,
    /// Backend origin without a trailing slash.
    pub backend_url: Arc<str>,
}

impl AppState {
    /// Build the backend client with the configured timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::ClientBuild`] if the TLS backend cannot be
    /// initialised.
    pub fn new(config: &GatewayConfig) -> Result<Self, ProxyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ProxyError::ClientBuild(e.to_string()))?;
        Ok(Self { http, backend_url: Arc::from(config.backend_url.as_str()) })
    }
}
