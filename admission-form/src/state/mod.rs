//! Application state shared by handlers
//!
//! Holds read-only configuration. Form contents are never stored here; every
//! request rebuilds its own [`FormState`](crate::registration::FormState).

use std::sync::Arc;

use crate::config::{AdmissionConfig, FormSettings};

/// Shared state for the admission server
///
/// ```rust
/// use admission_form::state::AppState;
///
/// let state = AppState::new();
/// let app: axum::Router = admission_form::handlers::router(state);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AppState {
    config: Arc<AdmissionConfig>,
}

impl AppState {
    /// State with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// State with the given configuration
    #[must_use]
    pub fn with_config(config: AdmissionConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Full configuration
    #[must_use]
    pub fn config(&self) -> &AdmissionConfig {
        &self.config
    }

    /// Page text settings
    #[must_use]
    pub fn form_settings(&self) -> &FormSettings {
        &self.config.form
    }
}
