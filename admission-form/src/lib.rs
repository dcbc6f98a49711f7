//! admission-form: higher secondary admission registration over HTMX
//!
//! An applicant fills seven fields (name, address, mobile, email, gender,
//! date of birth, course) and submits. The values are checked against fixed
//! rules; failures are shown beneath each control, success shows a
//! confirmation panel with the stored values. Cancel clears everything.
//!
//! The core in [`registration`] is synchronous and independent of HTTP. The
//! server in [`handlers`] rebuilds a form from every request, so nothing is
//! shared between requests.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use admission_form::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AdmissionConfig::load()?;
//!     let listener = config.server.bind().await?;
//!     let app = router(AppState::with_config(config));
//!
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod health;
pub mod observability;
pub mod registration;
pub mod state;
pub mod views;

#[cfg(test)]
pub mod testing;

pub mod prelude {
    //! Convenience re-exports for common types and traits

    pub use crate::config::AdmissionConfig;
    pub use crate::error::AppError;
    pub use crate::handlers::router;
    pub use crate::registration::{ErrorMap, Field, FormData, FormState, Phase, SubmitOutcome};
    pub use crate::state::AppState;

    pub use axum_htmx::HxRequest;
}
