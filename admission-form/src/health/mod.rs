//! Liveness endpoint
//!
//! The process answers while it can serve requests, so the document is
//! always healthy; a stalled process simply stops answering.
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use admission_form::health::liveness;
//!
//! let app: Router = Router::new().route("/health/live", get(liveness));
//! ```

use axum::Json;
use serde::Serialize;
use std::time::SystemTime;

/// Status reported for the process and its parts
pub const HEALTHY: &str = "healthy";

/// Status of one part of the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Always [`HEALTHY`]
    pub status: &'static str,
}

/// Parts reported in the liveness document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Components {
    /// The web application itself
    pub application: Component,
}

/// `GET /health/live` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Liveness {
    /// Overall status
    pub status: &'static str,
    /// Crate version
    pub version: &'static str,
    /// Unix seconds when the document was built
    pub timestamp: u64,
    /// Per-part status
    pub components: Components,
}

impl Liveness {
    /// Document stamped with the current time
    #[must_use]
    pub fn now() -> Self {
        Self {
            status: HEALTHY,
            version: env!("CARGO_PKG_VERSION"),
            timestamp: SystemTime::now()
                .duration_since(SystemTime::UNIX_EPOCH)
                .map_or(0, |d| d.as_secs()),
            components: Components {
                application: Component { status: HEALTHY },
            },
        }
    }
}

/// `GET /health/live`
#[allow(clippy::unused_async)]
pub async fn liveness() -> Json<Liveness> {
    Json(Liveness::now())
}
