//! HTTP routes
//!
//! | method | path           | handler                        |
//! |--------|----------------|--------------------------------|
//! | GET    | `/`            | [`registration::index`]        |
//! | POST   | `/register`    | [`registration::register`]     |
//! | POST   | `/cancel`      | [`registration::cancel`]       |
//! | GET    | `/health/live` | [`crate::health::liveness`]    |

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::health;
use crate::state::AppState;

pub mod registration;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(registration::index))
        .route("/register", post(registration::register))
        .route("/cancel", post(registration::cancel))
        .route("/health/live", get(health::liveness))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
