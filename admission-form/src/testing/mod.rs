//! Test helpers
//!
//! - [`TestServer`] wraps `axum-test` with HTMX request helpers

mod server;

pub use server::TestServer;
