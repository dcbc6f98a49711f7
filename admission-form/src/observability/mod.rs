//! Logging setup
//!
//! `RUST_LOG` wins when set; otherwise the `[logging] filter` from
//! configuration applies. Output is pretty or one JSON object per event.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{LogFormat, LoggingSettings};

/// Initialize the global tracing subscriber
///
/// # Example
///
/// ```rust,no_run
/// use admission_form::{config::LoggingSettings, observability};
///
/// # fn main() -> anyhow::Result<()> {
/// observability::init(&LoggingSettings::default())?;
/// tracing::info!("Application started");
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Fails if the configured filter does not parse or a global subscriber is
/// already installed.
pub fn init(settings: &LoggingSettings) -> anyhow::Result<()> {
    let env_filter = build_filter(settings)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()?,
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
    }

    Ok(())
}

fn build_filter(settings: &LoggingSettings) -> anyhow::Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    Ok(EnvFilter::try_new(&settings.filter)?)
}
