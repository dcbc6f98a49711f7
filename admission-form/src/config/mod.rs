//! Configuration management
//!
//! Configuration is loaded from multiple sources with clear precedence:
//!
//! 1. Environment variables (highest priority, `ADMISSION_` prefix, `__` for nesting)
//! 2. `./config.toml` (development)
//! 3. `~/.config/admission-form/config.toml` (user config, XDG)
//! 4. `/etc/admission-form/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! Environment variable format: `ADMISSION_SECTION__FIELD_NAME`
//! - Example: `ADMISSION_SERVER__PORT=8080`
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "0.0.0.0"
//! port = 3000
//!
//! [form]
//! title = "Higher Secondary Admission Form"
//!
//! [logging]
//! filter = "info,admission_form=debug"
//! format = "json"
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::net::TcpListener;

use crate::error::AppError;
use crate::registration::SUCCESS_HEADING;

/// Name used for config directories
pub const SERVICE_NAME: &str = "admission-form";

/// HTTP listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,

    /// Port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl ServerSettings {
    /// Resolve `host` (an IP address or a name such as `localhost`) and bind
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Io`] if the name does not resolve or no resolved
    /// address can be bound.
    pub async fn bind(&self) -> Result<TcpListener, AppError> {
        let listener = TcpListener::bind((self.host.as_str(), self.port)).await?;
        Ok(listener)
    }
}

/// Page text and assets
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Heading above the form
    pub title: String,

    /// Heading of the success panel
    pub success_heading: String,

    /// Script URL for htmx
    pub htmx_src: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            title: "Higher Secondary Admission Form".to_string(),
            success_heading: SUCCESS_HEADING.to_string(),
            htmx_src: "https://unpkg.com/htmx.org@1.9.10".to_string(),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, multi-line
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub filter: String,

    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        if cfg!(debug_assertions) {
            Self {
                filter: "debug".to_string(),
                format: LogFormat::Pretty,
            }
        } else {
            Self {
                filter: "info".to_string(),
                format: LogFormat::Json,
            }
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AdmissionConfig {
    /// HTTP listener
    #[serde(default)]
    pub server: ServerSettings,

    /// Page text and assets
    #[serde(default)]
    pub form: FormSettings,

    /// Logging
    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AdmissionConfig {
    /// Load configuration from the standard locations
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, AppError> {
        let mut figment = Self::defaults()?;

        let system_config = PathBuf::from("/etc").join(SERVICE_NAME).join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        if let Some(user_config) = Self::user_config_path() {
            if user_config.exists() {
                figment = figment.merge(Toml::file(&user_config));
            }
        }

        let local_config = PathBuf::from("./config.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        Self::extract(figment.merge(Self::env()))
    }

    /// Load configuration from a specific file on top of the defaults
    ///
    /// Environment variables still override the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be parsed, or a
    /// value has the wrong type.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(AppError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        let figment = Self::defaults()?.merge(Toml::file(path)).merge(Self::env());
        Self::extract(figment)
    }

    /// `~/.config/admission-form/config.toml`, if a config dir is known
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(SERVICE_NAME).join("config.toml"))
    }

    fn defaults() -> Result<Figment, AppError> {
        let defaults = toml::to_string(&Self::default())
            .map_err(|e| AppError::Config(format!("failed to serialize defaults: {e}")))?;
        Ok(Figment::new().merge(Toml::string(&defaults)))
    }

    fn env() -> Env {
        Env::prefixed("ADMISSION_").split("__").lowercase(true)
    }

    fn extract(figment: Figment) -> Result<Self, AppError> {
        figment
            .extract()
            .map_err(|e| AppError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AdmissionConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.form.title, "Higher Secondary Admission Form");
        assert_eq!(config.form.success_heading, "Data stored successfully!");
    }

    #[tokio::test]
    async fn test_bind_ip_address() {
        let server = ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        };
        let listener = server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_resolves_host_name() {
        let server = ServerSettings {
            host: "localhost".into(),
            port: 0,
        };
        let listener = server.bind().await.unwrap();
        assert!(listener.local_addr().unwrap().ip().is_loopback());
    }

    #[tokio::test]
    async fn test_bind_unresolvable_host() {
        let server = ServerSettings {
            host: "not a host".into(),
            port: 80,
        };
        assert!(matches!(server.bind().await, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_bind_port_in_use() {
        let first = ServerSettings {
            host: "127.0.0.1".into(),
            port: 0,
        }
        .bind()
        .await
        .unwrap();
        let taken = ServerSettings {
            host: "127.0.0.1".into(),
            port: first.local_addr().unwrap().port(),
        };
        assert!(matches!(taken.bind().await, Err(AppError::Io(_))));
    }

    #[test]
    fn test_logging_defaults_follow_build() {
        let logging = LoggingSettings::default();

        #[cfg(debug_assertions)]
        assert_eq!(logging.format, LogFormat::Pretty);

        #[cfg(not(debug_assertions))]
        assert_eq!(logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[server]\nport = 8081\n\n[form]\ntitle = \"Admissions 2026\"\n\n[logging]\nformat = \"json\""
        )
        .unwrap();

        let config = AdmissionConfig::load_from(file.path()).unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.form.title, "Admissions 2026");
        assert_eq!(config.form.success_heading, "Data stored successfully!");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = AdmissionConfig::load_from("/definitely/not/here.toml").unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn test_load_from_rejects_bad_types() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = \"eighty\"").unwrap();

        assert!(matches!(
            AdmissionConfig::load_from(file.path()),
            Err(AppError::Config(_))
        ));
    }
}
