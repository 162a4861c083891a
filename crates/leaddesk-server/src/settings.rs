//! Server settings
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `leaddesk.toml` in the working directory, then `LEADDESK_*` environment
//! variables (e.g. `LEADDESK_BIND_ADDRESS=127.0.0.1:8080`).

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use leaddesk_core::{DeskError, Result};
use serde::Deserialize;
use std::net::SocketAddr;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub bind_address: String,
    pub log_level: String,
    pub log_format: LogFormat,
    pub cors_allow_any: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_format: LogFormat::Pretty,
            cors_allow_any: true,
        }
    }
}

impl Settings {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address.parse().map_err(|e| {
            DeskError::InvalidConfig(format!("bind_address {:?}: {}", self.bind_address, e))
        })
    }
}

pub fn load_config() -> Result<Settings> {
    let builder = config::Config::builder()
        .add_source(File::with_name("leaddesk").required(false))
        .add_source(Environment::with_prefix("LEADDESK"));
    from_builder(builder)
}

fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Settings> {
    let config_err = |e: config::ConfigError| DeskError::Config(e.to_string());

    let settings: Settings = builder
        .set_default("bind_address", DEFAULT_BIND_ADDRESS)
        .map_err(config_err)?
        .set_default("log_level", DEFAULT_LOG_LEVEL)
        .map_err(config_err)?
        .set_default("log_format", "pretty")
        .map_err(config_err)?
        .set_default("cors_allow_any", true)
        .map_err(config_err)?
        .build()
        .map_err(config_err)?
        .try_deserialize()
        .map_err(config_err)?;

    settings.socket_addr()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = from_builder(config::Config::builder()).unwrap();
        assert_eq!(settings.bind_address, DEFAULT_BIND_ADDRESS);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert!(settings.cors_allow_any);
        assert_eq!(settings.socket_addr().unwrap().port(), 5000);
    }

    #[test]
    fn test_overrides() {
        let builder = config::Config::builder()
            .set_override("bind_address", "127.0.0.1:8088")
            .unwrap()
            .set_override("log_format", "json")
            .unwrap()
            .set_override("cors_allow_any", false)
            .unwrap();
        let settings = from_builder(builder).unwrap();
        assert_eq!(settings.socket_addr().unwrap().port(), 8088);
        assert_eq!(settings.log_format, LogFormat::Json);
        assert!(!settings.cors_allow_any);
    }

    #[test]
    fn test_rejects_bad_bind_address() {
        let builder = config::Config::builder()
            .set_override("bind_address", "not-an-address")
            .unwrap();
        let err = from_builder(builder).unwrap_err();
        assert!(matches!(err, DeskError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_log_format() {
        let builder = config::Config::builder()
            .set_override("log_format", "xml")
            .unwrap();
        assert!(matches!(
            from_builder(builder).unwrap_err(),
            DeskError::Config(_)
        ));
    }
}
