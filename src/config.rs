//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::PathBuf;

use leptos::config::{LeptosOptions, get_configuration};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub assets_dir: PathBuf,
    pub leptos: LeptosOptions,
}

impl ServerConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `FOLIO_ASSETS_DIR`: static assets (thumbnails, résumé), default `public/`
    ///
    /// Leptos options come from the `LEPTOS_*` variables cargo-leptos exports
    /// from `[[workspace.metadata.leptos]]`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a malformed `PORT` or missing Leptos options.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let assets_dir = assets_dir(std::env::var("FOLIO_ASSETS_DIR").ok().as_deref());
        let leptos = get_configuration(None)
            .map_err(|e| ConfigError::Leptos(e.to_string()))?
            .leptos_options;
        Ok(Self { port, assets_dir, leptos })
    }

    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .ok()
            .filter(|port| *port != 0)
            .ok_or_else(|| ConfigError::Invalid { var: "PORT", value: value.to_owned() }),
    }
}

pub(crate) fn assets_dir(raw: Option<&str>) -> PathBuf {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .map_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public"), PathBuf::from)
}
