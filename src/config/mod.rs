mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, fmt, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await,
        Err(_) => {
            debug!("No {} found, using default configuration", DEFAULT_CONFIG_PATH);
            Ok(Config::default())
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let config: Config = serde_yaml::from_str(&config_str)?;

    Ok(config)
}

/// Gemini API key, resolved once at startup and handed to the server state.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Returns `None` for an empty key so that it is treated like a missing one.
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.is_empty() { None } else { Some(Self(key)) }
    }

    pub fn from_env(var: &str) -> Option<Self> {
        env::var(var).ok().and_then(Self::new)
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.gemini.model.is_empty() {
            return Err(Error::config("gemini.model must not be empty"));
        }
        if self.gemini.api_key_env.is_empty() {
            return Err(Error::config("gemini.api_key_env must not be empty"));
        }
        if self.gemini.timeout_secs == Some(0) {
            return Err(Error::config("gemini.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
