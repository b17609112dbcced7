// crates/suggestion_generator/src/config.rs

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable holding the credential.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load env file {}: {source}", .path.display())]
    DotenvLoad {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    #[error("{0} is not set in the env file or environment")]
    MissingApiKey(&'static str),
}

/// Everything the completion client needs, built once at startup.
#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

impl ApiConfig {
    /// Loads the credential (see [`load_api_key`]) and pairs it with the
    /// remaining settings.
    pub fn from_env(
        dotenv_path: Option<&Path>,
        model: &str,
        api_base: &str,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: load_api_key(dotenv_path)?,
            model: model.to_string(),
            api_base: api_base.to_string(),
            timeout,
        })
    }
}

// Keeps the key out of `{:?}` output.
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Reads [`API_KEY_VAR`] after loading an env file.
///
/// An explicit `dotenv_path` must load; without one a `.env` in the working
/// directory (or an ancestor) is used when present. Variables already set in
/// the environment win over the file.
pub fn load_api_key(dotenv_path: Option<&Path>) -> Result<String, ConfigError> {
    load_key_from(dotenv_path, API_KEY_VAR)
}

fn load_key_from(dotenv_path: Option<&Path>, var: &'static str) -> Result<String, ConfigError> {
    match dotenv_path {
        Some(path) => {
            dotenvy::from_path(path).map_err(|source| ConfigError::DotenvLoad {
                path: path.to_path_buf(),
                source,
            })?;
            log::debug!("Loaded env file {}", path.display());
        }
        None => match dotenvy::dotenv() {
            Ok(path) => log::debug!("Loaded env file {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => log::warn!("Ignoring unreadable .env file: {}", err),
        },
    }

    match env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(ConfigError::MissingApiKey(var)),
    }
}
