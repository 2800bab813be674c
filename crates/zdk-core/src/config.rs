//! Configuration management for ZDK
//!
//! Loads configuration with priority:
//! 1. config.toml (or specified config file)
//! 2. Environment variables (fallback)
//! 3. Defaults

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable holding the ScraperAPI key
pub const SCRAPERAPI_API_KEY_ENV: &str = "SCRAPERAPI_API_KEY";

/// ZDK configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ZConfig {
    #[serde(default)]
    pub scraperapi: ScraperApiConfig,

    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// ScraperAPI configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct ScraperApiConfig {
    /// API key (can reference env var with ${VAR_NAME})
    pub api_key: Option<String>,

    /// Base URL of the ScraperAPI service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// Observability configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    pub service_name: Option<String>,

    /// `EnvFilter` directive used when `RUST_LOG` is not set (e.g. "info,zdk_scraperapi=debug")
    pub log_filter: Option<String>,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub json_logs: bool,
}

impl Default for ScraperApiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl std::fmt::Debug for ScraperApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScraperApiConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ZConfig {
    /// Load configuration with the following priority:
    /// 1. config.toml in current directory or a parent
    /// 2. Environment variables (fallback)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let config_path = if let Some(p) = path {
            p.to_path_buf()
        } else {
            // Try to find config.toml in current directory or parent directories
            Self::find_config_file()?
        };

        tracing::debug!("Loading configuration from: {:?}", config_path);

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {:?}", config_path))
    }

    /// Parse configuration from TOML text and resolve environment references
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let mut config: ZConfig = toml::from_str(contents)?;
        config.resolve_env_vars();
        Ok(config)
    }

    /// Build configuration from defaults and environment variables only
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.resolve_env_vars();
        config
    }

    /// Find config.toml by searching current directory and parents
    fn find_config_file() -> Result<PathBuf> {
        let mut current = env::current_dir()?;

        loop {
            let config_path = current.join("config.toml");
            if config_path.exists() {
                return Ok(config_path);
            }

            if !current.pop() {
                break;
            }
        }

        Err(anyhow!(
            "config.toml not found. Create one with: cp config.toml.example config.toml"
        ))
    }

    /// Resolve ${VAR_NAME} references to environment variables
    fn resolve_env_vars(&mut self) {
        self.scraperapi.api_key = match self.scraperapi.api_key.as_deref() {
            Some(key) if !key.is_empty() => Self::resolve_env_var(key),
            // Empty or missing key falls back to the conventional variable
            _ => env::var(SCRAPERAPI_API_KEY_ENV).ok(),
        };

        if let Some(resolved) = Self::resolve_env_var(&self.scraperapi.base_url) {
            self.scraperapi.base_url = resolved;
        }
    }

    /// Resolve a single ${VAR_NAME} reference
    fn resolve_env_var(value: &str) -> Option<String> {
        if value.starts_with("${") && value.ends_with('}') {
            let var_name = &value[2..value.len() - 1];
            env::var(var_name).ok()
        } else {
            Some(value.to_string())
        }
    }

    /// Get the ScraperAPI key with a clear error message
    pub fn scraperapi_api_key(&self) -> crate::Result<String> {
        match self.scraperapi.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => Ok(key.to_string()),
            _ => Err(crate::Error::config_error(format!(
                "ScraperAPI key not found. Configure it in config.toml:\n\
                [scraperapi]\n\
                api_key = \"${{{SCRAPERAPI_API_KEY_ENV}}}\"\n\
                \n\
                Or set environment variable:\n\
                export {SCRAPERAPI_API_KEY_ENV}=\"your-key\""
            ))),
        }
    }
}

fn default_base_url() -> String {
    "https://api.scraperapi.com".to_string()
}

fn default_timeout_secs() -> u64 {
    70
}
