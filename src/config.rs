// src/config.rs

//! Client configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Browser-identifying User-Agent sent with every request. The platform serves
/// a degraded page to unknown agents.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";

/// HTTP and platform settings for [`EmojiClient`](crate::EmojiClient).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Platform host name
    #[serde(default = "default_host")]
    pub host: String,

    /// User-Agent header value
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Article listing page size (one page is fetched, newest first)
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_host() -> String {
    "www.acfun.cn".to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_page_size() -> u32 {
    100
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            page_size: default_page_size(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(AppError::invalid_input("host is empty"));
        }
        if self.user_agent.trim().is_empty() {
            return Err(AppError::invalid_input("user_agent is empty"));
        }
        if self.timeout_secs == 0 {
            return Err(AppError::invalid_input("timeout_secs must be > 0"));
        }
        if self.page_size == 0 {
            return Err(AppError::invalid_input("page_size must be > 0"));
        }
        Ok(())
    }
}
