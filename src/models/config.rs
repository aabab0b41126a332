//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site addresses
    #[serde(default)]
    pub site: SiteConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// CSS selectors for the index and book pages
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// Database location
    #[serde(default)]
    pub storage: StorageConfig,

    /// Book page scraping behavior
    #[serde(default)]
    pub content: ContentConfig,
}

impl Config {
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
        self.site.base()?;
        Url::parse(&self.site.index_url)?;

        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == 0 {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        if self.storage.database.as_os_str().is_empty() {
            return Err(AppError::validation("storage.database is empty"));
        }
        if self.content.limit == Some(0) {
            return Err(AppError::validation("content.limit must be > 0"));
        }

        self.selectors.compile()?;
        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

/// Addresses of the scraped site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL that book link hrefs are appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Index-by-category listing page
    #[serde(default = "defaults::index_url")]
    pub index_url: String,
}

impl SiteConfig {
    /// Parsed base URL.
    pub fn base(&self) -> Result<Url> {
        Ok(Url::parse(&self.base_url)?)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            index_url: defaults::index_url(),
        }
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
        }
    }
}

/// Storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// SQLite database file
    #[serde(default = "defaults::database")]
    pub database: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database: defaults::database(),
        }
    }
}

/// Book page scraping settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentConfig {
    /// Follow only the first N book links
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Print a progress line after every book page
    #[serde(default = "defaults::show_progress")]
    pub show_progress: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            limit: None,
            show_progress: defaults::show_progress(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    pub fn base_url() -> String {
        "https://www.imperial-library.info".into()
    }
    pub fn index_url() -> String {
        "https://www.imperial-library.info/books/all/by-category".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; library_scraper/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn database() -> PathBuf {
        PathBuf::from("data/library.sqlite")
    }
    pub fn show_progress() -> bool {
        true
    }
}
