//! Configuration module for faqtree
//!
//! Every setting has a default matching the stock FAQ block, so an empty or
//! missing file yields a working configuration. Files are TOML:
//!
//! ```toml
//! [tags]
//! namespace = "smart-x-com"
//!
//! [search]
//! debounce_ms = 200
//! trigger_min_len = 4
//!
//! [filter]
//! top_placeholder = "Select a category"
//! ```

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::discovery::RetryPolicy;
use crate::patterns::DEFAULT_NAMESPACE;

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct FaqConfig {
    pub tags: TagsConfig,
    pub search: SearchConfig,
    pub filter: FilterConfig,
    pub view: ViewConfig,
    pub authoring: AuthoringConfig,
}

/// Tag parsing settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct TagsConfig {
    /// Namespace marker every category tag must carry
    pub namespace: String,
}

impl Default for TagsConfig {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_string(),
        }
    }
}

/// Search and suggestion settings
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Shortest query that produces suggestions at all
    pub min_query_len: usize,
    /// Shortest word kept by the tokenizer
    pub token_min_len: usize,
    /// Shortest word offered as a suggestion
    pub suggestion_word_min_len: usize,
    /// Maximum number of suggestions
    pub max_suggestions: usize,
    /// Whole questions are suggested only when shorter than this
    pub max_question_len: usize,
    /// Shortest query for which the suggestion list is shown while typing
    pub trigger_min_len: usize,
    /// Quiet time before suggestions are computed
    pub debounce_ms: u64,
    /// Match search queries against raw answer markup instead of its text
    pub match_answer_markup: bool,
    /// Number of memoized suggestion queries
    pub cache_capacity: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            min_query_len: 2,
            token_min_len: 2,
            suggestion_word_min_len: 4,
            max_suggestions: 5,
            max_question_len: 70,
            trigger_min_len: 4,
            debounce_ms: 200,
            match_answer_markup: false,
            cache_capacity: 256,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Cascading filter labels
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FilterConfig {
    /// Placeholder of the first dropdown
    pub top_placeholder: String,
    /// Placeholder of every deeper dropdown
    pub sub_placeholder: String,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            top_placeholder: "Select a category".to_string(),
            sub_placeholder: "Select subcategory".to_string(),
        }
    }
}

impl FilterConfig {
    /// Placeholder text for a dropdown at `level`
    #[must_use]
    pub fn placeholder(&self, level: usize) -> &str {
        if level == 0 {
            &self.top_placeholder
        } else {
            &self.sub_placeholder
        }
    }
}

/// View texts
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ViewConfig {
    /// Indicator shown when nothing is visible
    pub no_results_text: String,
    /// Placeholder of the search box
    pub search_placeholder: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            no_results_text: "No results found.".to_string(),
            search_placeholder: "Search the FAQs".to_string(),
        }
    }
}

/// Timing of the authoring integration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct AuthoringConfig {
    /// Wait before the first extraction
    pub initial_wait_ms: u64,
    /// Interval between content polls
    pub retry_interval_ms: u64,
    /// Maximum number of content polls
    pub max_attempts: u32,
    /// Polls that must pass before an unchanged entry count counts as settled
    pub settle_after_attempts: u32,
    /// Quiet time before a content change triggers a rebuild
    pub rebuild_debounce_ms: u64,
}

impl Default for AuthoringConfig {
    fn default() -> Self {
        Self {
            initial_wait_ms: 800,
            retry_interval_ms: 300,
            max_attempts: 10,
            settle_after_attempts: 3,
            rebuild_debounce_ms: 500,
        }
    }
}

impl AuthoringConfig {
    #[must_use]
    pub const fn initial_wait(&self) -> Duration {
        Duration::from_millis(self.initial_wait_ms)
    }

    #[must_use]
    pub const fn rebuild_debounce(&self) -> Duration {
        Duration::from_millis(self.rebuild_debounce_ms)
    }

    /// Polling policy for content that is still materializing
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(Duration::from_millis(self.retry_interval_ms), self.max_attempts)
    }
}

impl FaqConfig {
    /// Get the path to the default config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("faqtree").join("config.toml"))
    }

    /// Load configuration from the default location, defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file exists but cannot be read or parsed.
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(&Self::config_path()?)
    }

    /// Load configuration from a TOML file, defaults if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        settings.try_deserialize()
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the text is not valid TOML or has mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Save configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }
}
