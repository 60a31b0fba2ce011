//! Static configuration for the board engine.
//!
//! Configuration is read once at start-up and never changes while the board
//! is in use. It is normally supplied as JSON:
//!
//! ```
//! use trellis::config::TrellisConfig;
//!
//! let config = TrellisConfig::from_json_str(r#"{ "seed_sample_board": true }"#)?;
//! assert!(config.seed_sample_board);
//! assert_eq!(config.label_color("Bug"), "bg-red-500");
//! # Ok::<(), trellis::config::ConfigError>(())
//! ```

use crate::board::domain::LabelCatalog;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Color token used for labels the catalog does not know.
pub const DEFAULT_LABEL_COLOR: &str = "bg-blue-500";

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid configuration JSON.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The label catalog has no entries.
    #[error("label catalog must not be empty")]
    EmptyCatalog,

    /// Two catalog entries share an id or display text.
    #[error("duplicate label catalog entry: {0}")]
    DuplicateLabel(String),
}

/// Board engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrellisConfig {
    /// Suggested labels and their colors.
    pub label_catalog: LabelCatalog,
    /// Color token for labels missing from the catalog.
    pub default_label_color: String,
    /// Whether a new store starts from the sample board.
    pub seed_sample_board: bool,
}

impl Default for TrellisConfig {
    fn default() -> Self {
        Self {
            label_catalog: LabelCatalog::default(),
            default_label_color: DEFAULT_LABEL_COLOR.to_owned(),
            seed_sample_board: false,
        }
    }
}

impl TrellisConfig {
    /// Parses and validates configuration from JSON. Missing fields take
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the JSON is malformed or the label
    /// catalog is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the label catalog is non-empty and free of duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCatalog`] or
    /// [`ConfigError::DuplicateLabel`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        let options = self.label_catalog.options();
        if options.is_empty() {
            return Err(ConfigError::EmptyCatalog);
        }
        let mut seen_ids = HashSet::new();
        let mut seen_texts = HashSet::new();
        for option in options {
            if !seen_ids.insert(option.id.as_str()) {
                return Err(ConfigError::DuplicateLabel(option.id.clone()));
            }
            if !seen_texts.insert(option.display_text.as_str()) {
                return Err(ConfigError::DuplicateLabel(option.display_text.clone()));
            }
        }
        Ok(())
    }

    /// Returns the color token for a card label.
    #[must_use]
    pub fn label_color(&self, label: &str) -> &str {
        self.label_catalog
            .color_for(label)
            .unwrap_or(self.default_label_color.as_str())
    }
}
