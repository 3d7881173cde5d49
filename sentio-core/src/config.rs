//! TOML configuration for the scorer.
//!
//! ```toml
//! extend_defaults = true
//! negations = ["hardly"]
//!
//! [params]
//! alpha = 15.0
//! caps_factor = 1.5
//!
//! [lexicon]
//! meh = -0.5
//! "not bad" = 1.5
//!
//! [intensifiers]
//! super = 1.6
//!
//! [emoji]
//! "🔥" = 2.0
//! ```
//!
//! Every field is optional. With `extend_defaults = true` the file's tables
//! are layered over the built-in ones; with `false` they replace them.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use sentio_types::{ConfigError, ScoringParams};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::lexicon::{SentimentTables, TablesBuilder};

/// Errors raised while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The text is not valid TOML or does not fit the config shape.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Params or table entries failed validation.
    #[error("invalid config: {0}")]
    Invalid(#[from] ConfigError),
}

/// Scorer configuration as read from a TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentioConfig {
    /// Layer the tables below over the built-in ones instead of replacing them.
    pub extend_defaults: bool,
    /// Extra negation triggers.
    pub negations: Vec<String>,
    /// Scoring calibration.
    pub params: ScoringParams,
    /// Extra words and phrases with their polarity.
    pub lexicon: BTreeMap<String, f64>,
    /// Extra intensifiers with their multiplier.
    pub intensifiers: BTreeMap<String, f64>,
    /// Extra emoji glyphs with their polarity.
    pub emoji: BTreeMap<String, f64>,
}

impl Default for SentioConfig {
    fn default() -> Self {
        Self {
            extend_defaults: true,
            negations: Vec::new(),
            params: ScoringParams::default(),
            lexicon: BTreeMap::new(),
            intensifiers: BTreeMap::new(),
            emoji: BTreeMap::new(),
        }
    }
}

impl SentioConfig {
    /// Loads and validates a config file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            path = %path.display(),
            words = config.lexicon.len(),
            extend_defaults = config.extend_defaults,
            "loaded config"
        );
        Ok(config)
    }

    /// Parses and validates config text.
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let config: SentioConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    ///
    /// Unreadable or malformed files are still errors.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        match Self::load(path.as_ref()) {
            Err(LoadError::Io { path, source }) if source.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "config file not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Checks params and every table entry.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.params.validate()?;
        self.builder().build().map(drop)
    }

    /// Builds the scorer tables this config describes.
    pub fn tables(&self) -> Result<SentimentTables, ConfigError> {
        self.builder().build()
    }

    fn builder(&self) -> TablesBuilder {
        let base = if self.extend_defaults {
            TablesBuilder::with_defaults()
        } else {
            TablesBuilder::new()
        };

        let mut layer = TablesBuilder::new();
        for (key, &value) in &self.lexicon {
            layer = layer.word(key.as_str(), value);
        }
        for (word, &multiplier) in &self.intensifiers {
            layer = layer.intensifier(word.as_str(), multiplier);
        }
        for word in &self.negations {
            layer = layer.negation(word.as_str());
        }
        for (glyph, &value) in &self.emoji {
            layer = layer.emoji(glyph.as_str(), value);
        }

        base.extend_from(layer)
    }
}
