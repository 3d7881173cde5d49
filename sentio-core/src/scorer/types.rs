//! Scorer type and constants.

use sentio_types::{ConfigError, ScoringParams};

use crate::analyzer::casefold::CaseFolder;
use crate::config::SentioConfig;
use crate::lexicon::SentimentTables;

/// At most this many `!` (and, separately, `?`) count towards emphasis.
pub const PUNCT_CAP: usize = 4;

/// Tokens an intensifier looks ahead for its sentiment word.
pub const INTENSIFIER_LOOKAHEAD: usize = 2;

/// Rule-based lexical sentiment scorer.
///
/// Holds read-only tables and calibration; every call to
/// [`Scorer::analyze`] builds its own scan state. A scorer is `Send + Sync`
/// and can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub(crate) tables: SentimentTables,
    pub(crate) params: ScoringParams,
    pub(crate) folder: CaseFolder,
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    /// Creates a scorer with the built-in tables and default calibration.
    pub fn new() -> Self {
        Self {
            tables: SentimentTables::defaults(),
            params: ScoringParams::default(),
            folder: CaseFolder::new(),
        }
    }

    /// Creates a scorer from caller-supplied tables and calibration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidParam`] if `params` fails validation.
    pub fn with_tables(tables: SentimentTables, params: ScoringParams) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            tables,
            params,
            folder: CaseFolder::new(),
        })
    }

    /// Creates a scorer from a loaded config file.
    ///
    /// # Errors
    ///
    /// Propagates table and parameter validation errors.
    pub fn from_config(config: &SentioConfig) -> Result<Self, ConfigError> {
        Self::with_tables(config.tables()?, config.params)
    }

    /// The scorer's tables.
    #[inline(always)]
    #[must_use]
    pub fn tables(&self) -> &SentimentTables {
        &self.tables
    }

    /// The scorer's calibration.
    #[inline(always)]
    #[must_use]
    pub fn params(&self) -> &ScoringParams {
        &self.params
    }
}
