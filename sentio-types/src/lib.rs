//! Core types shared across the Sentio sentiment scorer.
//!
//! This crate holds the plain values that cross crate boundaries:
//!
//! - **Results**: [`SentimentScore`] and its categorical [`Label`]
//! - **Calibration**: [`ScoringParams`], the numeric knobs of the scorer
//! - **Validation**: [`ConfigError`], raised while building configuration tables
//!
//! Nothing here performs scoring; the pipeline lives in `sentio-core`.

#![warn(missing_docs)]

use core::fmt;

use serde::{Deserialize, Serialize};

/// Compound scores strictly above this value are labelled positive.
pub const POSITIVE_THRESHOLD: f64 = 0.05;

/// Compound scores strictly below this value are labelled negative.
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

/// Longest lexicon phrase, in words, that any configuration may declare.
pub const MAX_PHRASE_WORDS: usize = 3;

/// Categorical polarity of a scored text.
///
/// `#[repr(u8)]` keeps the label a single byte so callers can pack it
/// next to stored entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Label {
    /// Compound above [`POSITIVE_THRESHOLD`].
    Positive = 0,
    /// Compound below [`NEGATIVE_THRESHOLD`].
    Negative = 1,
    /// Everything in between, including exactly zero.
    Neutral = 2,
}

impl Label {
    /// Derives the label for a compound score.
    #[must_use]
    #[inline(always)]
    pub fn from_compound(compound: f64) -> Self {
        if compound > POSITIVE_THRESHOLD {
            Label::Positive
        } else if compound < NEGATIVE_THRESHOLD {
            Label::Negative
        } else {
            Label::Neutral
        }
    }

    /// Lowercase name, as stored next to journal entries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Label::Positive => "positive",
            Label::Negative => "negative",
            Label::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of scoring one text.
///
/// Scoring never fails: empty or unknown input produces [`SentimentScore::neutral`].
/// The value is meant to be treated as write-once metadata by whoever stores it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentScore {
    /// Normalized polarity in `[-1.0, 1.0]`.
    pub compound: f64,
    /// Label consistent with `compound` and the fixed thresholds.
    pub label: Label,
    /// Sum of positive contributions (never negative).
    pub pos: f64,
    /// Sum of the magnitudes of negative contributions (never negative).
    pub neg: f64,
    /// Number of word tokens that carried no sentiment.
    pub neutral_count: u32,
}

impl SentimentScore {
    /// The zero result: neutral label, no contributions.
    #[must_use]
    pub const fn neutral() -> Self {
        Self {
            compound: 0.0,
            label: Label::Neutral,
            pos: 0.0,
            neg: 0.0,
            neutral_count: 0,
        }
    }

    /// Builds a result, clamping `compound` and deriving the label from it.
    #[must_use]
    pub fn new(compound: f64, pos: f64, neg: f64, neutral_count: u32) -> Self {
        let compound = if compound.is_nan() {
            0.0
        } else {
            compound.clamp(-1.0, 1.0)
        };

        Self {
            compound,
            label: Label::from_compound(compound),
            pos: pos.max(0.0),
            neg: neg.max(0.0),
            neutral_count,
        }
    }
}

impl Default for SentimentScore {
    fn default() -> Self {
        Self::neutral()
    }
}

impl fmt::Display for SentimentScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} compound={:.4} pos={:.3} neg={:.3} neu={}",
            self.label, self.compound, self.pos, self.neg, self.neutral_count
        )
    }
}

/// Numeric calibration of the scorer.
///
/// Defaults give the stock calibration; every field may be
/// overridden from a config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Raw-score boost per `!`, counted up to four.
    pub exclam_factor: f64,
    /// Raw-score boost per `?`, counted up to four.
    pub question_factor: f64,
    /// Multiplier for a shouted (all caps) sentiment word.
    pub caps_factor: f64,
    /// Normalization constant in `raw / sqrt(raw^2 + alpha)`.
    pub alpha: f64,
    /// Widest phrase window, in words, the phrase matcher will try.
    pub max_phrase_len: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            exclam_factor: 0.2,
            question_factor: 0.1,
            caps_factor: 1.5,
            alpha: 15.0,
            max_phrase_len: MAX_PHRASE_WORDS,
        }
    }
}

impl ScoringParams {
    /// Calibration with punctuation and caps emphasis switched off.
    ///
    /// Handy when a test wants raw lexicon arithmetic only.
    pub const fn plain() -> Self {
        Self {
            exclam_factor: 0.0,
            question_factor: 0.0,
            caps_factor: 1.0,
            alpha: 15.0,
            max_phrase_len: MAX_PHRASE_WORDS,
        }
    }

    /// Checks every field is usable.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidParam`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let finite_non_negative = [
            ("exclam_factor", self.exclam_factor),
            ("question_factor", self.question_factor),
        ];
        for (name, value) in finite_non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidParam {
                    name,
                    value: value.to_string(),
                });
            }
        }

        if !self.caps_factor.is_finite() || self.caps_factor <= 0.0 {
            return Err(ConfigError::InvalidParam {
                name: "caps_factor",
                value: self.caps_factor.to_string(),
            });
        }

        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(ConfigError::InvalidParam {
                name: "alpha",
                value: self.alpha.to_string(),
            });
        }

        if self.max_phrase_len == 0 || self.max_phrase_len > MAX_PHRASE_WORDS {
            return Err(ConfigError::InvalidParam {
                name: "max_phrase_len",
                value: self.max_phrase_len.to_string(),
            });
        }

        Ok(())
    }
}

/// Errors raised while building scorer configuration.
///
/// These are construction-time problems only; scoring itself cannot fail.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A table key was empty or only whitespace.
    #[error("empty key in {table} table")]
    EmptyKey {
        /// Table the key belongs to.
        table: &'static str,
    },
    /// A key is not lowercase words of letters, digits or underscores.
    #[error("invalid key {key:?} in {table} table")]
    InvalidKey {
        /// Table the key belongs to.
        table: &'static str,
        /// The offending key.
        key: String,
    },
    /// A lexicon phrase has more words than allowed.
    #[error("lexicon phrase {key:?} has {words} words (max: {max})")]
    TooManyWords {
        /// The offending phrase.
        key: String,
        /// Word count of the phrase.
        words: usize,
        /// Maximum allowed word count.
        max: usize,
    },
    /// A polarity score was NaN or infinite.
    #[error("non-finite score for {key:?} in {table} table")]
    NonFiniteScore {
        /// Table the key belongs to.
        table: &'static str,
        /// The offending key.
        key: String,
    },
    /// An intensifier multiplier was zero, negative or non-finite.
    #[error("intensifier {word:?} has non-positive multiplier {value}")]
    NonPositiveMultiplier {
        /// The intensifier word.
        word: String,
        /// The rejected multiplier.
        value: f64,
    },
    /// A calibration parameter was out of range.
    #[error("invalid value {value} for parameter {name}")]
    InvalidParam {
        /// Parameter name.
        name: &'static str,
        /// Rejected value, rendered as text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_size_is_1_byte() {
        assert_eq!(size_of::<Label>(), 1);
    }

    #[test]
    fn label_thresholds_are_strict() {
        assert_eq!(Label::from_compound(0.05), Label::Neutral);
        assert_eq!(Label::from_compound(-0.05), Label::Neutral);
        assert_eq!(Label::from_compound(0.0501), Label::Positive);
        assert_eq!(Label::from_compound(-0.0501), Label::Negative);
        assert_eq!(Label::from_compound(0.0), Label::Neutral);
    }

    #[test]
    fn label_serializes_lowercase() {
        let json = serde_json::to_string(&Label::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
        let back: Label = serde_json::from_str("\"positive\"").unwrap();
        assert_eq!(back, Label::Positive);
    }

    #[test]
    fn neutral_score_is_zero() {
        let s = SentimentScore::neutral();
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.label, Label::Neutral);
        assert_eq!(s.pos, 0.0);
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.neutral_count, 0);
        assert_eq!(SentimentScore::default(), s);
    }

    #[test]
    fn new_clamps_and_labels() {
        let s = SentimentScore::new(1.7, 3.0, 0.0, 2);
        assert_eq!(s.compound, 1.0);
        assert_eq!(s.label, Label::Positive);

        let s = SentimentScore::new(f64::NAN, 0.0, 0.0, 0);
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.label, Label::Neutral);

        let s = SentimentScore::new(-0.4, 0.0, 1.0, 0);
        assert_eq!(s.label, Label::Negative);
    }

    #[test]
    fn score_display() {
        let s = SentimentScore::new(0.5, 2.0, 0.0, 1);
        assert_eq!(
            s.to_string(),
            "positive compound=0.5000 pos=2.000 neg=0.000 neu=1"
        );
    }

    #[test]
    fn default_params_are_valid() {
        assert!(ScoringParams::default().validate().is_ok());
        assert!(ScoringParams::plain().validate().is_ok());
    }

    #[test]
    fn params_reject_bad_alpha() {
        let params = ScoringParams {
            alpha: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParam { name: "alpha", .. })
        ));
    }

    #[test]
    fn params_reject_wide_window() {
        let params = ScoringParams {
            max_phrase_len: 4,
            ..Default::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ConfigError::InvalidParam {
                name: "max_phrase_len",
                ..
            })
        ));

        let params = ScoringParams {
            max_phrase_len: 0,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn params_reject_negative_factor() {
        let params = ScoringParams {
            exclam_factor: -0.1,
            ..Default::default()
        };
        assert!(params.validate().is_err());

        let params = ScoringParams {
            caps_factor: f64::INFINITY,
            ..Default::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn error_messages() {
        let err = ConfigError::TooManyWords {
            key: "a b c d".into(),
            words: 4,
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "lexicon phrase \"a b c d\" has 4 words (max: 3)"
        );
        assert_eq!(
            ConfigError::EmptyKey { table: "emoji" }.to_string(),
            "empty key in emoji table"
        );
    }
}
