//! Table assembly and validation.

use rustc_hash::{FxHashMap, FxHashSet};
use sentio_types::{ConfigError, MAX_PHRASE_WORDS};

use super::defaults::{DEFAULT_EMOJI, DEFAULT_INTENSIFIERS, DEFAULT_LEXICON, DEFAULT_NEGATIONS};
use super::{Lexicon, SentimentTables};
use crate::analyzer::casefold::CaseFolder;
use crate::analyzer::tokenizer::{is_emoji, is_word_char};

/// Collects table entries and validates them into [`SentimentTables`].
///
/// Entries are applied in insertion order, so a later entry for the same key
/// overrides an earlier one. That is how a config file layers on top of the
/// defaults.
///
/// # Examples
///
/// ```
/// use sentio_core::lexicon::TablesBuilder;
///
/// let tables = TablesBuilder::new()
///     .word("good", 2.0)
///     .word("not good", -2.5)
///     .intensifier("very", 1.5)
///     .negation("not")
///     .emoji("😊", 2.0)
///     .build()
///     .unwrap();
///
/// assert_eq!(tables.lexicon().get("not good"), Some(-2.5));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TablesBuilder {
    lexicon: Vec<(String, f64)>,
    intensifiers: Vec<(String, f64)>,
    negations: Vec<String>,
    emoji: Vec<(String, f64)>,
}

impl TablesBuilder {
    /// Starts with empty tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with the built-in tables.
    pub fn with_defaults() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON
                .iter()
                .map(|&(k, v)| (k.to_owned(), v))
                .collect(),
            intensifiers: DEFAULT_INTENSIFIERS
                .iter()
                .map(|&(k, v)| (k.to_owned(), v))
                .collect(),
            negations: DEFAULT_NEGATIONS.iter().map(|&k| k.to_owned()).collect(),
            emoji: DEFAULT_EMOJI
                .iter()
                .map(|&(k, v)| (k.to_owned(), v))
                .collect(),
        }
    }

    /// Adds a word or phrase to the lexicon.
    #[must_use]
    pub fn word(mut self, key: impl Into<String>, polarity: f64) -> Self {
        self.lexicon.push((key.into(), polarity));
        self
    }

    /// Adds an intensifier and its multiplier.
    #[must_use]
    pub fn intensifier(mut self, word: impl Into<String>, multiplier: f64) -> Self {
        self.intensifiers.push((word.into(), multiplier));
        self
    }

    /// Adds a negation trigger.
    #[must_use]
    pub fn negation(mut self, word: impl Into<String>) -> Self {
        self.negations.push(word.into());
        self
    }

    /// Adds an emoji glyph (or glyph run) and its polarity.
    #[must_use]
    pub fn emoji(mut self, glyph: impl Into<String>, polarity: f64) -> Self {
        self.emoji.push((glyph.into(), polarity));
        self
    }

    /// Appends every entry of `other`; its entries override ours on conflict.
    #[must_use]
    pub fn extend_from(mut self, other: TablesBuilder) -> Self {
        self.lexicon.extend(other.lexicon);
        self.intensifiers.extend(other.intensifiers);
        self.negations.extend(other.negations);
        self.emoji.extend(other.emoji);
        self
    }

    /// Validates every entry and produces the tables.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyKey`] for an empty key in any table
    /// - [`ConfigError::InvalidKey`] for keys the tokenizer could never produce
    ///   (uppercase or titlecase letters, apostrophes, doubled spaces, glyphs that
    ///   are not emoji or tokenize as words)
    /// - [`ConfigError::TooManyWords`] for lexicon phrases over three words
    /// - [`ConfigError::NonFiniteScore`] for NaN or infinite polarities
    /// - [`ConfigError::NonPositiveMultiplier`] for intensifiers `<= 0`
    pub fn build(self) -> Result<SentimentTables, ConfigError> {
        for (key, value) in &self.lexicon {
            check_phrase(key)?;
            check_finite("lexicon", key, *value)?;
        }

        for (word, multiplier) in &self.intensifiers {
            check_word("intensifiers", word)?;
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(ConfigError::NonPositiveMultiplier {
                    word: word.clone(),
                    value: *multiplier,
                });
            }
        }

        for word in &self.negations {
            check_word("negations", word)?;
        }

        for (glyph, value) in &self.emoji {
            check_glyph(glyph)?;
            check_finite("emoji", glyph, *value)?;
        }

        Ok(self.build_unchecked())
    }

    /// Assembles the tables without validation.
    pub(crate) fn build_unchecked(self) -> SentimentTables {
        SentimentTables {
            lexicon: Lexicon::from_entries(into_map(self.lexicon)),
            intensifiers: into_map(self.intensifiers),
            negations: self
                .negations
                .into_iter()
                .map(String::into_boxed_str)
                .collect::<FxHashSet<_>>(),
            emoji: into_map(self.emoji),
        }
    }
}

fn into_map(entries: Vec<(String, f64)>) -> FxHashMap<Box<str>, f64> {
    let mut map = FxHashMap::with_capacity_and_hasher(entries.len(), Default::default());
    for (key, value) in entries {
        map.insert(key.into_boxed_str(), value);
    }
    map
}

/// A word the tokenizer can emit and whose folded form is itself.
fn is_folded_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(is_word_char) && CaseFolder::new().fold(word) == word
}

fn check_word(table: &'static str, word: &str) -> Result<(), ConfigError> {
    if word.trim().is_empty() {
        return Err(ConfigError::EmptyKey { table });
    }
    if !is_folded_word(word) {
        return Err(ConfigError::InvalidKey {
            table,
            key: word.to_owned(),
        });
    }
    Ok(())
}

fn check_phrase(key: &str) -> Result<(), ConfigError> {
    if key.trim().is_empty() {
        return Err(ConfigError::EmptyKey { table: "lexicon" });
    }

    let mut words = 0usize;
    for part in key.split(' ') {
        if !is_folded_word(part) {
            return Err(ConfigError::InvalidKey {
                table: "lexicon",
                key: key.to_owned(),
            });
        }
        words += 1;
    }

    if words > MAX_PHRASE_WORDS {
        return Err(ConfigError::TooManyWords {
            key: key.to_owned(),
            words,
            max: MAX_PHRASE_WORDS,
        });
    }
    Ok(())
}

fn check_glyph(glyph: &str) -> Result<(), ConfigError> {
    if glyph.trim().is_empty() {
        return Err(ConfigError::EmptyKey { table: "emoji" });
    }
    // Emoji-range characters that are also alphanumeric tokenize as words.
    if !glyph.chars().all(|c| is_emoji(c) && !is_word_char(c)) {
        return Err(ConfigError::InvalidKey {
            table: "emoji",
            key: glyph.to_owned(),
        });
    }
    Ok(())
}

fn check_finite(table: &'static str, key: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::NonFiniteScore {
            table,
            key: key.to_owned(),
        })
    }
}
