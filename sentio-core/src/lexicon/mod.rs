//! Configuration tables consulted by the scorer.
//!
//! Four read-only tables drive scoring:
//! - **Lexicon**: words and 2–3 word phrases mapped to signed polarity
//! - **Intensifiers**: words that scale the next sentiment word
//! - **Negations**: words that flip the sign of the next sentiment value
//! - **Emoji**: glyphs mapped to signed polarity
//!
//! Tables are assembled and validated by [`TablesBuilder`] and never change
//! afterwards. All keys are lowercase and reachable by the tokenizer.

mod builder;
mod defaults;

pub use builder::TablesBuilder;

use rustc_hash::{FxHashMap, FxHashSet};

/// Word and phrase polarity table.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<Box<str>, f64>,
    longest: usize,
}

impl Lexicon {
    pub(crate) fn from_entries(entries: FxHashMap<Box<str>, f64>) -> Self {
        let longest = entries
            .keys()
            .map(|k| k.split(' ').count())
            .max()
            .unwrap_or(0);
        Self { entries, longest }
    }

    /// Polarity of a folded word or space-joined phrase.
    #[inline(always)]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.entries.get(key).copied()
    }

    /// Like [`Lexicon::get`], but also hands back the stored key.
    #[inline(always)]
    pub fn get_entry(&self, key: &str) -> Option<(&str, f64)> {
        self.entries
            .get_key_value(key)
            .map(|(k, v)| (k.as_ref(), *v))
    }

    /// Number of entries, words and phrases together.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the lexicon has no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Word count of the longest entry (0 when empty).
    #[inline(always)]
    pub fn longest_phrase(&self) -> usize {
        self.longest
    }

    /// Iterates over `(key, polarity)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_ref(), *v))
    }
}

/// The four scorer tables, bundled.
///
/// Cheap to share: wrap in an `Arc` or hand out `&SentimentTables`.
#[derive(Debug, Clone, Default)]
pub struct SentimentTables {
    pub(crate) lexicon: Lexicon,
    pub(crate) intensifiers: FxHashMap<Box<str>, f64>,
    pub(crate) negations: FxHashSet<Box<str>>,
    pub(crate) emoji: FxHashMap<Box<str>, f64>,
}

impl SentimentTables {
    /// The built-in English tables.
    pub fn defaults() -> Self {
        TablesBuilder::with_defaults().build_unchecked()
    }

    /// Starts an empty builder.
    pub fn builder() -> TablesBuilder {
        TablesBuilder::new()
    }

    /// The word and phrase lexicon.
    #[inline(always)]
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Multiplier for a folded intensifier word.
    #[inline(always)]
    pub fn intensifier(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// Returns `true` if the folded word is a negation trigger.
    #[inline(always)]
    pub fn is_negation(&self, word: &str) -> bool {
        self.negations.contains(word)
    }

    /// Polarity of an emoji run.
    ///
    /// The whole run is looked up first so multi-glyph entries win. Otherwise
    /// the known glyphs of the run are summed; a run with no known glyph
    /// returns `None`.
    pub fn emoji_run(&self, run: &str) -> Option<f64> {
        if let Some(&value) = self.emoji.get(run) {
            return Some(value);
        }

        let mut buf = [0u8; 4];
        let mut total = None;
        for glyph in run.chars() {
            if let Some(&value) = self.emoji.get(&*glyph.encode_utf8(&mut buf)) {
                *total.get_or_insert(0.0) += value;
            }
        }
        total
    }

    /// Number of intensifier entries.
    pub fn intensifier_count(&self) -> usize {
        self.intensifiers.len()
    }

    /// Number of negation triggers.
    pub fn negation_count(&self) -> usize {
        self.negations.len()
    }

    /// Number of emoji entries.
    pub fn emoji_count(&self) -> usize {
        self.emoji.len()
    }
}
