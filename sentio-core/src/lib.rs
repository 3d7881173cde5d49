//! Rule-based lexical sentiment scoring.
//!
//! `sentio-core` turns short free-form text into a [`SentimentScore`]: a
//! compound score in `[-1, 1]`, a [`Label`], and the positive and negative
//! mass behind it.
//!
//! - [`analyzer`]: tokenizer, case folding, contrastive split, phrase matching
//! - [`lexicon`]: the word, phrase, intensifier, negation and emoji tables
//! - [`scorer`]: modifier resolution, emphasis and normalization
//! - [`config`]: TOML configuration layered over the built-in tables
//! - [`journal`]: sentiment-annotated journal entries and topic activity
//!
//! ```
//! use sentio_core::{Label, Scorer};
//!
//! let scorer = Scorer::new();
//! let score = scorer.analyze("It was okay, but the ending was AMAZING");
//! assert_eq!(score.label, Label::Positive);
//! assert_eq!(score.neutral_count, 0);
//! ```

#![warn(missing_docs)]

pub mod analyzer;
pub mod config;
pub mod journal;
pub mod lexicon;
pub mod scorer;

pub use config::{LoadError, SentioConfig};
pub use journal::{ActivityStore, JournalEntry, MemoryActivityStore, TopicActivity};
pub use lexicon::{Lexicon, SentimentTables, TablesBuilder};
pub use scorer::Scorer;
pub use sentio_types::{ConfigError, Label, ScoringParams, SentimentScore};
