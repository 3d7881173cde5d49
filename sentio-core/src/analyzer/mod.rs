//! Text analysis stages that feed the scorer.
//!
//! - **Tokenizer**: splits raw text into word, punctuation and emoji tokens
//! - **Casefold**: lowercases tokens for table lookups, detects shouting
//! - **Contrastive**: finds a clause-level "but" and splits around it
//! - **Phrase**: greedy multi-word lexicon lookup over the token stream

pub mod casefold;
pub mod contrastive;
pub mod phrase;
pub mod tokenizer;

pub use casefold::{is_shouted, CaseFolder};
pub use contrastive::{split_contrastive, ContrastiveSplit};
pub use phrase::{PhraseHit, PhraseMatcher};
pub use tokenizer::{Token, TokenKind, TokenStream, Tokenizer};
