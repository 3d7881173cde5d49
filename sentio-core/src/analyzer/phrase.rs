//! Multi-word phrase matching.
//!
//! Slides a window of up to `max_len` words over the token stream and looks
//! the growing phrase up in the lexicon. Non-word tokens inside the window are
//! skipped: they neither break the phrase nor appear in its text, but they do
//! count towards the tokens a match consumes.

use crate::analyzer::casefold::CaseFolder;
use crate::analyzer::tokenizer::Token;
use crate::lexicon::Lexicon;

/// A lexicon phrase found in the token stream.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhraseHit<'l> {
    /// The lexicon key that matched.
    pub phrase: &'l str,
    /// Its polarity.
    pub value: f64,
    /// Words in the phrase (always at least 2).
    pub words: usize,
    /// Tokens spanned, including skipped punctuation and emoji.
    pub consumed: usize,
}

/// Greedy phrase lookup over a token stream.
///
/// The window grows one word at a time and returns on the first candidate of
/// two or more words present in the lexicon. With both `"fell apart"` and
/// `"fell apart completely"` in the lexicon, the two-word entry wins.
/// Single words are never returned; they are resolved by the caller.
///
/// # Example
///
/// ```
/// use sentio_core::analyzer::phrase::PhraseMatcher;
/// use sentio_core::analyzer::tokenizer::Tokenizer;
/// use sentio_core::lexicon::SentimentTables;
///
/// let tables = SentimentTables::defaults();
/// let matcher = PhraseMatcher::new(tables.lexicon(), 3);
/// let tokens = Tokenizer::new().tokens("a total waste of time");
/// let mut buf = String::new();
///
/// let hit = matcher.match_at(&tokens, 2, &mut buf).unwrap();
/// assert_eq!(hit.phrase, "waste of time");
/// assert_eq!(hit.consumed, 3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhraseMatcher<'l> {
    lexicon: &'l Lexicon,
    max_len: usize,
    folder: CaseFolder,
}

impl<'l> PhraseMatcher<'l> {
    /// Creates a matcher over `lexicon` with a window of `max_len` words.
    pub fn new(lexicon: &'l Lexicon, max_len: usize) -> Self {
        Self {
            lexicon,
            max_len,
            folder: CaseFolder::new(),
        }
    }

    /// Tries to match a phrase starting at the first word at or after `start`.
    ///
    /// `buf` is scratch space for the candidate phrase. Returns `None` when no
    /// phrase of two or more words matches, in which case the caller handles
    /// exactly one token itself.
    pub fn match_at(&self, tokens: &[Token<'_>], start: usize, buf: &mut String) -> Option<PhraseHit<'l>> {
        // Nothing in the lexicon can match a window under two words.
        if self.max_len < 2 || self.lexicon.longest_phrase() < 2 {
            return None;
        }

        buf.clear();
        let mut words = 0usize;

        for (offset, token) in tokens.get(start..)?.iter().enumerate() {
            if !token.is_word() {
                continue;
            }

            if words > 0 {
                buf.push(' ');
            }
            self.folder.push_folded(token.text, buf);
            words += 1;

            if words >= 2 {
                if let Some((phrase, value)) = self.lexicon.get_entry(buf) {
                    return Some(PhraseHit {
                        phrase,
                        value,
                        words,
                        consumed: offset + 1,
                    });
                }
            }

            if words == self.max_len {
                break;
            }
        }

        None
    }
}
