//! Streaming Tokenizer Module
//!
//! First stage of the scoring pipeline. Splits raw text into the three kinds of
//! tokens the scorer cares about and drops everything else.
//!
//! ## What It Does
//!
//! Given raw input like `"So GOOD!!! 😍"`, it emits:
//!
//! ```ignore
//! ("So",   TokenKind::Word)
//! ("GOOD", TokenKind::Word)
//! ("!!!",  TokenKind::Punct)
//! ("😍",   TokenKind::Emoji)
//! ```
//!
//! ## Token Classes
//!
//! - **Word**: maximal run of alphanumeric characters or `_`
//! - **Punct**: maximal run of `!`, `?` and `.`
//! - **Emoji**: maximal run of code points from the emoji blocks
//!   (U+2600–U+27BF, U+1F300–U+1F6FF, U+1F900–U+1F9FF)
//!
//! Whitespace, apostrophes, commas, variation selectors and any other character
//! are separators and never appear in a token.
//!
//! ## Key Features
//!
//! - **Zero Allocation**: tokens are slices of the input, case is left untouched
//! - **Streaming**: [`Tokenizer::tokenize`] emits through a callback
//! - **Materialized**: [`Tokenizer::tokens`] collects into a [`TokenStream`]
//!   that stays on the stack for typical short texts
//!
//! ## Usage
//!
//! ```rust
//! use sentio_core::analyzer::tokenizer::{TokenKind, Tokenizer};
//!
//! let mut words = 0;
//! Tokenizer::new().tokenize("not bad at all!", |token| {
//!     if token.kind == TokenKind::Word {
//!         words += 1;
//!     }
//! });
//! assert_eq!(words, 4);
//! ```

use smallvec::SmallVec;

/// Inline capacity of a [`TokenStream`]; longer texts spill to the heap.
pub const INLINE_TOKENS: usize = 32;

/// Classification of a token.
///
/// `#[repr(u8)]` keeps [`Token`] at two words plus a byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// Run of alphanumerics and underscores.
    Word = 0,
    /// Run of `!`, `?` and `.`.
    Punct = 1,
    /// Run of emoji code points.
    Emoji = 2,
}

/// A token: a slice of the original text plus its class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Original text, case preserved.
    pub text: &'a str,
    /// Token class.
    pub kind: TokenKind,
}

impl<'a> Token<'a> {
    /// Creates a token.
    #[inline(always)]
    pub const fn new(text: &'a str, kind: TokenKind) -> Self {
        Self { text, kind }
    }

    /// Returns `true` for [`TokenKind::Word`].
    #[inline(always)]
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Materialized token sequence.
pub type TokenStream<'a> = SmallVec<[Token<'a>; INLINE_TOKENS]>;

#[inline(always)]
pub(crate) fn is_word_char(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

#[inline(always)]
fn is_punct_char(c: char) -> bool {
    matches!(c, '!' | '?' | '.')
}

/// Returns `true` for code points in the emoji blocks the tokenizer recognizes.
#[inline(always)]
pub fn is_emoji(c: char) -> bool {
    matches!(c as u32, 0x2600..=0x27BF | 0x1F300..=0x1F6FF | 0x1F900..=0x1F9FF)
}

#[inline(always)]
fn classify(c: char) -> Option<TokenKind> {
    // Word wins over emoji: a few dingbat numerals are alphanumeric.
    if is_word_char(c) {
        Some(TokenKind::Word)
    } else if is_punct_char(c) {
        Some(TokenKind::Punct)
    } else if is_emoji(c) {
        Some(TokenKind::Emoji)
    } else {
        None
    }
}

/// Stateless tokenizer.
///
/// Unlike a whitespace splitter it accepts raw, un-normalized text: case,
/// repeated whitespace and stray punctuation are all fine.
///
/// ## Example
///
/// ```
/// use sentio_core::analyzer::tokenizer::{TokenKind, Tokenizer};
///
/// let tokens = Tokenizer::new().tokens("Great!! 😊");
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[1].kind, TokenKind::Punct);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a new tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits every token left to right.
    #[inline]
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(Token<'t>),
    {
        let mut chars = text.char_indices().peekable();

        while let Some((start, c)) = chars.next() {
            let Some(kind) = classify(c) else {
                continue;
            };

            let mut end = start + c.len_utf8();
            while let Some(&(idx, next)) = chars.peek() {
                if classify(next) != Some(kind) {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }

            emit(Token::new(&text[start..end], kind));
        }
    }

    /// Tokenizes `text` into a [`TokenStream`].
    #[inline]
    pub fn tokens<'t>(&self, text: &'t str) -> TokenStream<'t> {
        let mut out = TokenStream::new();
        self.tokenize(text, |token| out.push(token));
        out
    }
}
