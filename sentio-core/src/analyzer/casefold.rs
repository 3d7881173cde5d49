//! Case folding for table lookups.
//!
//! Tokens keep their original case (caps emphasis needs it), so every lookup
//! folds the token into a scratch buffer first. The buffer is owned by the
//! caller and reused across tokens of one call.

/// Lowercases tokens into caller-owned buffers.
///
/// ASCII input takes a byte-wise fast path; anything else goes through
/// Unicode `to_lowercase`, which may expand a character (`İ` → `i̇`).
///
/// # Examples
///
/// ```
/// use sentio_core::analyzer::casefold::CaseFolder;
///
/// let folder = CaseFolder::new();
/// let mut buf = String::new();
/// folder.fold_into("AMAZING", &mut buf);
/// assert_eq!(buf, "amazing");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct CaseFolder;

impl CaseFolder {
    /// Creates a new folder.
    pub const fn new() -> Self {
        Self
    }

    /// Clears `out` and writes the folded form of `input` into it.
    #[inline]
    pub fn fold_into(&self, input: &str, out: &mut String) {
        out.clear();
        self.push_folded(input, out);
    }

    /// Appends the folded form of `input` to `out`.
    #[inline]
    pub fn push_folded(&self, input: &str, out: &mut String) {
        out.reserve(input.len());

        if input.is_ascii() {
            out.extend(input.bytes().map(|b| b.to_ascii_lowercase() as char));
            return;
        }

        for ch in input.chars() {
            if ch.is_ascii() {
                out.push(ch.to_ascii_lowercase());
            } else {
                out.extend(ch.to_lowercase());
            }
        }
    }

    /// Folds `input` into a new String.
    #[inline]
    pub fn fold(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        self.push_folded(input, &mut out);
        out
    }
}

/// Returns `true` if the token is shouted.
///
/// A shouted token has at least one letter, no lowercase letter, and more
/// than one character. `"GOOD"` and `"A1"` are shouted; `"I"`, `"Good"` and
/// `"42"` are not.
#[inline]
pub fn is_shouted(token: &str) -> bool {
    let mut chars = 0usize;
    let mut has_upper = false;

    for c in token.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_upper = true;
        }
        chars += 1;
    }

    has_upper && chars > 1
}
