//! Contrastive clause detection.
//!
//! Finds the first standalone "but" in a text, case-insensitively, and splits
//! the text around it. The scorer weights the clause after "but" more heavily
//! than the clause before it.

use memchr::memchr2_iter;

use crate::analyzer::tokenizer::is_word_char;

/// Weight of the clause before "but".
pub const FIRST_CLAUSE_WEIGHT: f64 = 0.5;

/// Weight of the clause after "but".
pub const SECOND_CLAUSE_WEIGHT: f64 = 1.5;

/// A text split at its first contrastive "but".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastiveSplit<'a> {
    /// Text before "but", trimmed. May be empty.
    pub first: &'a str,
    /// Text after "but", trimmed. May be empty.
    pub second: &'a str,
}

impl ContrastiveSplit<'_> {
    /// Combines the two clause scores with the fixed clause weights.
    #[inline(always)]
    pub fn combine(score_first: f64, score_second: f64) -> f64 {
        FIRST_CLAUSE_WEIGHT * score_first + SECOND_CLAUSE_WEIGHT * score_second
    }
}

/// Splits `text` at the first standalone "but".
///
/// "but" must be bounded by non-word characters or the ends of the text, so
/// `"butter"` and `"rebut"` never split. Returns `None` when no such word
/// exists.
///
/// # Example
///
/// ```
/// use sentio_core::analyzer::contrastive::split_contrastive;
///
/// let split = split_contrastive("It was okay, BUT the ending was great").unwrap();
/// assert_eq!(split.first, "It was okay,");
/// assert_eq!(split.second, "the ending was great");
/// ```
pub fn split_contrastive(text: &str) -> Option<ContrastiveSplit<'_>> {
    let bytes = text.as_bytes();

    for pos in memchr2_iter(b'b', b'B', bytes) {
        let end = pos + 3;
        if end > bytes.len() {
            break;
        }
        if !bytes[pos + 1].eq_ignore_ascii_case(&b'u') || !bytes[pos + 2].eq_ignore_ascii_case(&b't')
        {
            continue;
        }

        // `pos` and `end` sit next to ASCII bytes, so both are char boundaries.
        let bounded_before = text[..pos].chars().next_back().is_none_or(|c| !is_word_char(c));
        let bounded_after = text[end..].chars().next().is_none_or(|c| !is_word_char(c));

        if bounded_before && bounded_after {
            return Some(ContrastiveSplit {
                first: text[..pos].trim(),
                second: text[end..].trim(),
            });
        }
    }

    None
}
