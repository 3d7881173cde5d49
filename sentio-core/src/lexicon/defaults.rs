//! Built-in English tables.
//!
//! A small hand-curated set. Callers needing coverage should layer a larger
//! lexicon on top through the config file.

#[rustfmt::skip]
pub(crate) const DEFAULT_LEXICON: &[(&str, f64)] = &[
    // positive
    ("good", 2.0), ("great", 3.0), ("excellent", 4.0), ("amazing", 3.5),
    ("love", 3.0), ("loved", 3.0), ("happy", 2.0), ("nice", 1.5),
    ("wonderful", 3.5), ("fantastic", 3.5), ("best", 3.0), ("enjoy", 2.0),
    ("enjoyed", 2.0), ("fun", 1.5), ("okay", 0.5), ("fine", 0.8),
    // negative
    ("bad", -2.0), ("terrible", -3.5), ("awful", -3.0), ("hate", -3.0),
    ("worst", -4.0), ("sad", -2.0), ("disappointing", -2.0), ("boring", -2.0),
    ("poor", -2.0), ("horrible", -3.5), ("annoying", -2.0), ("angry", -2.5),
    // phrases
    ("not bad", 1.5), ("not good", -1.8), ("no good", -2.5),
    ("worth it", 2.0), ("well done", 2.5), ("top notch", 3.0),
    ("let down", -2.0), ("fell apart", -2.5), ("waste of time", -3.0),
    ("over the moon", 3.0), ("could be better", -1.0),
];

#[rustfmt::skip]
pub(crate) const DEFAULT_INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.5), ("extremely", 2.0), ("so", 1.3), ("really", 1.4),
    ("too", 1.2), ("slightly", 0.8), ("absolutely", 1.8), ("incredibly", 1.8),
    ("totally", 1.5),
];

// Apostrophe forms never survive tokenization ("don't" -> "don", "t"),
// so only the run-together spellings are listed.
#[rustfmt::skip]
pub(crate) const DEFAULT_NEGATIONS: &[&str] = &[
    "not", "never", "no", "cannot", "dont", "cant", "wont", "isnt",
    "wasnt", "arent", "doesnt", "didnt", "neither", "nor",
];

#[rustfmt::skip]
pub(crate) const DEFAULT_EMOJI: &[(&str, f64)] = &[
    ("😊", 2.0), ("🙂", 1.5), ("😍", 3.0), ("😁", 2.0),
    ("😢", -2.0), ("😠", -2.5), ("😡", -3.0), ("😭", -3.0),
    ("😂", 1.5), ("🤩", 3.0), ("👍", 2.0), ("👎", -2.0),
    ("\u{2764}", 2.5), ("💔", -2.5), ("\u{263A}", 1.5), ("\u{2639}", -2.0),
];
