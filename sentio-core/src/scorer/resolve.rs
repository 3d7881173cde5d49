//! Modifier resolution: the single pass over a clause's tokens.
//!
//! At each cursor position, in priority order:
//! 1. a lexicon phrase of two or more words starting at the first word at or
//!    after the cursor
//! 2. an emoji run (never negated, never caps-boosted)
//! 3. a punctuation run (skipped; emphasis is counted from raw text)
//! 4. a negation trigger (arms [`Mode::NegationPending`])
//! 5. an intensifier (scales the next lexicon word within the lookahead)
//! 6. a single lexicon word, or a neutral token

use tracing::trace;

use crate::analyzer::casefold::is_shouted;
use crate::analyzer::phrase::PhraseMatcher;
use crate::analyzer::tokenizer::{Token, TokenKind};
use crate::scorer::types::{Scorer, INTENSIFIER_LOOKAHEAD};

/// Negation state carried between tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// No negation pending.
    #[default]
    Idle,
    /// The next resolved lexicon value flips sign.
    NegationPending,
}

/// Per-call accumulator for one clause.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScanState {
    /// Running signed sum of contributions.
    pub raw: f64,
    /// Sum of positive contributions.
    pub pos: f64,
    /// Sum of the magnitudes of negative contributions.
    pub neg: f64,
    /// Word (or unknown emoji) tokens that carried no sentiment.
    pub neutral_count: u32,
    /// Negation state at the end of the pass.
    pub mode: Mode,
}

impl ScanState {
    /// Flips `value` if a negation is pending, consuming it.
    #[inline(always)]
    fn negate_pending(&mut self, value: f64) -> f64 {
        match self.mode {
            Mode::Idle => value,
            Mode::NegationPending => {
                self.mode = Mode::Idle;
                -value
            }
        }
    }

    #[inline(always)]
    fn accumulate(&mut self, value: f64) {
        self.raw += value;
        if value > 0.0 {
            self.pos += value;
        } else {
            self.neg -= value;
        }
    }
}

/// Scratch buffers reused across the tokens of one pass.
#[derive(Default)]
struct Scratch {
    phrase: String,
    word: String,
}

impl Scorer {
    /// Resolves a token stream into raw, positive and negative sums.
    ///
    /// No emphasis boost is applied here; see [`Scorer::clause_score`].
    pub fn resolve(&self, tokens: &[Token<'_>]) -> ScanState {
        let matcher = PhraseMatcher::new(self.tables.lexicon(), self.params.max_phrase_len);
        let mut state = ScanState::default();
        let mut scratch = Scratch::default();
        let mut cursor = 0usize;

        while cursor < tokens.len() {
            cursor += self.step(&matcher, tokens, cursor, &mut state, &mut scratch);
        }

        state
    }

    /// Resolves the token at `cursor` and returns how many tokens it consumed.
    fn step(
        &self,
        matcher: &PhraseMatcher<'_>,
        tokens: &[Token<'_>],
        cursor: usize,
        state: &mut ScanState,
        scratch: &mut Scratch,
    ) -> usize {
        let token = tokens[cursor];

        // A phrase span may open on emoji or punctuation; those tokens are
        // consumed with it.
        if let Some(hit) = matcher.match_at(tokens, cursor, &mut scratch.phrase) {
            let value = state.negate_pending(hit.value);
            trace!(phrase = hit.phrase, value, "phrase");
            state.accumulate(value);
            return hit.consumed;
        }

        match token.kind {
            TokenKind::Word => {}
            TokenKind::Emoji => {
                match self.tables.emoji_run(token.text) {
                    Some(value) => {
                        trace!(emoji = token.text, value, "emoji");
                        state.accumulate(value);
                    }
                    None => state.neutral_count += 1,
                }
                return 1;
            }
            TokenKind::Punct => return 1,
        }

        self.folder.fold_into(token.text, &mut scratch.word);

        if self.tables.is_negation(&scratch.word) {
            state.mode = Mode::NegationPending;
            return 1;
        }

        if let Some(multiplier) = self.tables.intensifier(&scratch.word) {
            return self.intensify(tokens, cursor, multiplier, state, &mut scratch.word);
        }

        match self.tables.lexicon().get(&scratch.word) {
            Some(value) => {
                let value = state.negate_pending(self.emphasize(token.text, value));
                trace!(word = token.text, value, "word");
                state.accumulate(value);
            }
            None => state.neutral_count += 1,
        }

        1
    }

    /// Applies an intensifier at `cursor` to the first lexicon word within
    /// the lookahead window.
    ///
    /// Tokens between the intensifier and its target are skipped. Without a
    /// target, only the intensifier is consumed and a pending negation stays
    /// armed.
    fn intensify(
        &self,
        tokens: &[Token<'_>],
        cursor: usize,
        multiplier: f64,
        state: &mut ScanState,
        word: &mut String,
    ) -> usize {
        let last = (cursor + INTENSIFIER_LOOKAHEAD).min(tokens.len() - 1);

        for target in cursor + 1..=last {
            let token = tokens[target];
            self.folder.fold_into(token.text, word);

            if let Some(value) = self.tables.lexicon().get(word) {
                let value = state.negate_pending(self.emphasize(token.text, value * multiplier));
                trace!(word = token.text, multiplier, value, "intensified");
                state.accumulate(value);
                return target - cursor + 1;
            }
        }

        1
    }

    /// Multiplies shouted tokens by the caps factor.
    #[inline(always)]
    fn emphasize(&self, text: &str, value: f64) -> f64 {
        if is_shouted(text) {
            value * self.params.caps_factor
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::tokenizer::Tokenizer;
    use crate::lexicon::TablesBuilder;
    use sentio_types::ScoringParams;

    fn scorer() -> Scorer {
        let tables = TablesBuilder::new()
            .word("good", 2.0)
            .word("bad", -2.0)
            .intensifier("very", 1.5)
            .intensifier("slightly", 0.8)
            .negation("not")
            .emoji("😊", 2.0)
            .emoji("😭", -3.0)
            .build()
            .unwrap();
        Scorer::with_tables(tables, ScoringParams::default()).unwrap()
    }

    fn resolve(text: &str) -> ScanState {
        scorer().resolve(&Tokenizer::new().tokens(text))
    }

    #[test]
    fn single_word() {
        let s = resolve("good");
        assert_eq!(s.raw, 2.0);
        assert_eq!(s.pos, 2.0);
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn unknown_words_are_neutral() {
        let s = resolve("the cat sat");
        assert_eq!(s.raw, 0.0);
        assert_eq!(s.neutral_count, 3);
    }

    #[test]
    fn negation_flips_once() {
        let s = resolve("not good good");
        assert_eq!(s.raw, 0.0);
        assert_eq!(s.pos, 2.0);
        assert_eq!(s.neg, 2.0);
        assert_eq!(s.mode, Mode::Idle);
    }

    #[test]
    fn negation_does_not_count_as_neutral() {
        let s = resolve("not");
        assert_eq!(s.neutral_count, 0);
        assert_eq!(s.mode, Mode::NegationPending);
    }

    #[test]
    fn negation_survives_unknown_words() {
        let s = resolve("not the movie was good");
        assert_eq!(s.raw, -2.0);
        assert_eq!(s.neutral_count, 3);
    }

    #[test]
    fn double_negation_is_one_pending_flag() {
        assert_eq!(resolve("not not good").raw, -2.0);
    }

    #[test]
    fn caps_emphasis() {
        assert_eq!(resolve("GOOD").raw, 3.0);
        assert_eq!(resolve("Good").raw, 2.0);
    }

    #[test]
    fn caps_then_negation() {
        assert_eq!(resolve("not GOOD").raw, -3.0);
    }

    #[test]
    fn intensifier_scales_next_word() {
        assert_eq!(resolve("very good").raw, 3.0);
        assert_eq!(resolve("slightly bad").raw, -1.6);
    }

    #[test]
    fn intensifier_composes_with_caps() {
        assert_eq!(resolve("very GOOD").raw, 4.5);
    }

    #[test]
    fn intensifier_looks_two_tokens_ahead() {
        let s = resolve("very much good");
        assert_eq!(s.raw, 3.0);
        // "much" is skipped, not counted
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn intensifier_gives_up_after_lookahead() {
        let s = resolve("very much so good");
        assert_eq!(s.raw, 2.0);
        assert_eq!(s.neutral_count, 2);
    }

    #[test]
    fn intensifier_at_end_is_ignored() {
        let s = resolve("good very");
        assert_eq!(s.raw, 2.0);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn stacked_intensifiers_use_the_first() {
        assert_eq!(resolve("very very good").raw, 3.0);
    }

    #[test]
    fn intensifier_consumes_pending_negation() {
        let s = resolve("not very good");
        assert_eq!(s.raw, -3.0);
        assert_eq!(s.mode, Mode::Idle);
    }

    #[test]
    fn failed_intensifier_keeps_negation() {
        let s = resolve("not very the cat good");
        assert_eq!(s.raw, -2.0);
    }

    #[test]
    fn emoji_is_not_negated() {
        let s = resolve("not 😊 good");
        assert_eq!(s.pos, 2.0);
        assert_eq!(s.neg, 2.0);
        assert_eq!(s.raw, 0.0);
    }

    #[test]
    fn emoji_run_sums_glyphs() {
        assert_eq!(resolve("😭😭").raw, -6.0);
    }

    #[test]
    fn unknown_emoji_is_neutral() {
        let s = resolve("🚀");
        assert_eq!(s.raw, 0.0);
        assert_eq!(s.neutral_count, 1);
    }

    #[test]
    fn punctuation_is_skipped() {
        let s = resolve("good !!! ... ??");
        assert_eq!(s.raw, 2.0);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn phrase_takes_precedence_over_negation() {
        let tables = TablesBuilder::new()
            .word("good", 2.0)
            .word("not good", -2.5)
            .negation("not")
            .build()
            .unwrap();
        let scorer = Scorer::with_tables(tables, ScoringParams::default()).unwrap();
        let s = scorer.resolve(&Tokenizer::new().tokens("not good"));
        assert_eq!(s.raw, -2.5);
    }

    #[test]
    fn pending_negation_flips_phrase() {
        let tables = TablesBuilder::new()
            .word("waste of time", -3.0)
            .negation("never")
            .build()
            .unwrap();
        let scorer = Scorer::with_tables(tables, ScoringParams::default()).unwrap();
        let s = scorer.resolve(&Tokenizer::new().tokens("never a waste of time"));
        assert_eq!(s.raw, 3.0);
        assert_eq!(s.neutral_count, 1);
    }

    #[test]
    fn phrase_is_not_caps_boosted() {
        let tables = TablesBuilder::new()
            .word("well done", 2.5)
            .build()
            .unwrap();
        let scorer = Scorer::with_tables(tables, ScoringParams::default()).unwrap();
        let s = scorer.resolve(&Tokenizer::new().tokens("WELL DONE"));
        assert_eq!(s.raw, 2.5);
    }

    #[test]
    fn phrase_wins_over_intensifier() {
        let tables = TablesBuilder::new()
            .word("good", 2.0)
            .word("very good", 2.2)
            .intensifier("very", 1.5)
            .build()
            .unwrap();
        let scorer = Scorer::with_tables(tables, ScoringParams::default()).unwrap();
        let s = scorer.resolve(&Tokenizer::new().tokens("very good"));
        assert_eq!(s.raw, 2.2);
    }

    #[test]
    fn phrase_span_swallows_leading_emoji() {
        let scorer = Scorer::new();
        let s = scorer.resolve(&Tokenizer::new().tokens("😍 not bad"));
        assert_eq!(s.raw, 1.5);
        assert_eq!(s.pos, 1.5);

        let s = scorer.resolve(&Tokenizer::new().tokens("🚀 not bad"));
        assert_eq!(s.raw, 1.5);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn phrase_span_swallows_leading_punctuation() {
        let s = Scorer::new().resolve(&Tokenizer::new().tokens("... waste of time"));
        assert_eq!(s.raw, -3.0);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn emoji_before_a_plain_word_is_scored() {
        let s = Scorer::new().resolve(&Tokenizer::new().tokens("😍 good"));
        assert_eq!(s.raw, 5.0);
    }

    #[test]
    fn empty_stream() {
        assert_eq!(resolve(""), ScanState::default());
    }
}
