//! The sentiment scorer.
//!
//! Scoring pipeline per call:
//! - tokenize, then look for a contrastive "but"
//! - resolve phrases, negations, intensifiers and caps over the tokens
//! - boost by `!`/`?` emphasis, normalize to a compound in `[-1, 1]`, label
//!
//! Threading:
//! - [`Scorer`] is `Send + Sync`. Tables are read-only after construction and
//!   all scan state lives on the stack of each call, so one scorer can serve
//!   any number of threads.

mod api;
mod resolve;
mod scoring;
mod types;

pub use resolve::{Mode, ScanState};
pub use scoring::{emphasis_boost, normalize};
pub use types::{Scorer, INTENSIFIER_LOOKAHEAD, PUNCT_CAP};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::TablesBuilder;
    use sentio_types::{Label, ScoringParams, SentimentScore};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scorer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Scorer>();
    }

    #[test]
    fn empty_and_whitespace_are_neutral_zero() {
        let scorer = Scorer::new();
        assert_eq!(scorer.analyze(""), SentimentScore::neutral());
        assert_eq!(scorer.analyze("   \t\n"), SentimentScore::neutral());
    }

    #[test]
    fn positive_word() {
        let s = Scorer::new().analyze("good");
        assert!(close(s.compound, 2.0 / 19.0f64.sqrt()));
        assert_eq!(s.label, Label::Positive);
        assert_eq!(s.pos, 2.0);
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.neutral_count, 0);
    }

    #[test]
    fn negated_phrase_sentence() {
        let s = Scorer::new().analyze("This movie was not good");
        // "not good" is a lexicon phrase (-1.8)
        assert!(close(s.compound, -1.8 / (1.8f64 * 1.8 + 15.0).sqrt()));
        assert_eq!(s.label, Label::Negative);
        assert_eq!(s.neutral_count, 3);
        assert_eq!(s.neg, 1.8);
    }

    #[test]
    fn shouted_exclaimed_sentence() {
        let s = Scorer::new().analyze("The food was EXCELLENT!!!");
        let raw: f64 = 4.0 * 1.5 * 1.6;
        assert!(close(s.compound, raw / (raw * raw + 15.0).sqrt()));
        assert_eq!(s.label, Label::Positive);
        // pos is the un-boosted contribution
        assert_eq!(s.pos, 6.0);
    }

    #[test]
    fn okay_but_amazing_sentence() {
        let s = Scorer::new().analyze("It was okay, but the ending was AMAZING");
        let combined = 0.5 * 0.5 + 1.5 * (3.5 * 1.5);
        assert!(close(s.pos, combined));
        assert_eq!(s.neg, 0.0);
        assert_eq!(s.neutral_count, 0);
        assert!(close(s.compound, combined / (combined * combined + 15.0).sqrt()));
        assert_eq!(s.label, Label::Positive);
    }

    #[test]
    fn sad_emoji_sentence() {
        let s = Scorer::new().analyze("I am so sad 😭");
        // so -> sad: -2.0 * 1.3, then the emoji
        assert!(close(s.neg, 2.6 + 3.0));
        assert_eq!(s.pos, 0.0);
        assert_eq!(s.neutral_count, 2);
        assert_eq!(s.label, Label::Negative);
    }

    #[test]
    fn contrastive_second_clause_dominates() {
        let scorer = Scorer::new();
        let s = scorer.analyze("good but bad");
        assert!(close(s.neg, 2.0));
        assert_eq!(s.label, Label::Negative);

        let s = scorer.analyze("bad but good");
        assert!(close(s.pos, 2.0));
        assert_eq!(s.label, Label::Positive);
    }

    #[test]
    fn contrastive_halves_use_own_emphasis() {
        let scorer = Scorer::new();
        let s = scorer.analyze("good!!!! but bad");
        // 0.5 * (2.0 * 1.8) + 1.5 * -2.0
        assert!(close(s.neg, 1.2));
        assert_eq!(s.pos, 0.0);
    }

    #[test]
    fn contrastive_with_empty_half() {
        let scorer = Scorer::new();
        let s = scorer.analyze("but great");
        assert!(close(s.pos, 4.5));
        let s = scorer.analyze("great but");
        assert!(close(s.pos, 1.5));
    }

    #[test]
    fn clause_score_includes_boost() {
        let scorer = Scorer::new();
        assert_eq!(scorer.clause_score("good"), 2.0);
        assert!(close(scorer.clause_score("good!"), 2.4));
        assert!(close(scorer.clause_score("good?"), 2.2));
    }

    #[test]
    fn unknown_words_only_count_neutral() {
        let s = Scorer::new().analyze("the quick brown fox");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.label, Label::Neutral);
        assert_eq!(s.neutral_count, 4);
    }

    #[test]
    fn punctuation_alone_is_neutral() {
        let s = Scorer::new().analyze("!!!???");
        assert_eq!(s, SentimentScore::neutral());
    }

    #[test]
    fn custom_alpha_changes_compound() {
        let tables = TablesBuilder::new().word("good", 2.0).build().unwrap();
        let params = ScoringParams {
            alpha: 5.0,
            ..Default::default()
        };
        let scorer = Scorer::with_tables(tables, params).unwrap();
        assert!(close(scorer.analyze("good").compound, 2.0 / 9.0f64.sqrt()));
    }

    #[test]
    fn custom_caps_factor() {
        let tables = TablesBuilder::new().word("good", 2.0).build().unwrap();
        let params = ScoringParams {
            caps_factor: 2.0,
            ..Default::default()
        };
        let scorer = Scorer::with_tables(tables, params).unwrap();
        assert_eq!(scorer.clause_score("GOOD"), 4.0);
    }

    #[test]
    fn invalid_params_rejected() {
        let params = ScoringParams {
            alpha: -1.0,
            ..Default::default()
        };
        assert!(Scorer::with_tables(Default::default(), params).is_err());
    }

    #[test]
    fn empty_tables_score_everything_neutral() {
        let scorer = Scorer::with_tables(Default::default(), ScoringParams::default()).unwrap();
        let s = scorer.analyze("great movie 😍!!!");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral_count, 3);
    }

    #[test]
    fn emoji_led_phrase_scores_phrase_only() {
        let scorer = Scorer::new();
        assert_eq!(scorer.clause_score("😍 not bad"), 1.5);

        let s = scorer.analyze("🚀 not bad");
        assert_eq!(s.neutral_count, 0);
        assert_eq!(s.pos, 1.5);
        assert_eq!(s.label, Label::Positive);
    }

    #[test]
    fn analyze_is_idempotent() {
        let scorer = Scorer::new();
        for text in ["good", "not bad at all!", "meh but AMAZING 😍", ""] {
            assert_eq!(scorer.analyze(text), scorer.analyze(text));
        }
    }
}
