//! Public scoring API.

use sentio_types::SentimentScore;
use tracing::debug;

use crate::analyzer::contrastive::{split_contrastive, ContrastiveSplit};
use crate::analyzer::tokenizer::Tokenizer;
use crate::scorer::resolve::ScanState;
use crate::scorer::scoring::emphasis_boost;
use crate::scorer::types::Scorer;

impl Scorer {
    /// Scores one text.
    ///
    /// Never fails: empty or whitespace-only input yields
    /// [`SentimentScore::neutral`]. A text containing a standalone "but" is
    /// scored as two clauses, weighted 0.5 before and 1.5 after; that path
    /// reports `pos`/`neg` from the combined score and a `neutral_count` of 0.
    ///
    /// # Example
    ///
    /// ```
    /// use sentio_core::Scorer;
    /// use sentio_types::Label;
    ///
    /// let scorer = Scorer::new();
    /// assert_eq!(scorer.analyze("The food was EXCELLENT!!!").label, Label::Positive);
    /// assert_eq!(scorer.analyze("This movie was not good").label, Label::Negative);
    /// ```
    pub fn analyze(&self, text: &str) -> SentimentScore {
        if text.trim().is_empty() {
            return SentimentScore::neutral();
        }

        let score = match split_contrastive(text) {
            Some(split) => {
                let combined = ContrastiveSplit::combine(
                    self.clause_score(split.first),
                    self.clause_score(split.second),
                );
                // Clause neutral tallies are not tracked on this path.
                SentimentScore::new(
                    self.compound(combined),
                    combined.max(0.0),
                    (-combined).max(0.0),
                    0,
                )
            }
            None => {
                let state = self.score_clause(text);
                SentimentScore::new(
                    self.compound(state.raw),
                    state.pos,
                    state.neg,
                    state.neutral_count,
                )
            }
        };

        debug!(
            compound = score.compound,
            label = %score.label,
            chars = text.len(),
            "scored text"
        );
        score
    }

    /// Raw, emphasis-boosted score of one clause.
    ///
    /// Runs phrase matching, modifier resolution and the emphasis boost on
    /// `text` as a whole. No contrastive split, no normalization.
    pub fn clause_score(&self, text: &str) -> f64 {
        self.score_clause(text).raw
    }

    /// Scan state of one clause with the emphasis boost folded into `raw`.
    ///
    /// `pos` and `neg` stay un-boosted sums of the individual contributions.
    pub fn score_clause(&self, text: &str) -> ScanState {
        let tokens = Tokenizer::new().tokens(text);
        let mut state = self.resolve(&tokens);
        state.raw *= emphasis_boost(text, &self.params);
        state
    }
}
