//! Emphasis boost and normalization.

use memchr::memchr_iter;
use sentio_types::ScoringParams;

use crate::scorer::types::{Scorer, PUNCT_CAP};

/// Multiplier from the `!` and `?` characters of `text`.
///
/// Each mark counts up to [`PUNCT_CAP`]; the boost is applied once to a
/// clause's raw score, never per token.
#[inline]
pub fn emphasis_boost(text: &str, params: &ScoringParams) -> f64 {
    let bytes = text.as_bytes();
    let exclam = memchr_iter(b'!', bytes).take(PUNCT_CAP).count();
    let question = memchr_iter(b'?', bytes).take(PUNCT_CAP).count();

    1.0 + exclam as f64 * params.exclam_factor + question as f64 * params.question_factor
}

/// Maps an unbounded raw score into `[-1, 1]` via `raw / sqrt(raw^2 + alpha)`.
///
/// Zero and NaN map to zero; infinities map to their sign.
#[inline]
pub fn normalize(raw: f64, alpha: f64) -> f64 {
    if raw == 0.0 || raw.is_nan() {
        return 0.0;
    }
    if raw.is_infinite() {
        return raw.signum();
    }

    // hypot avoids overflowing raw^2 for huge raw scores
    (raw / raw.hypot(alpha.sqrt())).clamp(-1.0, 1.0)
}

impl Scorer {
    #[inline(always)]
    pub(crate) fn compound(&self, raw: f64) -> f64 {
        normalize(raw, self.params.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn no_marks_no_boost() {
        assert_eq!(emphasis_boost("good", &ScoringParams::default()), 1.0);
    }

    #[test]
    fn exclamation_boost() {
        let p = ScoringParams::default();
        assert!(close(emphasis_boost("good!", &p), 1.2));
        assert!(close(emphasis_boost("good!!!", &p), 1.6));
    }

    #[test]
    fn exclamation_is_capped_at_four() {
        let p = ScoringParams::default();
        assert_eq!(emphasis_boost("good!!!!", &p), emphasis_boost("good!!!!!", &p));
        assert_eq!(emphasis_boost("good!!!!", &p), emphasis_boost("!!good!!!!!!!!", &p));
    }

    #[test]
    fn question_boost_is_smaller() {
        let p = ScoringParams::default();
        assert!(close(emphasis_boost("good?", &p), 1.1));
        assert!(close(emphasis_boost("good??????", &p), 1.4));
    }

    #[test]
    fn marks_combine() {
        let p = ScoringParams::default();
        assert!(close(emphasis_boost("what?! really?!", &p), 1.0 + 0.4 + 0.2));
    }

    #[test]
    fn plain_params_disable_boost() {
        assert_eq!(emphasis_boost("good!!!???", &ScoringParams::plain()), 1.0);
    }

    #[test]
    fn normalize_zero() {
        assert_eq!(normalize(0.0, 15.0), 0.0);
        assert_eq!(normalize(-0.0, 15.0), 0.0);
    }

    #[test]
    fn normalize_known_values() {
        assert!(close(normalize(2.0, 15.0), 2.0 / 19.0f64.sqrt()));
        assert!(close(normalize(-3.0, 15.0), -3.0 / 24.0f64.sqrt()));
        assert!(close(normalize(1.0, 15.0), 0.25));
    }

    #[test]
    fn normalize_is_odd() {
        for raw in [0.3, 1.0, 4.5, 20.0] {
            assert!(close(normalize(raw, 15.0), -normalize(-raw, 15.0)));
        }
    }

    #[test]
    fn normalize_bounds() {
        assert_eq!(normalize(f64::INFINITY, 15.0), 1.0);
        assert_eq!(normalize(f64::NEG_INFINITY, 15.0), -1.0);
        assert_eq!(normalize(f64::NAN, 15.0), 0.0);
        assert!(normalize(1e200, 15.0) <= 1.0);
        assert!(normalize(1e200, 15.0) > 0.99);
    }

    #[test]
    fn normalize_is_monotonic() {
        let mut prev = normalize(-50.0, 15.0);
        for i in -49..=50 {
            let next = normalize(i as f64, 15.0);
            assert!(next >= prev);
            prev = next;
        }
    }
}
