use crate::core::types::{LexicalMetrics, PatternFlags};
use crate::pipeline::lexical::round4;

pub const WEIGHT_DICE: f64 = 0.30;
pub const WEIGHT_LEVENSHTEIN: f64 = 0.20;
pub const WEIGHT_NGRAM: f64 = 0.18;
pub const WEIGHT_LCS: f64 = 0.17;
pub const WEIGHT_COSINE: f64 = 0.10;
pub const WEIGHT_TOKEN: f64 = 0.05;

pub const BONUS_LEET: f64 = 0.06;
pub const BONUS_DIGIT: f64 = 0.04;
pub const BONUS_HYPHEN: f64 = 0.02;
pub const BONUS_TLD_DIFF: f64 = 0.03;
pub const BONUS_TRANSPOSITION: f64 = 0.04;
pub const BONUS_ONE_EDIT: f64 = 0.05;
pub const BONUS_HYPHEN_REMOVED: f64 = 0.05;
pub const BONUS_REPEATED: f64 = 0.03;

/// Weighted lexical base plus flat heuristic bonuses, clamped to [0, 1].
/// Bonuses are summed in a fixed order so rounding is reproducible.
pub fn combine_scores(lexical: &LexicalMetrics, pattern: &PatternFlags) -> f64 {
    let base = finite(lexical.dice) * WEIGHT_DICE
        + finite(lexical.levenshtein_norm) * WEIGHT_LEVENSHTEIN
        + finite(lexical.ngram_jaccard) * WEIGHT_NGRAM
        + finite(lexical.lcs_ratio) * WEIGHT_LCS
        + finite(lexical.char_cosine) * WEIGHT_COSINE
        + finite(lexical.token_jaccard) * WEIGHT_TOKEN;

    let mut bonus = 0.0;
    for (flag, value) in [
        (pattern.leet_match, BONUS_LEET),
        (pattern.has_digit, BONUS_DIGIT),
        (pattern.has_hyphen, BONUS_HYPHEN),
        (pattern.tld_diff, BONUS_TLD_DIFF),
        (pattern.sld_transposition, BONUS_TRANSPOSITION),
        (pattern.sld_one_edit_away, BONUS_ONE_EDIT),
        (pattern.hyphen_removed_match, BONUS_HYPHEN_REMOVED),
        (pattern.repeated_chars, BONUS_REPEATED),
    ] {
        if flag {
            bonus += value;
        }
    }

    round4((base + bonus).clamp(0.0, 1.0))
}

fn finite(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lexical::lexical_similarity;
    use crate::pipeline::pattern::pattern_analysis;

    fn metrics(value: f64) -> LexicalMetrics {
        LexicalMetrics {
            dice: value,
            levenshtein: 0,
            levenshtein_norm: value,
            ngram_jaccard: value,
            lcs_ratio: value,
            char_cosine: value,
            token_jaccard: value,
            a_len: 0,
            b_len: 0,
        }
    }

    #[test]
    fn weights_sum_to_one() {
        let total = WEIGHT_DICE
            + WEIGHT_LEVENSHTEIN
            + WEIGHT_NGRAM
            + WEIGHT_LCS
            + WEIGHT_COSINE
            + WEIGHT_TOKEN;
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn base_only() {
        let score = combine_scores(&metrics(0.5), &PatternFlags::default());
        assert_eq!(score, 0.5);
        assert_eq!(combine_scores(&metrics(0.0), &PatternFlags::default()), 0.0);
    }

    #[test]
    fn bonuses_are_additive() {
        let flags = PatternFlags {
            has_digit: true,
            has_hyphen: true,
            ..PatternFlags::default()
        };
        assert_eq!(combine_scores(&metrics(0.5), &flags), 0.56);
    }

    #[test]
    fn overshoot_is_clamped() {
        let flags = PatternFlags {
            leet_match: true,
            has_digit: true,
            sld_one_edit_away: true,
            hyphen_removed_match: true,
            ..PatternFlags::default()
        };
        assert_eq!(combine_scores(&metrics(1.0), &flags), 1.0);
    }

    #[test]
    fn non_finite_metrics_contribute_nothing() {
        let mut m = metrics(0.5);
        m.dice = f64::NAN;
        m.char_cosine = f64::INFINITY;
        let score = combine_scores(&m, &PatternFlags::default());
        assert_eq!(score, 0.3);
    }

    #[test]
    fn digit_swap_pair_has_known_score() {
        let lexical = lexical_similarity("paypal.com", "paypa1.com");
        let pattern = pattern_analysis("paypal.com", "paypa1.com");
        assert_eq!(lexical.ngram_jaccard, 0.6);
        assert_eq!(lexical.char_cosine, 0.9286);
        // base 0.707525, bonuses leet + digit + one edit = 0.15
        assert_eq!(combine_scores(&lexical, &pattern), 0.8575);
    }

    #[test]
    fn identical_domain_is_maximal() {
        for d in ["paypal.com", "a", "xn--mnchen-3ya.de", "login.secure-bank.co.uk"] {
            let score = combine_scores(&lexical_similarity(d, d), &pattern_analysis(d, d));
            assert_eq!(score, 1.0, "{d}");
        }
    }
}
