use std::collections::{BTreeMap, HashSet};

use strsim::levenshtein;

use crate::core::types::LexicalMetrics;

const NGRAM_PAD: &str = "__";

/// Pairwise string measures between two normalized domains.
pub fn lexical_similarity(a: &str, b: &str) -> LexicalMetrics {
    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let longest = a_len.max(b_len).max(1) as f64;

    let distance = levenshtein(a, b);
    let levenshtein_norm = (1.0 - distance as f64 / longest).clamp(0.0, 1.0);

    LexicalMetrics {
        dice: round4(dice_coefficient(a, b)),
        levenshtein: distance,
        levenshtein_norm: round4(levenshtein_norm),
        ngram_jaccard: round4(ngram_jaccard(a, b, 3)),
        lcs_ratio: round4(longest_common_substring(a, b) as f64 / longest),
        char_cosine: round4(char_cosine(a, b)),
        token_jaccard: round4(token_jaccard(a, b)),
        a_len,
        b_len,
    }
}

pub fn round4(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }
    (value * 10_000.0).round() / 10_000.0
}

/// Sorensen-Dice over the sets of adjacent character pairs.
pub fn dice_coefficient(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a_bigrams = bigrams(a);
    let b_bigrams = bigrams(b);
    let total = a_bigrams.len() + b_bigrams.len();
    if a_bigrams.is_empty() || b_bigrams.is_empty() {
        return 0.0;
    }
    let shared = a_bigrams.intersection(&b_bigrams).count();
    2.0 * shared as f64 / total as f64
}

fn bigrams(s: &str) -> HashSet<(char, char)> {
    let chars: Vec<char> = s.chars().collect();
    chars.windows(2).map(|w| (w[0], w[1])).collect()
}

fn ngram_set(s: &str, n: usize) -> HashSet<String> {
    let padded: Vec<char> = format!("{NGRAM_PAD}{s}{NGRAM_PAD}").chars().collect();
    padded
        .windows(n)
        .map(|w| w.iter().collect::<String>())
        .collect()
}

pub fn ngram_jaccard(a: &str, b: &str, n: usize) -> f64 {
    let a_grams = ngram_set(a, n);
    let b_grams = ngram_set(b, n);
    jaccard(&a_grams, &b_grams)
}

/// Length of the longest contiguous run shared by both strings.
pub fn longest_common_substring(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    // Keep the row sized to the shorter input.
    let (outer, inner) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if inner.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; inner.len() + 1];
    let mut curr = vec![0usize; inner.len() + 1];
    let mut best = 0;
    for oc in outer.iter() {
        for (j, ic) in inner.iter().enumerate() {
            curr[j + 1] = if oc == ic { prev[j] + 1 } else { 0 };
            best = best.max(curr[j + 1]);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    best
}

pub fn char_cosine(a: &str, b: &str) -> f64 {
    let a_freq = char_frequencies(a);
    let b_freq = char_frequencies(b);
    if a_freq.is_empty() || b_freq.is_empty() {
        return 0.0;
    }

    let dot: f64 = a_freq
        .iter()
        .map(|(c, n)| (*n as f64) * (*b_freq.get(c).unwrap_or(&0) as f64))
        .sum();
    let mag_a = a_freq.values().map(|n| (*n as f64).powi(2)).sum::<f64>().sqrt();
    let mag_b = b_freq.values().map(|n| (*n as f64).powi(2)).sum::<f64>().sqrt();
    let denom = mag_a * mag_b;
    if denom == 0.0 {
        return 0.0;
    }
    (dot / denom).clamp(0.0, 1.0)
}

fn char_frequencies(s: &str) -> BTreeMap<char, usize> {
    let mut freq = BTreeMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

pub fn tokens(s: &str) -> HashSet<&str> {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn token_jaccard(a: &str, b: &str) -> f64 {
    jaccard(&tokens(a), &tokens(b))
}

fn jaccard<T: Eq + std::hash::Hash>(a: &HashSet<T>, b: &HashSet<T>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_domains_score_one_everywhere() {
        let m = lexical_similarity("paypal.com", "paypal.com");
        assert_eq!(m.dice, 1.0);
        assert_eq!(m.levenshtein, 0);
        assert_eq!(m.levenshtein_norm, 1.0);
        assert_eq!(m.ngram_jaccard, 1.0);
        assert_eq!(m.lcs_ratio, 1.0);
        assert_eq!(m.char_cosine, 1.0);
        assert_eq!(m.token_jaccard, 1.0);
        assert_eq!(m.a_len, 10);
        assert_eq!(m.b_len, 10);
    }

    #[test]
    fn single_substitution() {
        let m = lexical_similarity("paypal.com", "paypa1.com");
        assert_eq!(m.levenshtein, 1);
        assert_eq!(m.levenshtein_norm, 0.9);
        assert_eq!(m.lcs_ratio, 0.5);
        // tokens {paypal, com} vs {paypa1, com}
        assert_eq!(m.token_jaccard, 0.3333);
        // 8 distinct bigrams each, 6 shared
        assert_eq!(m.dice, 0.75);
    }

    #[test]
    fn empty_inputs_do_not_divide_by_zero() {
        let both = lexical_similarity("", "");
        assert_eq!(both.dice, 1.0);
        assert_eq!(both.levenshtein_norm, 1.0);
        assert_eq!(both.lcs_ratio, 0.0);
        assert_eq!(both.char_cosine, 0.0);
        assert_eq!(both.token_jaccard, 0.0);

        let one = lexical_similarity("", "example.com");
        assert_eq!(one.dice, 0.0);
        assert_eq!(one.levenshtein, 11);
        assert_eq!(one.levenshtein_norm, 0.0);
        assert_eq!(one.ngram_jaccard, 0.0);
        assert_eq!(one.char_cosine, 0.0);
    }

    #[test]
    fn dice_single_chars() {
        assert_eq!(dice_coefficient("a", "a"), 1.0);
        assert_eq!(dice_coefficient("a", "b"), 0.0);
        assert_eq!(dice_coefficient("ab", "ab"), 1.0);
    }

    #[test]
    fn longest_common_substring_is_contiguous() {
        assert_eq!(longest_common_substring("abcdef", "zcdez"), 3);
        assert_eq!(longest_common_substring("axbxc", "abc"), 1);
        assert_eq!(longest_common_substring("", "abc"), 0);
        assert_eq!(longest_common_substring("google", "goggle"), 3);
    }

    #[test]
    fn cosine_ignores_order() {
        assert_eq!(round4(char_cosine("abc", "cba")), 1.0);
        assert_eq!(char_cosine("aaa", "bbb"), 0.0);
    }

    #[test]
    fn tokens_are_alphanumeric_runs() {
        let t = tokens("login--secure.paypal.com");
        assert_eq!(t.len(), 4);
        assert!(t.contains("login"));
        assert!(t.contains("com"));
    }

    #[test]
    fn ratios_stay_in_unit_range() {
        let pairs = [
            ("a", "bbbbbbbbbb"),
            ("xn--mnchen-3ya.de", "munchen.de"),
            ("g00gle.com", "google.com"),
            ("-", "."),
        ];
        for (a, b) in pairs {
            let m = lexical_similarity(a, b);
            for v in [
                m.dice,
                m.levenshtein_norm,
                m.ngram_jaccard,
                m.lcs_ratio,
                m.char_cosine,
                m.token_jaccard,
            ] {
                assert!((0.0..=1.0).contains(&v), "{a} vs {b}: {v}");
            }
        }
    }
}
