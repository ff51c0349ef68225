use strsim::levenshtein;

use crate::core::types::PatternFlags;
use crate::pipeline::normalizer::split_labels;

/// Typosquatting indicators between two normalized domains. Directional:
/// `subdomain_suspicious` asks whether `a` hides `b`'s brand in a subdomain.
pub fn pattern_analysis(a: &str, b: &str) -> PatternFlags {
    let la = split_labels(a);
    let lb = split_labels(b);
    let sld_a = la.second_level.as_str();
    let sld_b = lb.second_level.as_str();

    let leet_a = leet_normalize(sld_a);
    let leet_b = leet_normalize(sld_b);

    PatternFlags {
        has_digit: has_digit(a) || has_digit(b),
        has_hyphen: a.contains('-') || b.contains('-'),
        repeated_chars: has_char_run(a, 3) || has_char_run(b, 3),
        subdomain_suspicious: !la.subdomain.is_empty() && la.subdomain == sld_b,
        tld_diff: la.top_level != lb.top_level,
        sld_transposition: is_adjacent_transposition(sld_a, sld_b),
        leet_match: leet_a == leet_b || levenshtein(&leet_a, &leet_b) <= 1,
        sld_one_edit_away: levenshtein(sld_a, sld_b) <= 1,
        hyphen_removed_match: sld_a.replace('-', "") == sld_b.replace('-', ""),
        contains_known_as_substring: sld_a.contains(sld_b) || sld_b.contains(sld_a),
    }
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

/// True when some character appears `run` or more times in a row.
pub fn has_char_run(s: &str, run: usize) -> bool {
    let mut last = None;
    let mut count = 0;
    for c in s.chars() {
        if Some(c) == last {
            count += 1;
        } else {
            last = Some(c);
            count = 1;
        }
        if count >= run {
            return true;
        }
    }
    false
}

/// Equal length, exactly two differing positions, adjacent and swapped.
pub fn is_adjacent_transposition(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.len() != b.len() {
        return false;
    }
    let diffs: Vec<usize> = (0..a.len()).filter(|&i| a[i] != b[i]).collect();
    match diffs.as_slice() {
        [i, j] => *j == *i + 1 && a[*i] == b[*j] && a[*j] == b[*i],
        _ => false,
    }
}

fn leet_char(c: char) -> char {
    match c {
        '0' => 'o',
        '1' => 'l',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '7' => 't',
        '$' => 's',
        '@' => 'a',
        '|' => 'l',
        other => other,
    }
}

/// Keep only ASCII alphanumerics, then undo common leet substitutions.
pub fn leet_normalize(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(leet_char)
        .collect()
}
