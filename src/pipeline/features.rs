use std::fs;
use std::path::Path;

use tracing::info;

use crate::core::error::BradError;
use crate::core::types::{Decision, FeatureRow, LabeledReport};
use crate::pipeline::lexical::lexical_similarity;
use crate::pipeline::normalizer::normalize;
use crate::pipeline::pattern::pattern_analysis;

pub const FEATURE_HEADER: &str = "domainA,domainB,dice,levenshteinNorm,ngramJaccard,lcsRatio,charCosine,tokenJaccard,aLen,bLen,hasDigit,hasHyphen,repeatedChars,tldDiff,sldOneEditAway,label";

/// Pairwise training rows for every pair of decided reports. A pair is
/// labelled 1 when either side was judged malicious.
pub fn feature_rows(reports: &[LabeledReport]) -> Vec<FeatureRow> {
    let decided: Vec<(String, Decision)> = reports
        .iter()
        .filter_map(|r| r.decision().map(|d| (normalize(&r.domain), d)))
        .filter(|(domain, _)| !domain.is_empty())
        .collect();

    let mut rows = Vec::new();
    for i in 0..decided.len() {
        for j in (i + 1)..decided.len() {
            let (a, da) = &decided[i];
            let (b, db) = &decided[j];
            let label = u8::from(*da == Decision::Malicious || *db == Decision::Malicious);
            rows.push(FeatureRow {
                domain_a: a.clone(),
                domain_b: b.clone(),
                lexical: lexical_similarity(a, b),
                pattern: pattern_analysis(a, b),
                label,
            });
        }
    }
    rows
}

pub fn features_csv(rows: &[FeatureRow]) -> String {
    let mut out = String::new();
    out.push_str(FEATURE_HEADER);
    out.push('\n');
    for row in rows {
        let l = &row.lexical;
        let p = &row.pattern;
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_field(&row.domain_a),
            csv_field(&row.domain_b),
            l.dice,
            l.levenshtein_norm,
            l.ngram_jaccard,
            l.lcs_ratio,
            l.char_cosine,
            l.token_jaccard,
            l.a_len,
            l.b_len,
            u8::from(p.has_digit),
            u8::from(p.has_hyphen),
            u8::from(p.repeated_chars),
            u8::from(p.tld_diff),
            u8::from(p.sld_one_edit_away),
            row.label
        ));
    }
    out
}

pub fn write_features_csv(rows: &[FeatureRow], path: &Path) -> Result<(), BradError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, features_csv(rows))?;
    info!("wrote {} feature rows to {}", rows.len(), path.display());
    Ok(())
}

/// Quote a CSV field when it carries a separator or quote.
pub fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
