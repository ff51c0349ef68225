use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::error::BradError;
use crate::core::types::{OutputFormat, SimilarityResult};
use crate::pipeline::features::csv_field;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingReport {
    pub target: String,
    pub generated_at: DateTime<Utc>,
    pub corpus_size: usize,
    pub corpus_fingerprint: String,
    pub results: Vec<SimilarityResult>,
}

pub fn render(report: &RankingReport, format: OutputFormat) -> Result<String, BradError> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Jsonl => render_jsonl(&report.results),
        OutputFormat::Csv => Ok(render_csv(&report.results)),
        OutputFormat::Markdown => Ok(render_markdown(report)),
    }
}

/// Write to `path`, or stdout when no path is given.
pub fn write_report(
    report: &RankingReport,
    format: OutputFormat,
    path: Option<&Path>,
) -> Result<(), BradError> {
    let body = render(report, format)?;
    match path {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, body)?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(body.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn render_jsonl(results: &[SimilarityResult]) -> Result<String, BradError> {
    let mut lines = String::new();
    for result in results {
        lines.push_str(&serde_json::to_string(result)?);
        lines.push('\n');
    }
    Ok(lines)
}

fn render_csv(results: &[SimilarityResult]) -> String {
    let mut out = String::new();
    out.push_str("rank,domain,finalScore,dice,levenshtein,levenshteinNorm,ngramJaccard,lcsRatio,charCosine,tokenJaccard,flags\n");
    for (idx, r) in results.iter().enumerate() {
        let l = &r.lexical;
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            idx + 1,
            csv_field(&r.domain),
            r.final_score,
            l.dice,
            l.levenshtein,
            l.levenshtein_norm,
            l.ngram_jaccard,
            l.lcs_ratio,
            l.char_cosine,
            l.token_jaccard,
            flag_names(r).join(";")
        ));
    }
    out
}

fn render_markdown(report: &RankingReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("# Similarity report for `{}`\n\n", report.target));
    out.push_str(&format!(
        "- Generated: {}\n- Corpus: {} entries ({})\n\n",
        report.generated_at.to_rfc3339(),
        report.corpus_size,
        report.corpus_fingerprint
    ));
    if report.results.is_empty() {
        out.push_str("_No similar domains found._\n");
        return out;
    }
    out.push_str("| # | Domain | Score | Dice | Lev. norm | Flags |\n");
    out.push_str("|---|--------|-------|------|-----------|-------|\n");
    for (idx, r) in report.results.iter().enumerate() {
        out.push_str(&format!(
            "| {} | {} | {:.4} | {:.4} | {:.4} | {} |\n",
            idx + 1,
            r.domain,
            r.final_score,
            r.lexical.dice,
            r.lexical.levenshtein_norm,
            flag_names(r).join(", ")
        ));
    }
    out
}

/// Names of the pattern flags that fired, in a fixed order.
pub fn flag_names(result: &SimilarityResult) -> Vec<&'static str> {
    let p = &result.pattern;
    [
        (p.leet_match, "leet"),
        (p.has_digit, "digit"),
        (p.has_hyphen, "hyphen"),
        (p.repeated_chars, "repeated"),
        (p.subdomain_suspicious, "subdomain-mimic"),
        (p.tld_diff, "tld-diff"),
        (p.sld_transposition, "transposition"),
        (p.sld_one_edit_away, "one-edit"),
        (p.hyphen_removed_match, "hyphen-removed"),
        (p.contains_known_as_substring, "substring"),
    ]
    .into_iter()
    .filter(|(on, _)| *on)
    .map(|(_, name)| name)
    .collect()
}
