use serde::{Deserialize, Serialize};

/// Parts of a domain from a naive dot split (no public suffix list).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainLabels {
    pub labels: Vec<String>,
    pub subdomain: String,
    pub second_level: String,
    pub top_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LexicalMetrics {
    pub dice: f64,
    pub levenshtein: usize,
    pub levenshtein_norm: f64,
    pub ngram_jaccard: f64,
    pub lcs_ratio: f64,
    pub char_cosine: f64,
    pub token_jaccard: f64,
    pub a_len: usize,
    pub b_len: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternFlags {
    pub has_digit: bool,
    pub has_hyphen: bool,
    pub repeated_chars: bool,
    pub subdomain_suspicious: bool,
    pub tld_diff: bool,
    pub sld_transposition: bool,
    pub leet_match: bool,
    pub sld_one_edit_away: bool,
    pub hyphen_removed_match: bool,
    pub contains_known_as_substring: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityResult {
    pub domain: String,
    pub final_score: f64,
    pub lexical: LexicalMetrics,
    pub pattern: PatternFlags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Malicious,
    Benign,
}

impl Decision {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "malicious" => Some(Decision::Malicious),
            "benign" => Some(Decision::Benign),
            _ => None,
        }
    }
}

/// A reported domain with the investigator's verdict, as exported from storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledReport {
    pub domain: String,
    #[serde(default, alias = "investigatorDecision")]
    pub decision: Option<String>,
}

impl LabeledReport {
    pub fn decision(&self) -> Option<Decision> {
        self.decision.as_deref().and_then(Decision::parse)
    }
}

/// One pairwise training row.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub domain_a: String,
    pub domain_b: String,
    pub lexical: LexicalMetrics,
    pub pattern: PatternFlags,
    pub label: u8,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Jsonl,
    Csv,
    Markdown,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "jsonl" => Some(OutputFormat::Jsonl),
            "csv" => Some(OutputFormat::Csv),
            "md" | "markdown" => Some(OutputFormat::Markdown),
            _ => None,
        }
    }
}
