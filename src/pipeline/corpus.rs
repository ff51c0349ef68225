use std::path::Path;

use regex::Regex;
use tracing::{debug, info, warn};

use crate::core::error::BradError;
use crate::core::types::LabeledReport;
use crate::pipeline::normalizer::{extract_host, normalize};

/// Exclusion patterns matched against normalized corpus entries.
#[derive(Debug, Clone, Default)]
pub struct CorpusFilter {
    patterns: Vec<Regex>,
}

impl CorpusFilter {
    pub fn new(patterns: &[String]) -> Result<Self, BradError> {
        let mut compiled = Vec::new();
        for pat in patterns {
            compiled.push(Regex::new(pat)?);
        }
        Ok(Self { patterns: compiled })
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn excludes(&self, domain: &str) -> bool {
        let normalized = normalize(domain);
        self.patterns.iter().any(|re| re.is_match(&normalized))
    }

    pub fn apply(&self, corpus: Vec<String>) -> Vec<String> {
        if self.is_empty() {
            return corpus;
        }
        let before = corpus.len();
        let kept: Vec<String> = corpus.into_iter().filter(|d| !self.excludes(d)).collect();
        debug!("exclusion patterns dropped {} entries", before - kept.len());
        kept
    }
}

/// Read a corpus file. `.jsonl` files hold one report per line; anything
/// else is one domain (or URL) per line with `#` comments.
pub fn load_corpus(path: &Path) -> Result<Vec<String>, BradError> {
    if is_jsonl(path) {
        let reports = load_labeled_reports(path)?;
        let domains: Vec<String> = reports.into_iter().map(|r| extract_host(&r.domain)).collect();
        info!("loaded {} domains from {}", domains.len(), path.display());
        return Ok(domains);
    }

    let data = std::fs::read_to_string(path)
        .map_err(|e| BradError::Corpus(format!("{}: {}", path.display(), e)))?;
    let mut domains = Vec::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        domains.push(extract_host(line));
    }
    info!("loaded {} domains from {}", domains.len(), path.display());
    Ok(domains)
}

pub fn load_labeled_reports(path: &Path) -> Result<Vec<LabeledReport>, BradError> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| BradError::Corpus(format!("{}: {}", path.display(), e)))?;
    let mut reports = Vec::new();
    for (idx, line) in data.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<LabeledReport>(line) {
            Ok(report) => reports.push(report),
            Err(err) => {
                warn!("skipping line {} of {}: {}", idx + 1, path.display(), err);
            }
        }
    }
    Ok(reports)
}

fn is_jsonl(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("jsonl"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("brad_corpus_tests");
        let _ = std::fs::create_dir_all(&dir);
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn plain_corpus_skips_comments_and_urls_become_hosts() {
        let path = temp_file(
            "plain.txt",
            "# known reports\npaypal.com\n\nhttps://evil.example/login\n  ebay.com  \n",
        );
        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus, vec!["paypal.com", "evil.example", "ebay.com"]);
    }

    #[test]
    fn jsonl_corpus_reads_domains() {
        let path = temp_file(
            "reports.jsonl",
            "{\"domain\":\"paypal.com\",\"investigatorDecision\":\"malicious\"}\nnot json\n{\"domain\":\"ebay.com\"}\n",
        );
        let corpus = load_corpus(&path).unwrap();
        assert_eq!(corpus, vec!["paypal.com", "ebay.com"]);

        let reports = load_labeled_reports(&path).unwrap();
        assert_eq!(reports.len(), 2);
        assert!(reports[1].decision().is_none());
    }

    #[test]
    fn missing_file_is_corpus_error() {
        let err = load_corpus(Path::new("/nonexistent/brad/corpus.txt")).unwrap_err();
        assert!(matches!(err, BradError::Corpus(_)));
    }

    #[test]
    fn filter_drops_matching_entries() {
        let filter = CorpusFilter::new(&[r"\.gov$".to_string(), r"^internal\.".to_string()])
            .unwrap();
        let kept = filter.apply(vec![
            "IRS.GOV".to_string(),
            "internal.corp.com".to_string(),
            "paypal.com".to_string(),
        ]);
        assert_eq!(kept, vec!["paypal.com"]);
    }

    #[test]
    fn bad_pattern_is_config_error() {
        let err = CorpusFilter::new(&["(".to_string()]).unwrap_err();
        assert!(matches!(err, BradError::Config(_)));
    }
}
