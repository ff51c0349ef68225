use tracing::debug;

use crate::core::types::SimilarityResult;
use crate::pipeline::lexical::lexical_similarity;
use crate::pipeline::normalizer::normalize;
use crate::pipeline::pattern::pattern_analysis;
use crate::pipeline::scorer::combine_scores;

/// Post-ranking filters. `max_results == 0` keeps everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankOptions {
    pub max_results: usize,
    pub min_score: f64,
}

/// Score one candidate against an already normalized target.
fn score_pair(target: &str, candidate: &str) -> SimilarityResult {
    let lexical = lexical_similarity(target, candidate);
    let pattern = pattern_analysis(target, candidate);
    let final_score = combine_scores(&lexical, &pattern);
    SimilarityResult {
        domain: candidate.to_string(),
        final_score,
        lexical,
        pattern,
    }
}

/// Compare a single pair after normalizing both sides.
pub fn compare(a: &str, b: &str) -> SimilarityResult {
    score_pair(&normalize(a), &normalize(b))
}

/// Rank every corpus entry against `target`, best match first.
/// Blank entries and entries equal to the target are skipped; ties keep
/// corpus order.
pub fn rank_similarity<S: AsRef<str>>(target: &str, corpus: &[S]) -> Vec<SimilarityResult> {
    let target = normalize(target);
    let mut results: Vec<SimilarityResult> = corpus
        .iter()
        .map(|entry| normalize(entry.as_ref()))
        .filter(|entry| !entry.is_empty() && *entry != target)
        .map(|entry| score_pair(&target, &entry))
        .collect();

    // sort_by is stable
    results.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
    debug!(
        "ranked {} of {} corpus entries against {:?}",
        results.len(),
        corpus.len(),
        target
    );
    results
}

pub fn rank_with_options<S: AsRef<str>>(
    target: &str,
    corpus: &[S],
    options: &RankOptions,
) -> Vec<SimilarityResult> {
    let mut results = rank_similarity(target, corpus);
    results.retain(|r| r.final_score >= options.min_score);
    if options.max_results > 0 {
        results.truncate(options.max_results);
    }
    results
}
