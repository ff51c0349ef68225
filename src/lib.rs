//! Lexical and typosquatting similarity scoring for reported domains.
//!
//! The core entry point is [`pipeline::ranker::rank_similarity`], which
//! normalizes a target and a caller-supplied corpus, scores every pair and
//! returns matches best first.

pub mod cli;
pub mod config;
pub mod core;
pub mod pipeline;

pub use crate::core::types::{DomainLabels, LexicalMetrics, PatternFlags, SimilarityResult};
pub use crate::pipeline::lexical::lexical_similarity;
pub use crate::pipeline::normalizer::{normalize, split_labels};
pub use crate::pipeline::pattern::pattern_analysis;
pub use crate::pipeline::ranker::{compare, rank_similarity, rank_with_options, RankOptions};
pub use crate::pipeline::scorer::combine_scores;
