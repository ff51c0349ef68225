//! Normalize, measure, score and rank domains.

pub mod corpus;
pub mod features;
pub mod lexical;
pub mod normalizer;
pub mod pattern;
pub mod ranker;
pub mod reporter;
pub mod scorer;
