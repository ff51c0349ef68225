use std::path::PathBuf;

use anyhow::{anyhow, Result};

use crate::cli::flags::{Cli, Command};
use crate::config::{load_config, AppConfig};
use crate::core::types::OutputFormat;
use crate::pipeline::ranker::RankOptions;

/// Settings for a `rank` run after flags are layered over the config file.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub target: String,
    pub corpus: PathBuf,
    pub options: RankOptions,
    pub exclude_patterns: Vec<String>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

/// Only `rank` reads the config file; other commands run without it.
pub fn resolve_config(cli: &Cli) -> Result<Option<RunConfig>> {
    match &cli.command {
        Command::Rank {
            target,
            corpus,
            max_results,
            min_score,
            format,
            output,
        } => {
            let app = load_config(cli.config.as_deref())?;
            Ok(Some(resolve_rank(
                &app,
                target,
                corpus,
                *max_results,
                *min_score,
                format.clone().map(OutputFormat::from),
                output.clone(),
            )?))
        }
        _ => Ok(None),
    }
}

pub fn resolve_rank(
    app: &AppConfig,
    target: &str,
    corpus: &std::path::Path,
    max_results: Option<usize>,
    min_score: Option<f64>,
    format: Option<OutputFormat>,
    output: Option<PathBuf>,
) -> Result<RunConfig> {
    let min_score = min_score.unwrap_or(app.ranking.min_score);
    if !(0.0..=1.0).contains(&min_score) {
        return Err(anyhow!("--min-score must be within [0, 1], got {}", min_score));
    }
    let format = match format {
        Some(fmt) => fmt,
        None => app.output_format()?,
    };
    Ok(RunConfig {
        target: target.to_string(),
        corpus: corpus.to_path_buf(),
        options: RankOptions {
            max_results: max_results.unwrap_or(app.ranking.max_results),
            min_score,
        },
        exclude_patterns: app.corpus.exclude_patterns.clone(),
        format,
        output,
    })
}
