use std::path::Path;

use anyhow::{anyhow, Result};
use tracing::{info, warn};

use crate::cli::config::{resolve_config, RunConfig};
use crate::cli::flags::{Cli, Command};
use crate::core::hash::corpus_fingerprint;
use crate::core::time::now_utc;
use crate::pipeline::corpus::{load_corpus, load_labeled_reports, CorpusFilter};
use crate::pipeline::features::{feature_rows, write_features_csv};
use crate::pipeline::normalizer::normalize;
use crate::pipeline::ranker::{compare, rank_with_options};
use crate::pipeline::reporter::{write_report, RankingReport};

pub fn run(cli: Cli) -> Result<()> {
    let run_cfg = resolve_config(&cli)?;
    match cli.command {
        Command::Rank { .. } => {
            let cfg = run_cfg.ok_or_else(|| anyhow!("rank settings could not be resolved"))?;
            run_rank(&cfg).map(|_| ())
        }
        Command::Compare { a, b } => run_compare(&a, &b),
        Command::ExportFeatures { reports, output } => {
            run_export_features(&reports, &output).map(|_| ())
        }
    }
}

pub fn run_rank(cfg: &RunConfig) -> Result<RankingReport> {
    let report = build_ranking(cfg)?;
    write_report(&report, cfg.format, cfg.output.as_deref())?;
    if let Some(path) = &cfg.output {
        info!("ranking written to {}", path.display());
    }
    Ok(report)
}

pub fn build_ranking(cfg: &RunConfig) -> Result<RankingReport> {
    let filter = CorpusFilter::new(&cfg.exclude_patterns)?;
    let corpus = filter.apply(load_corpus(&cfg.corpus)?);
    if corpus.is_empty() {
        warn!("corpus {} is empty", cfg.corpus.display());
    }

    let normalized: Vec<String> = corpus.iter().map(|d| normalize(d)).collect();
    let results = rank_with_options(&cfg.target, &corpus, &cfg.options);
    info!(
        "{} matches for {} (min_score={}, max_results={})",
        results.len(),
        cfg.target,
        cfg.options.min_score,
        cfg.options.max_results
    );

    Ok(RankingReport {
        target: normalize(&cfg.target),
        generated_at: now_utc(),
        corpus_size: corpus.len(),
        corpus_fingerprint: corpus_fingerprint(&normalized),
        results,
    })
}

fn run_compare(a: &str, b: &str) -> Result<()> {
    let result = compare(a, b);
    let json = serde_json::to_string_pretty(&result)?;
    println!("{json}");
    Ok(())
}

pub fn run_export_features(reports: &Path, output: &Path) -> Result<usize> {
    let reports = load_labeled_reports(reports)?;
    if reports.is_empty() {
        return Err(anyhow!("no reports to export"));
    }
    let rows = feature_rows(&reports);
    write_features_csv(&rows, output)?;
    Ok(rows.len())
}
