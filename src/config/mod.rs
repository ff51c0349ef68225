use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::core::error::BradError;
use crate::core::types::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config/brad.toml";

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct RankingConfig {
    #[serde(default)]
    pub max_results: usize,
    #[serde(default)]
    pub min_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CorpusConfig {
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub ranking: RankingConfig,
    #[serde(default)]
    pub corpus: CorpusConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
        }
    }
}

impl AppConfig {
    pub fn output_format(&self) -> Result<OutputFormat, BradError> {
        OutputFormat::parse(&self.output.format).ok_or_else(|| {
            BradError::Config(format!("unknown output format: {}", self.output.format))
        })
    }

    pub fn validate(&self) -> Result<(), BradError> {
        if !(0.0..=1.0).contains(&self.ranking.min_score) {
            return Err(BradError::Config(format!(
                "ranking.min_score must be within [0, 1], got {}",
                self.ranking.min_score
            )));
        }
        self.output_format()?;
        for pat in &self.corpus.exclude_patterns {
            regex::Regex::new(pat)?;
        }
        Ok(())
    }
}

/// Load `path`, or the default location. A missing file yields defaults.
pub fn load_config(path: Option<&str>) -> Result<AppConfig, BradError> {
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let explicit = path.is_some();
    let path = path.map(Path::new).unwrap_or(default_path);

    if !path.exists() {
        if explicit {
            return Err(BradError::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        debug!("no config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path).map_err(|e| BradError::Config(e.to_string()))?;
    let cfg = parse_config(&content)?;
    debug!("config loaded from {}", path.display());
    Ok(cfg)
}

pub fn parse_config(content: &str) -> Result<AppConfig, BradError> {
    let cfg: AppConfig = toml::from_str(content)?;
    cfg.validate()?;
    Ok(cfg)
}

fn default_format() -> String {
    "json".to_string()
}
