use std::io;

#[derive(thiserror::Error, Debug)]
pub enum BradError {
    #[error("config error: {0}")]
    Config(String),
    #[error("corpus error: {0}")]
    Corpus(String),
    #[error("output error: {0}")]
    Output(String),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl From<serde_json::Error> for BradError {
    fn from(err: serde_json::Error) -> Self {
        BradError::Output(err.to_string())
    }
}

impl From<toml::de::Error> for BradError {
    fn from(err: toml::de::Error) -> Self {
        BradError::Config(err.to_string())
    }
}

impl From<regex::Error> for BradError {
    fn from(err: regex::Error) -> Self {
        BradError::Config(err.to_string())
    }
}
