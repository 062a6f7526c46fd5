use super::config::ConfigError;
use super::logging_system::LoggingError;
use crate::domain::ClassifyError;
use crate::scorer::LexiconError;
use crate::table::TableError;
use thiserror::Error;

/// Everything that can stop a run, from bad flags to an unwritable output file.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Please enter some text.")]
    EmptyText,

    #[error("Nothing to analyze: provide either --text or --input")]
    NoInput,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    #[error("Lexicon error: {0}")]
    Lexicon(#[from] LexiconError),

    #[error("Failed to process file: {0}")]
    Table(#[from] TableError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
