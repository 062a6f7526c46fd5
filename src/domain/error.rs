use super::Label;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid label '{input}'. Valid labels: Positive, Negative, Neutral")]
pub struct ParseLabelError {
    pub input: String,
}

/// Raised when a caller-supplied scorer hands back something the classifier
/// cannot meaningfully bucket.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClassifyError {
    #[error("Scorer returned a non-finite score ({score}) for text {text:?}")]
    NonFiniteScore { text: String, score: f64 },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Summary lists {label} with a count of zero; absent labels must be omitted")]
pub struct ZeroCountError {
    pub label: Label,
}
