use super::{Label, Score};
use crate::classifier;
use serde::{Deserialize, Serialize};

/// One text unit paired with its derived label and score.
///
/// Built once per input and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub text: String,
    pub label: Label,
    pub score: Score,
}

impl Row {
    /// Derives the label from `score` with the standard thresholds.
    pub fn new(text: impl Into<String>, score: Score) -> Self {
        Self {
            text: text.into(),
            label: classifier::label(score),
            score,
        }
    }
}
