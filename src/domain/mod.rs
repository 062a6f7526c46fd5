//! Domain layer for sentiment-analyzer.
//!
//! Contains the canonical types shared across all modules:
//! - `Score`: compound polarity produced by a scorer
//! - `Label`: Positive/Negative/Neutral classification of a score
//! - `Row`: one text unit with its derived label and score

pub mod error;
pub mod label;
pub mod row;

pub use error::{ClassifyError, ParseLabelError, ZeroCountError};
pub use label::Label;
pub use row::Row;

/// Compound polarity of a unit of text, expected (not enforced) to lie in `[-1.0, 1.0]`.
pub type Score = f64;

/// Renders a score the way a dataframe writes floats: whole numbers keep a
/// trailing `.0`, everything else uses the shortest round-trip form.
pub fn format_score(score: Score) -> String {
    if score.is_finite() && score.fract() == 0.0 {
        format!("{score:.1}")
    } else {
        score.to_string()
    }
}
