//! Score-to-label classification and batch aggregation.
//!
//! Both [`label`] and [`summarize`] are pure and total. Anything that can
//! fail (non-finite scores, unreadable input) is rejected before reaching
//! them, see [`classify`].

mod summary;

pub use summary::{Labeled, Summary};

use crate::domain::{ClassifyError, Label, Row, Score};
use crate::scorer::Scorer;
use tracing::{debug, trace};

/// Scores strictly above this are Positive.
pub const POSITIVE_THRESHOLD: Score = 0.05;
/// Scores strictly below this are Negative.
pub const NEGATIVE_THRESHOLD: Score = -0.05;

/// Buckets a compound score. Both bounds are exclusive, so exactly `±0.05`
/// lands on Neutral.
#[must_use]
pub fn label(score: Score) -> Label {
    if score > POSITIVE_THRESHOLD {
        Label::Positive
    } else if score < NEGATIVE_THRESHOLD {
        Label::Negative
    } else {
        Label::Neutral
    }
}

/// Counts rows per label. Labels that never occur are absent from the result.
#[must_use]
pub fn summarize<I>(rows: I) -> Summary
where
    I: IntoIterator,
    I::Item: Labeled,
{
    rows.into_iter().map(|row| row.label()).collect()
}

/// Scores one text unit and classifies it.
pub fn classify<S>(scorer: &S, text: &str) -> Result<Row, ClassifyError>
where
    S: Scorer + ?Sized,
{
    let score = scorer.polarity(text);
    let row = checked_row(text, score)?;
    trace!(label = %row.label, score = row.score, "Classified text");
    Ok(row)
}

/// Scores and classifies a batch, preserving input order.
pub fn classify_all<S, T>(scorer: &S, texts: &[T]) -> Result<Vec<Row>, ClassifyError>
where
    S: Scorer + ?Sized,
    T: AsRef<str>,
{
    let borrowed: Vec<&str> = texts.iter().map(AsRef::as_ref).collect();
    let scores = scorer.polarity_batch(&borrowed);

    let rows = borrowed
        .iter()
        .zip(scores)
        .map(|(text, score)| checked_row(text, score))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = rows.len(), "Classified batch");
    Ok(rows)
}

fn checked_row(text: &str, score: Score) -> Result<Row, ClassifyError> {
    if !score.is_finite() {
        return Err(ClassifyError::NonFiniteScore {
            text: text.to_string(),
            score,
        });
    }
    Ok(Row::new(text, score))
}
