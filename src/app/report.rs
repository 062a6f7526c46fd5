use crate::classifier::Summary;
use crate::domain::{Label, Row, Score, format_score};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::{Path, PathBuf};

const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Serialize)]
pub struct SingleReport {
    pub label: Label,
    pub score: Score,
}

impl From<&Row> for SingleReport {
    fn from(row: &Row) -> Self {
        Self {
            label: row.label,
            score: row.score,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub summary: Summary,
    pub total: usize,
    pub output: PathBuf,
    pub generated_at: DateTime<Utc>,
}

impl BatchReport {
    pub fn new(summary: Summary, output: &Path) -> Self {
        let total = summary.total();
        Self {
            summary,
            total,
            output: output.to_path_buf(),
            generated_at: Utc::now(),
        }
    }
}

/// `Sentiment: Positive` / `Score: 0.637`.
pub fn render_single(row: &Row) -> String {
    format!("Sentiment: {}\nScore: {:.3}\n", row.label, row.score)
}

pub fn render_rows(rows: &[Row]) -> String {
    let mut out = String::from("----- Individual Review Analysis -----\n\n");
    let separator = "-".repeat(SEPARATOR_WIDTH);
    for row in rows {
        out.push_str(&format!(
            "Review: {}\nSentiment: {} | Score: {}\n{separator}\n",
            row.text,
            row.label,
            format_score(row.score)
        ));
    }
    out
}

pub fn render_summary(summary: &Summary) -> String {
    format!("\n----- Sentiment Summary -----\n{summary}")
}

pub fn render_saved(path: &Path) -> String {
    format!("Results saved to: {}\n", path.display())
}
