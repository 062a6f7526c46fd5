//! CSV source and sink for batch runs.
//!
//! A [`Table`] keeps every input column untouched and only adds (or
//! overwrites) the `sentiment` and `compound_score` columns.

mod error;

pub use error::TableError;

use crate::domain::{Row, format_score};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DEFAULT_TEXT_COLUMN: &str = "review_text";
pub const SENTIMENT_COLUMN: &str = "sentiment";
pub const SCORE_COLUMN: &str = "compound_score";
pub const OUTPUT_SUFFIX: &str = "_with_sentiment";

#[derive(Debug, Clone)]
pub struct Table {
    headers: StringRecord,
    records: Vec<StringRecord>,
    text_column: usize,
}

impl Table {
    /// Reads a CSV file and locates `column` among its headers.
    pub fn read<P: AsRef<Path>>(path: P, column: &str) -> Result<Self, TableError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file, column)?;
        info!(
            path = %path.display(),
            records = table.len(),
            column,
            "Loaded CSV"
        );
        Ok(table)
    }

    pub fn from_reader<R: Read>(reader: R, column: &str) -> Result<Self, TableError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);
        let headers = reader.headers()?.clone();

        let Some(text_column) = headers.iter().position(|h| h == column) else {
            return Err(TableError::MissingColumn {
                column: column.to_string(),
                available: headers.iter().map(str::to_string).collect(),
            });
        };

        // Short rows are padded later; long rows have no column to land in.
        let mut records = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() > headers.len() {
                return Err(TableError::TooManyFields {
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: record.len(),
                });
            }
            records.push(record);
        }
        debug!(records = records.len(), text_column, "Parsed CSV records");

        Ok(Self {
            headers,
            records,
            text_column,
        })
    }

    pub fn headers(&self) -> Vec<&str> {
        self.headers.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The text column, one entry per record. Missing cells read as `""`.
    pub fn texts(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.get(self.text_column).unwrap_or_default())
            .collect()
    }

    /// Value of `column` in record `index`, if both exist.
    pub fn cell(&self, index: usize, column: &str) -> Option<&str> {
        let position = self.headers.iter().position(|h| h == column)?;
        self.records.get(index)?.get(position)
    }

    /// Writes each row's label and score into the sentiment columns.
    ///
    /// Existing `sentiment`/`compound_score` columns are overwritten in place,
    /// otherwise they are appended.
    pub fn annotate(&mut self, rows: &[Row]) -> Result<(), TableError> {
        if rows.len() != self.records.len() {
            return Err(TableError::RowCountMismatch {
                expected: self.records.len(),
                actual: rows.len(),
            });
        }

        let label_column = self.ensure_column(SENTIMENT_COLUMN);
        let score_column = self.ensure_column(SCORE_COLUMN);
        let width = self.headers.len();

        for (record, row) in self.records.iter_mut().zip(rows) {
            let mut fields: Vec<String> = record.iter().map(str::to_string).collect();
            fields.resize(width, String::new());
            fields[label_column] = row.label.to_string();
            fields[score_column] = format_score(row.score);
            *record = StringRecord::from(fields);
        }

        Ok(())
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.write_to(file)?;
        info!(path = %path.display(), records = self.len(), "Saved CSV");
        Ok(())
    }

    pub fn write_to<W: Write>(&self, writer: W) -> Result<(), TableError> {
        let mut writer = WriterBuilder::new().from_writer(writer);
        writer.write_record(&self.headers)?;
        for record in &self.records {
            writer.write_record(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(position) = self.headers.iter().position(|h| h == name) {
            return position;
        }
        self.headers.push_field(name);
        self.headers.len() - 1
    }
}

/// `reviews.csv` becomes `reviews_with_sentiment.csv` in the same directory.
pub fn output_path_for(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match input.extension().and_then(|e| e.to_str()) {
        Some(ext) if !ext.eq_ignore_ascii_case("csv") => format!("{stem}.{ext}{OUTPUT_SUFFIX}.csv"),
        _ => format!("{stem}{OUTPUT_SUFFIX}.csv"),
    };
    input.with_file_name(name)
}
