pub mod config;
pub mod error;
pub mod logging_system;
pub mod report;

pub use config::{Config, ConfigError, LogLevel, OutputFormat};
pub use error::AppError;
pub use logging_system::{LoggingSystem, setup_logging_safe};

use crate::classifier::{self, Summary};
use crate::domain::{Label, Row};
use crate::scorer::{LexiconScorer, Scorer};
use crate::table::Table;
use report::{BatchReport, SingleReport};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info, warn};

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Single(Row),
    Batch { summary: Summary, output: PathBuf },
}

pub struct App {
    config: Config,
    scorer: Box<dyn Scorer + Send + Sync>,
}

impl App {
    pub fn from_args<I, T>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Config::from_args_and_env(args)?;
        Self::from_config(config)
    }

    /// Loads the configured lexicon, or the built-in one.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let scorer = match &config.lexicon {
            Some(path) => LexiconScorer::from_path(path)?,
            None => LexiconScorer::builtin()?,
        };
        debug!(entries = scorer.lexicon().len(), "Lexicon scorer ready");
        Ok(Self::with_scorer(config, scorer))
    }

    /// Uses a caller-provided scorer instead of a lexicon.
    pub fn with_scorer<S>(config: Config, scorer: S) -> Self
    where
        S: Scorer + Send + Sync + 'static,
    {
        Self {
            config,
            scorer: Box::new(scorer),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Dispatches to single-text or batch mode and prints the report to `out`.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Outcome, AppError> {
        match (&self.config.text, &self.config.input) {
            (Some(text), _) => {
                let row = self.analyze_text(text)?;
                self.print_single(&row, out)?;
                Ok(Outcome::Single(row))
            }
            (None, Some(input)) => {
                let output = self
                    .config
                    .output_path()
                    .unwrap_or_else(|| crate::table::output_path_for(input));
                let summary = self.analyze_csv(input, &output, out)?;
                Ok(Outcome::Batch { summary, output })
            }
            (None, None) => Err(AppError::NoInput),
        }
    }

    pub fn analyze_text(&self, text: &str) -> Result<Row, AppError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyText);
        }
        let row = classifier::classify(&*self.scorer, text)?;
        info!(label = %row.label, score = row.score, "Analyzed text");
        Ok(row)
    }

    /// Scores every row of the configured column, saves the annotated table to
    /// `output` and returns the label counts.
    pub fn analyze_csv<W: Write>(
        &self,
        input: &Path,
        output: &Path,
        out: &mut W,
    ) -> Result<Summary, AppError> {
        let mut table = Table::read(input, &self.config.column)?;
        if table.is_empty() {
            warn!(path = %input.display(), "CSV has no data rows");
        }

        let rows = classifier::classify_all(&*self.scorer, &table.texts())?;
        let summary = classifier::summarize(&rows);

        table.annotate(&rows)?;
        table.write(output)?;

        info!(
            rows = rows.len(),
            positive = summary.get(Label::Positive).unwrap_or(0),
            negative = summary.get(Label::Negative).unwrap_or(0),
            neutral = summary.get(Label::Neutral).unwrap_or(0),
            "CSV analysis complete"
        );

        self.print_batch(&rows, &summary, output, out)?;
        Ok(summary)
    }

    fn print_single<W: Write>(&self, row: &Row, out: &mut W) -> Result<(), AppError> {
        match self.config.format {
            OutputFormat::Text => out.write_all(report::render_single(row).as_bytes())?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, &SingleReport::from(row))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn print_batch<W: Write>(
        &self,
        rows: &[Row],
        summary: &Summary,
        output: &Path,
        out: &mut W,
    ) -> Result<(), AppError> {
        match self.config.format {
            OutputFormat::Text => {
                if !self.config.quiet {
                    out.write_all(report::render_rows(rows).as_bytes())?;
                }
                out.write_all(report::render_summary(summary).as_bytes())?;
                out.write_all(report::render_saved(output).as_bytes())?;
            }
            OutputFormat::Json => {
                let report = BatchReport::new(summary.clone(), output);
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Main entry point for the application
pub fn main() -> anyhow::Result<()> {
    let config = match Config::from_args_and_env(std::env::args_os()) {
        Ok(config) => config,
        // --help / --version and argument errors are rendered by clap itself
        Err(ConfigError::Cli(e)) => e.exit(),
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(2);
        }
    };

    if let Err(e) = setup_logging_safe(config.log_level, &config.log_directives) {
        eprintln!("Warning: {e}, continuing without logging");
    }

    info!("Starting sentiment-analyzer v{}", get_version());

    let app = match App::from_config(config) {
        Ok(app) => app,
        Err(e) => {
            error!("Initialization error: {}", e);
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = app.run(&mut out) {
        error!("Analysis failed: {}", e);
        eprintln!("Error: {e}");
        process::exit(1);
    }

    out.flush()?;
    Ok(())
}
