use super::serde_helpers::{
    load_env_list, load_env_path_opt, load_env_string, load_env_string_opt, load_env_var,
};
use super::{ConfigError, LogLevel, OutputFormat};
use crate::table::DEFAULT_TEXT_COLUMN;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[command(author, version, about, long_about = None)]
#[serde(default)]
pub struct Config {
    /// Analyze a single piece of text
    #[arg(long, env = "SENTIMENT_TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// CSV file to analyze row by row
    #[arg(long, short = 'i', env = "SENTIMENT_INPUT")]
    pub input: Option<PathBuf>,

    /// Where to save the annotated CSV (defaults to <input>_with_sentiment.csv)
    #[arg(long, short = 'o', env = "SENTIMENT_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Name of the CSV column holding the text
    #[arg(long, env = "SENTIMENT_COLUMN", default_value = DEFAULT_TEXT_COLUMN)]
    pub column: String,

    /// Lexicon file in `token<TAB>valence` layout (defaults to the built-in lexicon)
    #[arg(long, env = "SENTIMENT_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Output format
    #[arg(long, env = "SENTIMENT_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    /// Skip the per-row listing in batch mode
    #[arg(long, short = 'q', env = "SENTIMENT_QUIET")]
    pub quiet: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    pub log_level: LogLevel,

    /// Extra `target=level` logging directives
    #[arg(long = "log-directive", env = "LOG_DIRECTIVES", value_delimiter = ',')]
    pub log_directives: Vec<String>,

    /// Configuration file path (optional, TOML)
    #[arg(long, env = "SENTIMENT_CONFIG_FILE")]
    #[serde(skip)]
    pub config_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            input: None,
            output: None,
            column: DEFAULT_TEXT_COLUMN.to_string(),
            lexicon: None,
            format: OutputFormat::Text,
            quiet: false,
            log_level: LogLevel::Warn,
            log_directives: Vec::new(),
            config_file: None,
        }
    }
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::try_parse_from(args)?;
        config.post_process()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();

        load_env_string_opt("SENTIMENT_TEXT", &mut config.text);
        load_env_path_opt("SENTIMENT_INPUT", &mut config.input);
        load_env_path_opt("SENTIMENT_OUTPUT", &mut config.output);
        load_env_string("SENTIMENT_COLUMN", &mut config.column);
        load_env_path_opt("SENTIMENT_LEXICON", &mut config.lexicon);
        load_env_var("SENTIMENT_FORMAT", &mut config.format)?;
        load_env_var("SENTIMENT_QUIET", &mut config.quiet)?;
        load_env_var("LOG_LEVEL", &mut config.log_level)?;
        load_env_list("LOG_DIRECTIVES", &mut config.log_directives);
        load_env_path_opt("SENTIMENT_CONFIG_FILE", &mut config.config_file);

        config.post_process()?;
        config.validate()?;
        Ok(config)
    }

    /// CLI arguments (with their env fallbacks) layered over an optional config
    /// file. Values left at their defaults on the command line are taken from
    /// the file.
    pub fn from_args_and_env<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let mut config = Config::try_parse_from(args)?;

        if let Some(path) = config.config_file.clone() {
            let base = Self::load_file(&path)?;
            config.merge_from(base);
        }

        config.post_process()?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut config = Self::load_file(path.as_ref())?;
        config.post_process()?;
        config.validate()?;
        Ok(config)
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.config_file = Some(path.to_path_buf());
        Ok(config)
    }

    fn merge_from(&mut self, base: Config) {
        let defaults = Config::default();

        if self.text.is_none() && self.input.is_none() {
            self.text = base.text;
            self.input = base.input;
        }
        if self.output.is_none() {
            self.output = base.output;
        }
        if self.column == defaults.column {
            self.column = base.column;
        }
        if self.lexicon.is_none() {
            self.lexicon = base.lexicon;
        }
        if self.format == defaults.format {
            self.format = base.format;
        }
        if !self.quiet {
            self.quiet = base.quiet;
        }
        if self.log_level == defaults.log_level {
            self.log_level = base.log_level;
        }
        if self.log_directives.is_empty() {
            self.log_directives = base.log_directives;
        }
    }

    pub fn post_process(&mut self) -> Result<(), ConfigError> {
        self.column = self.column.trim().to_string();
        self.log_directives.retain(|d| !d.trim().is_empty());
        Ok(())
    }

    /// Annotated CSV destination for batch mode.
    pub fn output_path(&self) -> Option<PathBuf> {
        self.output
            .clone()
            .or_else(|| self.input.as_deref().map(crate::table::output_path_for))
    }
}
