use super::{Config, ConfigError};
use crate::app::logging_system::LogDirective;

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (&self.text, &self.input) {
            (None, None) => {
                return Err(ConfigError::InvalidConfig(
                    "Provide either --text or --input".to_string(),
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::InvalidConfig(
                    "--text and --input are mutually exclusive".to_string(),
                ));
            }
            _ => {}
        }

        if self.column.is_empty() {
            return Err(ConfigError::InvalidConfig(
                "Text column name must not be empty".to_string(),
            ));
        }

        if let Some(input) = &self.input
            && !input.is_file()
        {
            return Err(ConfigError::InvalidConfig(format!(
                "Input file does not exist: {}",
                input.display()
            )));
        }

        if let (Some(input), Some(output)) = (&self.input, self.output_path())
            && *input == output
        {
            return Err(ConfigError::InvalidConfig(format!(
                "Output path would overwrite the input file: {}",
                output.display()
            )));
        }

        if let Some(output) = &self.output
            && let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(ConfigError::InvalidConfig(format!(
                "Output directory does not exist: {}",
                parent.display()
            )));
        }

        if let Some(lexicon) = &self.lexicon
            && !lexicon.is_file()
        {
            return Err(ConfigError::InvalidConfig(format!(
                "Lexicon file does not exist: {}",
                lexicon.display()
            )));
        }

        for directive in &self.log_directives {
            LogDirective::parse(directive).map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid log directive: {e}"))
            })?;
        }

        Ok(())
    }
}
