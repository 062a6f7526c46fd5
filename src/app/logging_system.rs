use super::config::LogLevel;
use parking_lot::RwLock;
use std::str::FromStr;
use std::sync::{Arc, OnceLock};
use thiserror::Error;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid log level '{input}': {reason}")]
    InvalidLogLevel { input: String, reason: String },

    #[error("Invalid directive format '{input}'. Expected: 'target=level'")]
    InvalidDirectiveFormat { input: String },

    #[error("Empty target in directive '{input}'")]
    EmptyTarget { input: String },

    #[error("Logging system initialization failed: {details}")]
    LoggingInitFailed {
        details: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl LoggingError {
    /// Directive problems only cost one filter entry; everything else means no logging.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, LoggingError::LoggingInitFailed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogDirective {
    pub target: String,
    pub level: LogLevel,
}

impl LogDirective {
    pub fn new(target: impl Into<String>, level: LogLevel) -> Self {
        Self {
            target: target.into(),
            level,
        }
    }

    pub fn parse(directive: &str) -> Result<Self, LoggingError> {
        let Some((target, level)) = directive.split_once('=') else {
            return Err(LoggingError::InvalidDirectiveFormat {
                input: directive.to_string(),
            });
        };
        if level.contains('=') {
            return Err(LoggingError::InvalidDirectiveFormat {
                input: directive.to_string(),
            });
        }

        let target = target.trim();
        if target.is_empty() {
            return Err(LoggingError::EmptyTarget {
                input: directive.to_string(),
            });
        }

        let level = LogLevel::from_str(level).map_err(|reason| LoggingError::InvalidLogLevel {
            input: level.trim().to_string(),
            reason,
        })?;

        Ok(LogDirective::new(target, level))
    }

    /// Directive in `EnvFilter` syntax.
    pub fn to_filter_string(&self) -> String {
        format!("{}={}", self.target, self.level.as_str())
    }
}

pub struct LoggingSystem {
    directives: Arc<RwLock<Vec<LogDirective>>>,
}

impl LoggingSystem {
    pub fn new() -> Self {
        Self {
            directives: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Invalid directives are reported on stderr and skipped.
    pub fn add_directive(&self, directive_str: &str) -> Result<(), LoggingError> {
        match LogDirective::parse(directive_str) {
            Ok(directive) => {
                self.directives.write().push(directive);
                Ok(())
            }
            Err(e) if e.is_recoverable() => {
                eprintln!("Warning: {e}, skipping directive");
                Ok(())
            }
            Err(e) => Err(e),
        }
    }

    pub fn build_filter_string(&self, default_level: LogLevel) -> String {
        let directives = self.directives.read();

        let mut filter_parts = Vec::with_capacity(directives.len() + 1);
        filter_parts.push(default_level.as_str().to_string());
        filter_parts.extend(directives.iter().map(LogDirective::to_filter_string));

        filter_parts.join(",")
    }

    /// Installs the global subscriber. Logs go to stderr so stdout stays
    /// reserved for reports.
    pub fn initialize_tracing(&self, default_level: LogLevel) -> Result<(), LoggingError> {
        let filter_string = self.build_filter_string(default_level);

        let env_filter =
            EnvFilter::try_new(&filter_string).map_err(|e| LoggingError::LoggingInitFailed {
                details: format!("Failed to create EnvFilter with '{filter_string}'"),
                source: Box::new(e),
            })?;

        let subscriber = tracing_subscriber::registry().with(env_filter).with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_level(true)
                .compact(),
        );

        tracing::subscriber::set_global_default(subscriber).map_err(|e| {
            LoggingError::LoggingInitFailed {
                details: "Failed to set global tracing subscriber".to_string(),
                source: Box::new(e),
            }
        })?;

        Ok(())
    }

    pub fn directive_count(&self) -> usize {
        self.directives.read().len()
    }
}

impl Default for LoggingSystem {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets up tracing once per process. Later calls report the first outcome.
pub fn setup_logging_safe(level: LogLevel, directives: &[String]) -> Result<(), LoggingError> {
    static INITIALIZED: OnceLock<bool> = OnceLock::new();

    let initialized = *INITIALIZED.get_or_init(|| {
        let logging_system = LoggingSystem::new();
        let result: Result<(), LoggingError> = (|| {
            for directive in directives {
                logging_system.add_directive(directive)?;
            }
            logging_system.initialize_tracing(level)
        })();
        result.is_ok()
    });

    if initialized {
        Ok(())
    } else {
        Err(LoggingError::LoggingInitFailed {
            details: "Logging system initialization failed".to_string(),
            source: Box::new(std::io::Error::other("Logging initialization error")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_log_directive_parsing_valid_cases() {
        let valid_cases = [
            ("sentiment_analyzer=debug", LogLevel::Debug),
            ("sentiment_analyzer::scorer=trace", LogLevel::Trace),
            ("csv=warn", LogLevel::Warn),
            ("app = info", LogLevel::Info),
            ("table=WARNING", LogLevel::Warn),
        ];

        for (input, expected_level) in valid_cases {
            let directive = LogDirective::parse(input).unwrap();
            assert_eq!(directive.target, input.split('=').next().unwrap().trim());
            assert_eq!(directive.level, expected_level);
        }
    }

    #[test]
    fn test_log_directive_parsing_invalid_cases() {
        let invalid_cases = [
            ("", "empty string"),
            ("scorer", "missing level"),
            ("=warn", "empty target"),
            ("scorer=", "empty level"),
            ("scorer=loud", "invalid level"),
            ("scorer=warn=extra", "too many parts"),
            ("  =warn", "empty target with spaces"),
        ];

        for (input, description) in invalid_cases {
            assert!(
                LogDirective::parse(input).is_err(),
                "Should fail for {description}: {input}"
            );
        }
    }

    #[test]
    fn test_to_filter_string() {
        let directive = LogDirective::new("sentiment_analyzer::table", LogLevel::Debug);
        assert_eq!(directive.to_filter_string(), "sentiment_analyzer::table=debug");
    }

    #[test]
    fn test_invalid_directives_are_skipped() {
        let logging_system = LoggingSystem::new();

        assert!(logging_system.add_directive("scorer=debug").is_ok());
        assert!(logging_system.add_directive("invalid").is_ok());
        assert!(logging_system.add_directive("=info").is_ok());
        assert!(logging_system.add_directive("scorer=nope").is_ok());

        assert_eq!(logging_system.directive_count(), 1);
    }

    #[test]
    fn test_build_filter_string() {
        let logging_system = LoggingSystem::new();
        assert_eq!(logging_system.build_filter_string(LogLevel::Warn), "warn");

        logging_system.add_directive("sentiment_analyzer=debug").unwrap();
        assert_eq!(
            logging_system.build_filter_string(LogLevel::Info),
            "info,sentiment_analyzer=debug"
        );
    }

    #[test]
    fn test_concurrent_directive_modification() {
        let logging_system = Arc::new(LoggingSystem::new());

        let handles: Vec<_> = (0..50)
            .map(|i| {
                let logging_system = Arc::clone(&logging_system);
                thread::spawn(move || {
                    logging_system.add_directive(&format!("target{i}=info"))?;
                    let _ = logging_system.build_filter_string(LogLevel::Warn);
                    Ok::<(), LoggingError>(())
                })
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap().is_ok());
        }
        assert_eq!(logging_system.directive_count(), 50);
    }

    #[test]
    fn test_setup_logging_safe() {
        // Another test may already own the global subscriber; either outcome is fine
        // as long as nothing panics.
        match setup_logging_safe(LogLevel::Warn, &["sentiment_analyzer=info".to_string()]) {
            Ok(()) | Err(LoggingError::LoggingInitFailed { .. }) => {}
            Err(e) => panic!("Unexpected error type: {e:?}"),
        }
    }
}
