use sentiment_analyzer::app::{Config, ConfigError, LogLevel, OutputFormat};
use serial_test::serial;
use std::{env, fs, path::PathBuf};
use tempfile::TempDir;

// Helper function to clean all environment variables before and after tests
fn clean_all_env_vars() {
    let env_vars = [
        "SENTIMENT_TEXT",
        "SENTIMENT_INPUT",
        "SENTIMENT_OUTPUT",
        "SENTIMENT_COLUMN",
        "SENTIMENT_LEXICON",
        "SENTIMENT_FORMAT",
        "SENTIMENT_QUIET",
        "SENTIMENT_CONFIG_FILE",
        "LOG_LEVEL",
        "LOG_DIRECTIVES",
    ];

    unsafe {
        for var in &env_vars {
            env::remove_var(var);
        }
    }
}

fn write_reviews(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("reviews.csv");
    fs::write(&path, "review_text\nGreat product\n").unwrap();
    path
}

#[test]
#[serial]
fn test_config_from_args_text_mode() {
    clean_all_env_vars();

    let config = Config::from_args([
        "sentiment-analyzer",
        "--text",
        "I love it",
        "--format",
        "json",
        "--log-level",
        "debug",
    ])
    .unwrap();

    assert_eq!(config.text.as_deref(), Some("I love it"));
    assert_eq!(config.input, None);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Debug);
    assert_eq!(config.column, "review_text");
}

#[test]
#[serial]
fn test_config_from_args_batch_mode() {
    clean_all_env_vars();
    let dir = TempDir::new().unwrap();
    let input = write_reviews(&dir);

    let config = Config::from_args([
        "sentiment-analyzer".into(),
        "--input".into(),
        input.clone().into_os_string(),
        "--quiet".into(),
        "--log-directive".into(),
        "sentiment_analyzer::table=debug".into(),
    ])
    .unwrap();

    assert_eq!(config.input.as_ref(), Some(&input));
    assert!(config.quiet);
    assert_eq!(config.log_directives, vec!["sentiment_analyzer::table=debug"]);
    assert_eq!(
        config.output_path(),
        Some(dir.path().join("reviews_with_sentiment.csv"))
    );
}

#[test]
#[serial]
fn test_text_and_input_conflict() {
    clean_all_env_vars();

    let err = Config::from_args([
        "sentiment-analyzer",
        "--text",
        "hello",
        "--input",
        "reviews.csv",
    ])
    .unwrap_err();
    assert!(matches!(err, ConfigError::Cli(_)));
}

#[test]
#[serial]
fn test_missing_input_is_rejected() {
    clean_all_env_vars();

    let err = Config::from_args(["sentiment-analyzer"]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));

    let err = Config::from_args(["sentiment-analyzer", "--input", "/no/such/file.csv"])
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidConfig(_)));
}

#[test]
#[serial]
fn test_config_from_environment() {
    clean_all_env_vars();
    let dir = TempDir::new().unwrap();
    let input = write_reviews(&dir);

    unsafe {
        env::set_var("SENTIMENT_INPUT", &input);
        env::set_var("SENTIMENT_COLUMN", "review_text");
        env::set_var("SENTIMENT_FORMAT", "JSON");
        env::set_var("LOG_LEVEL", "warning");
        env::set_var("LOG_DIRECTIVES", "sentiment_analyzer=info, ,csv=warn");
    }

    let config = Config::from_env().unwrap();

    assert_eq!(config.input.as_ref(), Some(&input));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(
        config.log_directives,
        vec!["sentiment_analyzer=info", "csv=warn"]
    );

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_invalid_environment_values() {
    clean_all_env_vars();

    unsafe {
        env::set_var("SENTIMENT_TEXT", "fine");
        env::set_var("LOG_LEVEL", "loud");
    }
    assert!(matches!(Config::from_env(), Err(ConfigError::EnvError(_))));

    unsafe {
        env::set_var("LOG_LEVEL", "info");
        env::set_var("SENTIMENT_FORMAT", "xml");
    }
    assert!(matches!(Config::from_env(), Err(ConfigError::EnvError(_))));

    clean_all_env_vars();
}

#[test]
#[serial]
fn test_config_from_file() {
    clean_all_env_vars();
    let dir = TempDir::new().unwrap();
    let input = write_reviews(&dir);
    let config_path = dir.path().join("sentiment.toml");
    fs::write(
        &config_path,
        format!(
            "input = {:?}\ncolumn = \"review_text\"\nformat = \"json\"\nquiet = true\n",
            input.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::from_file(&config_path).unwrap();

    assert_eq!(config.input.as_ref(), Some(&input));
    assert_eq!(config.format, OutputFormat::Json);
    assert!(config.quiet);
    assert_eq!(config.log_level, LogLevel::Warn);
    assert_eq!(config.config_file.as_ref(), Some(&config_path));
}

#[test]
#[serial]
fn test_cli_overrides_config_file() {
    clean_all_env_vars();
    let dir = TempDir::new().unwrap();
    let input = write_reviews(&dir);
    let config_path = dir.path().join("sentiment.toml");
    fs::write(
        &config_path,
        format!(
            "input = {:?}\nformat = \"json\"\nlog_level = \"info\"\n",
            input.display().to_string()
        ),
    )
    .unwrap();

    let config = Config::from_args_and_env([
        "sentiment-analyzer".into(),
        "--config-file".into(),
        config_path.clone().into_os_string(),
        "--log-level".into(),
        "debug".into(),
    ])
    .unwrap();

    // From the file
    assert_eq!(config.input.as_ref(), Some(&input));
    assert_eq!(config.format, OutputFormat::Json);
    // From the command line
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_invalid_config_file() {
    clean_all_env_vars();
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("broken.toml");
    fs::write(&config_path, "format = [1, 2").unwrap();

    assert!(matches!(
        Config::from_file(&config_path),
        Err(ConfigError::ParseError(_))
    ));
    assert!(matches!(
        Config::from_file(dir.path().join("missing.toml")),
        Err(ConfigError::FileError(_))
    ));
}

#[test]
fn test_config_validation() {
    let dir = TempDir::new().unwrap();
    let input = write_reviews(&dir);

    let mut config = Config {
        input: Some(input.clone()),
        ..Config::default()
    };
    config.validate().unwrap();

    // Output may not clobber the input
    config.output = Some(input.clone());
    assert!(config.validate().is_err());

    // Output directory must exist
    config.output = Some(dir.path().join("missing").join("out.csv"));
    assert!(config.validate().is_err());

    config.output = None;
    config.column = String::new();
    assert!(config.validate().is_err());

    config.column = "review_text".to_string();
    config.lexicon = Some(dir.path().join("nope.txt"));
    assert!(config.validate().is_err());

    config.lexicon = None;
    config.log_directives = vec!["=debug".to_string()];
    assert!(config.validate().is_err());
}
