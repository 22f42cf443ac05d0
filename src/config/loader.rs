//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::LotpackConfig;
use crate::domain::errors::LotpackError;
use crate::domain::result::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;

static ENV_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid"));

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into LotpackConfig
/// 4. Applies environment variable overrides (LOTPACK_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - A referenced environment variable is unset
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use lotpack::config::loader::load_config;
///
/// let config = load_config("lotpack.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<LotpackConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(LotpackError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        LotpackError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_config(&contents)
}

/// Parses configuration text, applying substitution, overrides and validation
pub fn parse_config(contents: &str) -> Result<LotpackConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: LotpackConfig = toml::from_str(&contents)
        .map_err(|e| LotpackError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        LotpackError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error if a referenced environment variable is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let processed = ENV_PLACEHOLDER.replace_all(line, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => value,
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                    caps[0].to_string()
                }
            }
        });
        result.push_str(&processed);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(LotpackError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using LOTPACK_* prefix
///
/// Environment variables follow the pattern: LOTPACK_<SECTION>_<KEY>
/// For example: LOTPACK_ARCHIVE_OUTPUT_DIR, LOTPACK_FETCH_CONCURRENCY
fn apply_env_overrides(config: &mut LotpackConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("LOTPACK_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }
    if let Ok(val) = std::env::var("LOTPACK_APPLICATION_DRY_RUN") {
        config.application.dry_run = val.parse().unwrap_or(false);
    }

    // Input overrides
    if let Ok(val) = std::env::var("LOTPACK_INPUT_ITEMS_PATH") {
        config.input.items_path = Some(val);
    }

    // Fetch overrides
    if let Ok(val) = std::env::var("LOTPACK_FETCH_TIMEOUT_SECONDS") {
        if let Ok(secs) = val.parse() {
            config.fetch.timeout_seconds = secs;
        }
    }
    if let Ok(val) = std::env::var("LOTPACK_FETCH_CONCURRENCY") {
        if let Ok(concurrency) = val.parse() {
            config.fetch.concurrency = concurrency;
        }
    }
    if let Ok(val) = std::env::var("LOTPACK_FETCH_USER_AGENT") {
        config.fetch.user_agent = val;
    }
    if let Ok(val) = std::env::var("LOTPACK_FETCH_TLS_VERIFY") {
        config.fetch.tls_verify = val.parse().unwrap_or(true);
    }

    // Archive overrides
    if let Ok(val) = std::env::var("LOTPACK_ARCHIVE_OUTPUT_DIR") {
        config.archive.output_dir = val;
    }
    if let Ok(val) = std::env::var("LOTPACK_ARCHIVE_FILE_NAME") {
        config.archive.file_name = val;
    }
    if let Ok(val) = std::env::var("LOTPACK_ARCHIVE_COMPRESSION_LEVEL") {
        if let Ok(level) = val.parse() {
            config.archive.compression_level = level;
        }
    }

    // Logging overrides
    if let Ok(val) = std::env::var("LOTPACK_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("LOTPACK_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
