//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the store is
//! opened. A `.env` file in the working directory is honoured by both binaries
//! (via `dotenvy`).
//!
//! ```bash
//! export DATABASE_URL="sqlite://catalog.db"
//! export EXPORT_DIR="./reports"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite store (default: `sqlite://catalog.db`)
//! - `DB_CREATE_IF_MISSING` - Create the database file if absent (default: `true`)
//! - `EXPORT_DIR` - Directory the report files are written to (default: `.`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://catalog.db";

/// Catalog configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub create_if_missing: bool,
    pub export_dir: PathBuf,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            create_if_missing: true,
            export_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables, falling back to
    /// defaults for anything unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `DB_CREATE_IF_MISSING` is set to something other
    /// than a boolean.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let database_url = Self::load_database_url();
        let create_if_missing = match env::var("DB_CREATE_IF_MISSING") {
            Ok(v) => parse_flag(&v).ok_or_else(|| {
                anyhow::anyhow!("DB_CREATE_IF_MISSING must be 'true' or 'false', got '{}'", v)
            })?,
            Err(_) => defaults.create_if_missing,
        };
        let export_dir = env::var("EXPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.export_dir);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Ok(Self {
            database_url,
            create_if_missing,
            export_dir,
            log_level,
            log_format,
        })
    }

    fn load_database_url() -> String {
        env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string())
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` is not a `sqlite:` URL
    /// - `log_format` is not `text` or `json`
    /// - `export_dir` is empty
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.export_dir.as_os_str().is_empty() {
            anyhow::bail!("EXPORT_DIR must not be empty");
        }

        Ok(())
    }

    pub fn is_json_logging(&self) -> bool {
        self.log_format == "json"
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Create if missing: {}", self.create_if_missing);
        tracing::info!("  Export directory: {}", self.export_dir.display());
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "DATABASE_URL",
        "DB_CREATE_IF_MISSING",
        "EXPORT_DIR",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.log_format = "yaml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());
        assert!(config.is_json_logging());

        config.database_url = "postgres://localhost/catalog".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.export_dir = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert!(config.create_if_missing);
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:///var/lib/cruise/catalog.db");
            env::set_var("DB_CREATE_IF_MISSING", "false");
            env::set_var("EXPORT_DIR", "/tmp/reports");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.database_url, "sqlite:///var/lib/cruise/catalog.db");
        assert!(!config.create_if_missing);
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
        assert!(config.is_json_logging());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_database_url_uses_default() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "  ");
        }

        assert_eq!(Config::load_database_url(), DEFAULT_DATABASE_URL);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_flag_is_rejected() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_CREATE_IF_MISSING", "sometimes");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
