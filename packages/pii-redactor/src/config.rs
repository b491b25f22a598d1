use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Runtime configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the redacted CSV is written
    pub output_path: PathBuf,
    /// Header of the column carrying the opaque record identifier
    pub record_id_column: String,
    /// Header of the column carrying the JSON payload
    pub payload_column: String,
    /// Escape non-ASCII characters in the rendered payload as `\uXXXX`
    pub ascii_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("redacted_output.csv"),
            record_id_column: "record_id".to_string(),
            payload_column: "data_json".to_string(),
            ascii_json: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let defaults = Self::default();

        let config = Self {
            output_path: env::var("REDACT_OUTPUT_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_path),
            record_id_column: env::var("REDACT_RECORD_ID_COLUMN")
                .unwrap_or(defaults.record_id_column),
            payload_column: env::var("REDACT_PAYLOAD_COLUMN")
                .unwrap_or(defaults.payload_column),
            ascii_json: env::var("REDACT_ASCII_JSON")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .context("REDACT_ASCII_JSON must be true or false")?,
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.record_id_column.trim().is_empty() {
            bail!("REDACT_RECORD_ID_COLUMN must not be blank");
        }
        if self.payload_column.trim().is_empty() {
            bail!("REDACT_PAYLOAD_COLUMN must not be blank");
        }
        Ok(())
    }
}
