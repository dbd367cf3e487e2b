use anyhow::Result;
use std::env;

pub const DEFAULT_MAX_EXPORT_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub export_path: Option<String>,
    pub max_export_bytes: usize,
    pub pretty_output: bool,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_env_only()
    }

    /// Load configuration from environment variables only (without loading .env files)
    /// This is useful for testing where you want to control the environment directly
    pub fn from_env_only() -> Result<Self> {
        Ok(Config {
            export_path: env::var("PURELYHR_EXPORT_PATH")
                .ok()
                .filter(|path| !path.trim().is_empty()),
            max_export_bytes: env::var("PURELYHR_MAX_EXPORT_BYTES")
                .ok()
                .and_then(|value| value.parse().ok())
                .filter(|limit| *limit > 0)
                .unwrap_or(DEFAULT_MAX_EXPORT_BYTES),
            pretty_output: env::var("PURELYHR_PRETTY_OUTPUT")
                .map(|value| value.eq_ignore_ascii_case("true") || value == "1")
                .unwrap_or(false),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
