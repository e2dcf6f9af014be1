use anyhow::Result;
use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Path to the bundle co-occurrence table (delimited text).
    pub bundles_path: String,
    /// Path to the supersession history table (delimited text).
    pub supersessions_path: String,
    /// Maximum rows to load from either table; None loads everything.
    pub max_rows: Option<usize>,
    /// Cache enhanced results keyed by a dataset fingerprint, so repeated
    /// runs over unchanged inputs skip recomputation.
    pub cache_results: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
    pub file_path: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let config = Config::builder()
            // Start with default values
            .add_source(File::with_name("config/default").required(false))
            // Add environment-specific config
            .add_source(
                File::with_name(&format!(
                    "config/{}",
                    env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // Add local config (gitignored)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables with BUNDLEWISE prefix
            .add_source(Environment::with_prefix("BUNDLEWISE").separator("__"));

        config.build()?.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analysis: AnalysisConfig {
                bundles_path: "data/bundles.csv".to_string(),
                supersessions_path: "data/supersessions.csv".to_string(),
                max_rows: None,
                cache_results: true,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "text".to_string(),
                file_path: None,
            },
        }
    }
}
