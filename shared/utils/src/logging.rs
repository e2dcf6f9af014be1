use anyhow::Result;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::LoggingConfig;

pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let log_file = match &config.file_path {
        Some(path) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            Some(Arc::new(file))
        }
        None => None,
    };

    match (config.format.as_str(), log_file) {
        ("json", Some(file)) => {
            registry
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE).with_writer(file))
                .init();
        }
        ("json", None) => {
            registry
                .with(fmt::layer().json().with_span_events(FmtSpan::CLOSE))
                .init();
        }
        (_, Some(file)) => {
            registry
                .with(fmt::layer().with_span_events(FmtSpan::CLOSE).with_writer(file))
                .init();
        }
        (_, None) => {
            registry
                .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
                .init();
        }
    }

    tracing::info!("Logging initialized with level: {}", config.level);
    Ok(())
}
