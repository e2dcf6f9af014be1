pub mod config;
pub mod error;
pub mod logging;
pub mod tables;
pub mod validation;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use tables::*;
pub use validation::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_loading() {
        let config = AppConfig::default();
        assert_eq!(config.analysis.bundles_path, "data/bundles.csv");
        assert!(config.analysis.cache_results);
    }

    #[test]
    fn test_error_handling() {
        let error = BundlewiseError::validation("test_field", "test message");
        assert_eq!(error.error_code(), "VALIDATION_ERROR");
    }
}
