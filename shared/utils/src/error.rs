use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum BundlewiseError {
    #[error("Table load error: {message}")]
    TableLoad { message: String },

    #[error("Validation error: {field} - {message}")]
    Validation { field: String, message: String },

    #[error("Analysis error: {message}")]
    Analysis { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("I/O error: {message}")]
    Io { message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BundlewiseError {
    pub fn table_load(message: impl Into<String>) -> Self {
        Self::TableLoad {
            message: message.into(),
        }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn analysis(message: impl Into<String>) -> Self {
        Self::Analysis {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::TableLoad { .. } => "TABLE_LOAD_ERROR",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Analysis { .. } => "ANALYSIS_ERROR",
            Self::Configuration { .. } => "CONFIGURATION_ERROR",
            Self::Io { .. } => "IO_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

pub type BundlewiseResult<T> = Result<T, BundlewiseError>;

// Conversion from common error types
impl From<std::io::Error> for BundlewiseError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

impl From<csv::Error> for BundlewiseError {
    fn from(error: csv::Error) -> Self {
        Self::table_load(error.to_string())
    }
}

impl From<serde_json::Error> for BundlewiseError {
    fn from(error: serde_json::Error) -> Self {
        Self::validation("JSON", error.to_string())
    }
}

impl From<config::ConfigError> for BundlewiseError {
    fn from(error: config::ConfigError) -> Self {
        Self::configuration(error.to_string())
    }
}
