use crate::error::{BundlewiseError, BundlewiseResult};
use regex::Regex;
use validator::{Validate, ValidationErrors};

pub fn validate_model<T: Validate>(model: &T) -> BundlewiseResult<()> {
    match model.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let error_messages = format_validation_errors(&errors);
            Err(BundlewiseError::validation("model", error_messages))
        }
    }
}

pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();

    for (field, field_errors) in errors.field_errors() {
        for error in field_errors {
            let message = match &error.code {
                std::borrow::Cow::Borrowed("length") => {
                    format!("Length validation failed for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("range") => {
                    format!("Value out of range for field '{}'", field)
                }
                std::borrow::Cow::Borrowed("required") => {
                    format!("Field '{}' is required", field)
                }
                _ => format!("Validation failed for field '{}': {}", field, error.code),
            };
            messages.push(message);
        }
    }

    messages.join(", ")
}

/// Normalizes a raw part identifier from spreadsheet input: trims whitespace
/// and strips the trailing `.0` float artifact that numeric part numbers pick
/// up when a spreadsheet column is typed as floating point.
///
/// Both table loaders apply the same normalization so identifier equality
/// across the bundle and supersession tables is reliable.
pub fn normalize_part_number(raw: &str) -> String {
    let trimmed = raw.trim();

    let float_artifact = Regex::new(r"^(\d+)\.0$").unwrap();
    if let Some(captures) = float_artifact.captures(trimmed) {
        return captures[1].to_string();
    }

    trimmed.to_string()
}

/// Checks whether a raw cell value represents a missing entry. Spreadsheet
/// exports encode missing part numbers as empty strings or "nan" variants.
pub fn is_missing_value(raw: &str) -> bool {
    let normalized = raw.trim().to_lowercase();
    matches!(normalized.as_str(), "" | "nan" | "none" | "null" | "n/a")
}
