//! Bundle domain models for the Bundlewise analysis system.
//!
//! This module defines bundle-related data structures: the raw co-occurrence
//! record loaded from dealer spreadsheets and the supersession-enhanced
//! record produced by the analysis service.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A pair of parts observed to be purchased together, with the co-occurrence
/// confidence and frequency reported by the source spreadsheet.
///
/// Part numbers are normalized by the table loaders (trimmed, trailing `.0`
/// float artifacts stripped) before records are constructed, so identifier
/// equality against the supersession table is reliable.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq)]
pub struct BundleRecord {
    #[validate(length(min = 1, max = 100, message = "Part number must be between 1 and 100 characters"))]
    pub part_1: String,
    #[validate(length(min = 1, max = 100, message = "Part number must be between 1 and 100 characters"))]
    pub part_2: String,
    /// Co-occurrence count. Non-numeric source values default to 0.
    pub frequency: u64,
    /// Base confidence in percent. Non-numeric source values default to 0.
    #[validate(range(min = 0.0, max = 100.0, message = "Confidence must be between 0 and 100"))]
    pub confidence: f64,
    /// Unit price from the source table; `None` when missing or non-numeric.
    /// The enhancer substitutes its documented default.
    #[validate(range(min = 0.0, message = "Unit price must be positive"))]
    pub unit_price: Option<f64>,
    #[validate(length(max = 500))]
    pub description_1: Option<String>,
    #[validate(length(max = 500))]
    pub description_2: Option<String>,
}

impl BundleRecord {
    /// Creates a bundle record with the given parts and metrics.
    pub fn new(part_1: String, part_2: String, frequency: u64, confidence: f64) -> Self {
        Self {
            part_1,
            part_2,
            frequency,
            confidence,
            unit_price: None,
            description_1: None,
            description_2: None,
        }
    }

    /// Sets the unit price.
    pub fn with_unit_price(mut self, unit_price: f64) -> Self {
        self.unit_price = Some(unit_price);
        self
    }

    /// Sets the part descriptions.
    pub fn with_descriptions(mut self, description_1: Option<String>, description_2: Option<String>) -> Self {
        self.description_1 = description_1;
        self.description_2 = description_2;
        self
    }
}

/// A bundle with supersession history folded into its confidence metric.
///
/// Produced once per analysis run from a [`BundleRecord`] plus the predecessor
/// map; immutable, and a pure function of the two inputs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EnhancedBundleRecord {
    pub part_1: String,
    pub part_2: String,
    pub frequency: u64,
    pub confidence: f64,
    pub unit_price: Option<f64>,
    pub description_1: Option<String>,
    pub description_2: Option<String>,
    /// Size of part 1's transitive predecessor set.
    pub predecessors_1: usize,
    /// Size of part 2's transitive predecessor set.
    pub predecessors_2: usize,
    pub total_predecessors: usize,
    /// Confidence boost in percentage points derived from predecessor count.
    pub boost: f64,
    /// Base confidence plus boost, capped below a "certain" 100% match.
    pub enhanced_confidence: f64,
    pub has_history: bool,
    /// Projected annual revenue assuming both parts of the bundle attach.
    pub revenue_estimate: f64,
    /// Whether the enhanced confidence meets the action threshold.
    pub actionable: bool,
}

impl EnhancedBundleRecord {
    /// Percentage-point improvement over the base confidence.
    pub fn confidence_improvement(&self) -> f64 {
        self.enhanced_confidence - self.confidence
    }

    /// Checks the enhanced confidence against an arbitrary threshold.
    pub fn meets_threshold(&self, threshold: f64) -> bool {
        self.enhanced_confidence >= threshold
    }
}
