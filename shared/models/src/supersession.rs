//! Supersession domain models for the Bundlewise analysis system.
//!
//! This module defines the part-replacement relationship used to build the
//! predecessor graph: one record per (current part, old part) pair from the
//! dealer's supersession history.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// A recorded replacement relationship: `current_part` officially supersedes
/// `old_part`. Multiple records may share a `current_part` (fan-in), and an
/// `old_part` may itself appear as a `current_part` in another record,
/// forming replacement chains over time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq, Hash)]
#[validate(schema(function = "validate_edge_parts"))]
pub struct SupersessionEdge {
    #[validate(length(min = 1, max = 100, message = "Current part number must be between 1 and 100 characters"))]
    pub current_part: String,
    #[validate(length(min = 1, max = 100, message = "Old part number must be between 1 and 100 characters"))]
    pub old_part: String,
}

fn validate_edge_parts(edge: &SupersessionEdge) -> Result<(), ValidationError> {
    if edge.current_part == edge.old_part {
        return Err(ValidationError::new("self_referential_supersession"));
    }
    Ok(())
}

impl SupersessionEdge {
    /// Creates a supersession edge, rejecting empty identifiers and
    /// self-referential pairs. Loaders filter such rows instead of failing.
    pub fn new(current_part: String, old_part: String) -> Result<Self, String> {
        if current_part.is_empty() || old_part.is_empty() {
            return Err("Supersession part numbers must be non-empty".to_string());
        }
        if current_part == old_part {
            return Err(format!("Part {} cannot supersede itself", current_part));
        }
        Ok(Self { current_part, old_part })
    }

    /// Checks whether this edge is self-referential. Valid edges never are;
    /// the graph builder treats any that slip through as no-ops.
    pub fn is_self_referential(&self) -> bool {
        self.current_part == self.old_part
    }
}
