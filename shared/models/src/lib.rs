//! # Bundlewise Core Domain Models
//!
//! This module contains the core domain models for the Bundlewise
//! supersession-enhanced bundle analysis system. All models implement proper
//! serialization/deserialization with serde and validation with the validator
//! crate.
//!
//! ## Key Models
//!
//! - **SupersessionEdge**: Represents a part-replacement record (current part
//!   supersedes old part) from the dealer's supersession history
//! - **BundleRecord**: Represents a pair of parts purchased together with a
//!   co-occurrence confidence and frequency
//! - **EnhancedBundleRecord**: Represents a bundle whose confidence has been
//!   boosted by transitive supersession evidence
//!
//! ## Validation
//!
//! Models include validation rules for:
//! - Part number length
//! - Confidence range (0-100 percent)
//! - Self-referential supersession records

pub mod bundle;
pub mod supersession;


pub use bundle::*;
pub use supersession::*;
