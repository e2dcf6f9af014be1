//! Table Loading Module
//!
//! Heuristic loaders for the two dealer spreadsheet exports the analysis
//! consumes: the bundle co-occurrence table and the supersession
//! (replacement-history) table. Headers are inconsistent across dealer
//! systems, so columns are resolved by fuzzy fragment matching.

pub mod bundles;
pub mod parser;
pub mod supersessions;

pub use bundles::{BundleExtraction, BundleTableLoader};
pub use parser::{ParsedTable, TableParser, TableRow};
pub use supersessions::{SupersessionExtraction, SupersessionTableLoader};
