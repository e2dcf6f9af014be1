//! Bundlewise Bundle Analysis Service
//!
//! Supersession-enhanced bundle analysis: builds a predecessor graph from
//! part replacement history and folds each part's transitive lineage into
//! the bundle co-occurrence confidence.

pub mod enhancer;
pub mod fingerprint;
pub mod graph;
pub mod service;

pub use enhancer::ConfidenceEnhancer;
pub use graph::{PredecessorGraph, PredecessorMap};
pub use service::{AnalysisReport, AnalysisService, AnalysisSummary};
