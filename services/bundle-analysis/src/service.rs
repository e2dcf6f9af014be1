//! Analysis Service
//!
//! Orchestrates a full analysis run: loads the two dealer tables, builds the
//! predecessor graph, enhances every bundle, and assembles the report. The
//! core transform is pure; the service adds loading, memoization, and
//! summary metrics around it.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use bundlewise_models::{BundleRecord, EnhancedBundleRecord, SupersessionEdge};
use bundlewise_utils::config::AnalysisConfig;
use bundlewise_utils::tables::{
    BundleExtraction, BundleTableLoader, SupersessionExtraction, SupersessionTableLoader,
    TableParser,
};

use crate::enhancer::ConfidenceEnhancer;
use crate::fingerprint::dataset_fingerprint;
use crate::graph::PredecessorGraph;

/// Aggregate metrics over one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisSummary {
    pub total_bundles: usize,
    pub bundles_with_history: usize,
    pub actionable_bundles: usize,
    pub average_boost: f64,
    pub average_enhanced_confidence: f64,
    pub total_revenue_estimate: f64,
}

/// Complete analysis run output
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub edge_count: usize,
    pub superseding_part_count: usize,
    pub summary: AnalysisSummary,
    pub enhanced_bundles: Vec<EnhancedBundleRecord>,
}

/// Bundle analysis service
pub struct AnalysisService {
    parser: TableParser,
    bundle_loader: BundleTableLoader,
    supersession_loader: SupersessionTableLoader,
    enhancer: ConfidenceEnhancer,
    cache_results: bool,
    cache: Mutex<HashMap<String, Vec<EnhancedBundleRecord>>>,
}

impl AnalysisService {
    pub fn new() -> Self {
        Self {
            parser: TableParser::new(),
            bundle_loader: BundleTableLoader::new(),
            supersession_loader: SupersessionTableLoader::new(),
            enhancer: ConfidenceEnhancer::new(),
            cache_results: false,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Enable memoization of enhanced tables keyed by dataset fingerprint
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_results = enabled;
        self
    }

    /// Parse and extract the supersession table from raw bytes
    pub fn load_supersessions(&self, filename: &str, data: &[u8]) -> Result<SupersessionExtraction> {
        let table = self
            .parser
            .parse_bytes(filename, data)
            .with_context(|| format!("Failed to parse supersession table {}", filename))?;

        for warning in &table.parse_warnings {
            debug!(table = %filename, "{}", warning);
        }

        Ok(self.supersession_loader.extract(&table)?)
    }

    /// Parse and extract the bundle table from raw bytes
    pub fn load_bundles(&self, filename: &str, data: &[u8]) -> Result<BundleExtraction> {
        let table = self
            .parser
            .parse_bytes(filename, data)
            .with_context(|| format!("Failed to parse bundle table {}", filename))?;

        for warning in &table.parse_warnings {
            debug!(table = %filename, "{}", warning);
        }

        Ok(self.bundle_loader.extract(&table)?)
    }

    /// Run the core transform: build the predecessor graph, enhance every
    /// bundle, and return the enhanced table sorted by enhanced confidence
    /// descending. Pure apart from the optional memoization cache.
    pub fn analyze(
        &self,
        edges: &[SupersessionEdge],
        bundles: &[BundleRecord],
    ) -> Vec<EnhancedBundleRecord> {
        if self.cache_results {
            let key = dataset_fingerprint(edges, bundles);
            let mut cache = self.cache.lock().expect("analysis cache poisoned");
            if let Some(cached) = cache.get(&key) {
                debug!(fingerprint = %key, "Analysis cache hit");
                return cached.clone();
            }

            let enhanced = self.compute(edges, bundles);
            cache.insert(key, enhanced.clone());
            return enhanced;
        }

        self.compute(edges, bundles)
    }

    fn compute(
        &self,
        edges: &[SupersessionEdge],
        bundles: &[BundleRecord],
    ) -> Vec<EnhancedBundleRecord> {
        let graph = PredecessorGraph::build(edges);
        let predecessors = graph.predecessor_map();
        self.enhancer.enhance_all(bundles, &predecessors)
    }

    /// Full batch run from configured file paths
    pub fn run(&self, config: &AnalysisConfig) -> Result<AnalysisReport> {
        let supersession_data = std::fs::read(&config.supersessions_path)
            .with_context(|| format!("Failed to read {}", config.supersessions_path))?;
        let bundle_data = std::fs::read(&config.bundles_path)
            .with_context(|| format!("Failed to read {}", config.bundles_path))?;

        let mut supersessions =
            self.load_supersessions(&config.supersessions_path, &supersession_data)?;
        let mut bundles = self.load_bundles(&config.bundles_path, &bundle_data)?;

        if let Some(max_rows) = config.max_rows {
            supersessions.edges.truncate(max_rows);
            bundles.bundles.truncate(max_rows);
        }

        info!(
            edges = supersessions.edges.len(),
            duplicates = supersessions.duplicate_count,
            bundles = bundles.bundles.len(),
            skipped_bundle_rows = bundles.skipped_rows,
            "Tables loaded"
        );

        Ok(self.build_report(&supersessions.edges, &bundles.bundles))
    }

    /// Analyze and wrap the result with summary metrics
    pub fn build_report(
        &self,
        edges: &[SupersessionEdge],
        bundles: &[BundleRecord],
    ) -> AnalysisReport {
        let graph = PredecessorGraph::build(edges);
        let enhanced = self.analyze(edges, bundles);
        let summary = Self::summarize(&enhanced);

        AnalysisReport {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            edge_count: edges.len(),
            superseding_part_count: graph.superseding_part_count(),
            summary,
            enhanced_bundles: enhanced,
        }
    }

    fn summarize(enhanced: &[EnhancedBundleRecord]) -> AnalysisSummary {
        let total_bundles = enhanced.len();
        let bundles_with_history = enhanced.iter().filter(|e| e.has_history).count();
        let actionable_bundles = enhanced.iter().filter(|e| e.actionable).count();
        let total_revenue_estimate = enhanced.iter().map(|e| e.revenue_estimate).sum();

        let (average_boost, average_enhanced_confidence) = if total_bundles > 0 {
            let boost_sum: f64 = enhanced.iter().map(|e| e.boost).sum();
            let confidence_sum: f64 = enhanced.iter().map(|e| e.enhanced_confidence).sum();
            (
                boost_sum / total_bundles as f64,
                confidence_sum / total_bundles as f64,
            )
        } else {
            (0.0, 0.0)
        };

        AnalysisSummary {
            total_bundles,
            bundles_with_history,
            actionable_bundles,
            average_boost,
            average_enhanced_confidence,
            total_revenue_estimate,
        }
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
