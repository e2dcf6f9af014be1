//! Confidence Enhancer
//!
//! Folds supersession lineage into each bundle's confidence metric. Parts
//! with long replacement histories carry purchasing evidence across part
//! number changes, so bundles over such parts earn a capped confidence
//! boost and a revenue estimate.

use bundlewise_models::{BundleRecord, EnhancedBundleRecord};

use crate::graph::PredecessorMap;

/// Confidence boost in percentage points per predecessor part.
pub const BOOST_PER_PREDECESSOR: f64 = 5.0;
/// Boost cap, preventing runaway inflation from very long chains.
pub const MAX_BOOST: f64 = 40.0;
/// Enhanced confidence ceiling. 100% is reserved for exact identity matches
/// assigned upstream, so enhanced values stay distinguishable below it.
pub const CONFIDENCE_CEILING: f64 = 99.0;
/// Enhanced confidence at or above this threshold flags a bundle actionable.
pub const ACTIONABLE_THRESHOLD: f64 = 50.0;
/// Assumed dual-attach rate: both parts of the bundle purchased together.
pub const DUAL_ATTACH_MULTIPLIER: f64 = 2.0;
/// Unit price substituted when the source table has none.
pub const DEFAULT_UNIT_PRICE: f64 = 50.0;

/// Bundle confidence enhancer
pub struct ConfidenceEnhancer;

impl ConfidenceEnhancer {
    pub fn new() -> Self {
        Self
    }

    /// Enhance a single bundle against the predecessor map.
    ///
    /// Lookups are by exact identifier match; the loaders normalize part
    /// numbers before records reach this point. A part absent from the map
    /// simply contributes zero predecessors.
    pub fn enhance(&self, bundle: &BundleRecord, predecessors: &PredecessorMap) -> EnhancedBundleRecord {
        let predecessors_1 = predecessors.get(&bundle.part_1).map_or(0, |set| set.len());
        let predecessors_2 = predecessors.get(&bundle.part_2).map_or(0, |set| set.len());
        let total_predecessors = predecessors_1 + predecessors_2;

        let boost = (total_predecessors as f64 * BOOST_PER_PREDECESSOR).min(MAX_BOOST);
        let enhanced_confidence = (bundle.confidence + boost).min(CONFIDENCE_CEILING);

        let revenue_estimate = if bundle.frequency > 0 {
            let unit_price = bundle.unit_price.unwrap_or(DEFAULT_UNIT_PRICE);
            bundle.frequency as f64 * unit_price * DUAL_ATTACH_MULTIPLIER
        } else {
            0.0
        };

        EnhancedBundleRecord {
            part_1: bundle.part_1.clone(),
            part_2: bundle.part_2.clone(),
            frequency: bundle.frequency,
            confidence: bundle.confidence,
            unit_price: bundle.unit_price,
            description_1: bundle.description_1.clone(),
            description_2: bundle.description_2.clone(),
            predecessors_1,
            predecessors_2,
            total_predecessors,
            boost,
            enhanced_confidence,
            has_history: total_predecessors > 0,
            revenue_estimate,
            actionable: enhanced_confidence >= ACTIONABLE_THRESHOLD,
        }
    }

    /// Enhance every bundle and sort by enhanced confidence descending.
    /// The sort is stable: ties retain input relative order.
    pub fn enhance_all(
        &self,
        bundles: &[BundleRecord],
        predecessors: &PredecessorMap,
    ) -> Vec<EnhancedBundleRecord> {
        let mut enhanced: Vec<EnhancedBundleRecord> = bundles
            .iter()
            .map(|bundle| self.enhance(bundle, predecessors))
            .collect();

        enhanced.sort_by(|a, b| b.enhanced_confidence.total_cmp(&a.enhanced_confidence));
        enhanced
    }
}

impl Default for ConfidenceEnhancer {
    fn default() -> Self {
        Self::new()
    }
}
