//! Bundlewise Property-Based Tests
//!
//! Property tests over the predecessor graph and confidence enhancer,
//! validating the invariants the analysis guarantees for arbitrary inputs.

use proptest::prelude::*;
use std::collections::HashSet;

use bundlewise_analysis::{ConfidenceEnhancer, PredecessorGraph, PredecessorMap};
use bundlewise_models::{BundleRecord, SupersessionEdge};

prop_compose! {
    fn arb_part()(id in "[A-E]") -> String {
        id
    }
}

prop_compose! {
    fn arb_edge()(current in arb_part(), old in arb_part()) -> SupersessionEdge {
        SupersessionEdge { current_part: current, old_part: old }
    }
}

prop_compose! {
    fn arb_edges()(edges in prop::collection::vec(arb_edge(), 0..20)) -> Vec<SupersessionEdge> {
        edges
    }
}

// ===== Predecessor graph properties =====

mod graph_properties {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Every non-self edge puts its old part in the current part's
        /// predecessor set, and traversal terminates on any input,
        /// cycles included (the tiny part alphabet makes cycles common).
        #[test]
        fn prop_direct_edges_in_predecessor_set(edges in arb_edges()) {
            let graph = PredecessorGraph::build(&edges);

            for edge in &edges {
                if edge.is_self_referential() {
                    continue;
                }
                let predecessors = graph.predecessors_of(&edge.current_part);
                prop_assert!(predecessors.contains(&edge.old_part));
            }
        }

        /// A part never appearing as current has no predecessors, and no
        /// predecessor set ever contains the queried part itself.
        #[test]
        fn prop_absent_parts_empty_and_no_self(edges in arb_edges()) {
            let graph = PredecessorGraph::build(&edges);
            let currents: HashSet<&String> = edges
                .iter()
                .filter(|e| !e.is_self_referential())
                .map(|e| &e.current_part)
                .collect();

            for part in ["A", "B", "C", "D", "E", "unused"] {
                let predecessors = graph.predecessors_of(part);
                prop_assert!(!predecessors.contains(part));
                if !currents.contains(&part.to_string()) {
                    prop_assert!(predecessors.is_empty());
                }
            }
        }

        /// Predecessor resolution is transitive: anything reachable from a
        /// part's predecessor is also that part's predecessor.
        #[test]
        fn prop_transitive_closure(edges in arb_edges()) {
            let graph = PredecessorGraph::build(&edges);
            let map = graph.predecessor_map();

            for (part, predecessors) in &map {
                for predecessor in predecessors {
                    for transitive in graph.predecessors_of(predecessor) {
                        if transitive != *part {
                            prop_assert!(
                                predecessors.contains(&transitive),
                                "{} reachable via {} but missing from {}'s set",
                                transitive, predecessor, part
                            );
                        }
                    }
                }
            }
        }
    }
}

// ===== Enhancer properties =====

mod enhancer_properties {
    use super::*;

    fn map_with_count(part: &str, count: usize) -> PredecessorMap {
        let set: HashSet<String> = (0..count).map(|i| format!("old-{}", i)).collect();
        std::iter::once((part.to_string(), set)).collect()
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        /// Boost is monotone in predecessor count and capped at 40.
        #[test]
        fn prop_boost_monotone_and_capped(count in 0usize..50) {
            let enhancer = ConfidenceEnhancer::new();
            let bundle = BundleRecord::new("P".to_string(), "Q".to_string(), 1, 10.0);

            let enhanced = enhancer.enhance(&bundle, &map_with_count("P", count));
            let expected = ((count as f64) * 5.0).min(40.0);
            prop_assert_eq!(enhanced.boost, expected);

            if count > 0 {
                let smaller = enhancer.enhance(&bundle, &map_with_count("P", count - 1));
                prop_assert!(smaller.boost <= enhanced.boost);
            }
        }

        /// Enhanced confidence never exceeds the 99-point ceiling and never
        /// drops below the base confidence.
        #[test]
        fn prop_enhanced_confidence_bounds(
            confidence in 0.0..100.0f64,
            count in 0usize..50
        ) {
            let enhancer = ConfidenceEnhancer::new();
            let bundle = BundleRecord::new("P".to_string(), "Q".to_string(), 1, confidence);

            let enhanced = enhancer.enhance(&bundle, &map_with_count("P", count));
            prop_assert!(enhanced.enhanced_confidence <= 99.0);
            prop_assert!(enhanced.enhanced_confidence >= confidence.min(99.0));
            prop_assert_eq!(enhanced.actionable, enhanced.enhanced_confidence >= 50.0);
        }

        /// Revenue is zero exactly when frequency is zero, and otherwise
        /// equals frequency times price times the dual-attach multiplier.
        #[test]
        fn prop_revenue_formula(
            frequency in 0u64..1000,
            unit_price in proptest::option::of(0.01..500.0f64)
        ) {
            let enhancer = ConfidenceEnhancer::new();
            let bundle = BundleRecord {
                part_1: "P".to_string(),
                part_2: "Q".to_string(),
                frequency,
                confidence: 50.0,
                unit_price,
                description_1: None,
                description_2: None,
            };

            let enhanced = enhancer.enhance(&bundle, &PredecessorMap::new());
            if frequency == 0 {
                prop_assert_eq!(enhanced.revenue_estimate, 0.0);
            } else {
                let price = unit_price.unwrap_or(50.0);
                let expected = frequency as f64 * price * 2.0;
                prop_assert!((enhanced.revenue_estimate - expected).abs() < 1e-9);
            }
        }

        /// Enhancement is idempotent: identical inputs yield identical
        /// records, bit for bit.
        #[test]
        fn prop_enhance_idempotent(
            confidence in 0.0..100.0f64,
            frequency in 0u64..1000,
            count in 0usize..20
        ) {
            let enhancer = ConfidenceEnhancer::new();
            let bundle = BundleRecord::new("P".to_string(), "Q".to_string(), frequency, confidence);
            let map = map_with_count("P", count);

            let first = enhancer.enhance(&bundle, &map);
            let second = enhancer.enhance(&bundle, &map);
            prop_assert_eq!(first, second);
        }

        /// The output ordering is non-increasing in enhanced confidence, and
        /// ties keep their input order.
        #[test]
        fn prop_sort_stable_descending(
            confidences in prop::collection::vec(0.0..100.0f64, 0..30)
        ) {
            let enhancer = ConfidenceEnhancer::new();
            let bundles: Vec<BundleRecord> = confidences
                .iter()
                .enumerate()
                .map(|(i, c)| BundleRecord::new(format!("P{}", i), "Q".to_string(), 1, *c))
                .collect();

            let enhanced = enhancer.enhance_all(&bundles, &PredecessorMap::new());

            for pair in enhanced.windows(2) {
                prop_assert!(pair[0].enhanced_confidence >= pair[1].enhanced_confidence);
                if pair[0].enhanced_confidence == pair[1].enhanced_confidence {
                    // Equal keys: earlier input index must come first.
                    let first_index: usize = pair[0].part_1[1..].parse().unwrap();
                    let second_index: usize = pair[1].part_1[1..].parse().unwrap();
                    prop_assert!(first_index < second_index);
                }
            }
        }
    }
}
