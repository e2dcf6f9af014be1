//! Dataset Fingerprint
//!
//! Content hash over the normalized analysis inputs. The enhanced table is a
//! pure function of the edge set and bundle set, so the fingerprint is a
//! sound memoization key for repeated runs over unchanged data.

use sha2::{Digest, Sha256};

use bundlewise_models::{BundleRecord, SupersessionEdge};

/// SHA-256 fingerprint of an (edges, bundles) input pair, hex encoded.
/// Input order matters: both sequences are ordered by contract.
pub fn dataset_fingerprint(edges: &[SupersessionEdge], bundles: &[BundleRecord]) -> String {
    let mut hasher = Sha256::new();

    for edge in edges {
        hasher.update(serde_json::to_string(edge).unwrap_or_default());
    }
    hasher.update([0u8]);
    for bundle in bundles {
        hasher.update(serde_json::to_string(bundle).unwrap_or_default());
    }

    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(current: &str, old: &str) -> SupersessionEdge {
        SupersessionEdge {
            current_part: current.to_string(),
            old_part: old.to_string(),
        }
    }

    fn bundle(part_1: &str, part_2: &str) -> BundleRecord {
        BundleRecord::new(part_1.to_string(), part_2.to_string(), 1, 50.0)
    }

    #[test]
    fn test_fingerprint_deterministic() {
        let edges = vec![edge("A", "B")];
        let bundles = vec![bundle("A", "C")];

        assert_eq!(
            dataset_fingerprint(&edges, &bundles),
            dataset_fingerprint(&edges, &bundles)
        );
    }

    #[test]
    fn test_fingerprint_changes_with_input() {
        let edges = vec![edge("A", "B")];
        let bundles = vec![bundle("A", "C")];

        let base = dataset_fingerprint(&edges, &bundles);
        assert_ne!(base, dataset_fingerprint(&[], &bundles));
        assert_ne!(base, dataset_fingerprint(&edges, &[]));
        assert_ne!(
            base,
            dataset_fingerprint(&edges, &[bundle("A", "D")])
        );
    }

    #[test]
    fn test_fingerprint_separates_edge_and_bundle_sections() {
        // An edge moved across the section boundary must not collide.
        let as_edge = dataset_fingerprint(&[edge("A", "B")], &[]);
        let as_bundle = dataset_fingerprint(&[], &[bundle("A", "B")]);
        assert_ne!(as_edge, as_bundle);
    }
}
