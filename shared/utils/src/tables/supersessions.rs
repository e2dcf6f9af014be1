//! Supersession Table Loader
//!
//! Maps parsed replacement-history tables onto normalized supersession
//! edges: deduplicated (current, old) pairs with self-references and
//! missing identifiers filtered out.

use std::collections::HashSet;
use tracing::warn;

use super::parser::{ParsedTable, TableRow};
use crate::error::{BundlewiseError, BundlewiseResult};
use crate::validation::{is_missing_value, normalize_part_number};
use bundlewise_models::SupersessionEdge;

/// Supersession extraction result
#[derive(Debug, Clone)]
pub struct SupersessionExtraction {
    pub edges: Vec<SupersessionEdge>,
    pub duplicate_count: usize,
    pub skipped_rows: usize,
    pub warnings: Vec<String>,
}

/// Supersession table loader with heuristic column identification
pub struct SupersessionTableLoader {
    current_part_columns: Vec<&'static str>,
    old_part_columns: Vec<&'static str>,
}

impl Default for SupersessionTableLoader {
    fn default() -> Self {
        Self {
            current_part_columns: vec![
                "current_part",
                "current",
                "new_part",
                "replacement",
                "superseding",
            ],
            old_part_columns: vec![
                "old_part",
                "old",
                "previous_part",
                "replaced",
                "superseded",
            ],
        }
    }
}

impl SupersessionTableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract deduplicated supersession edges from a parsed table.
    ///
    /// Rows with missing identifiers or self-referential pairs are skipped
    /// with a warning; duplicates are dropped while preserving first-seen
    /// order of the remaining edges.
    pub fn extract(&self, table: &ParsedTable) -> BundlewiseResult<SupersessionExtraction> {
        let current_col = table.resolve_column(&self.current_part_columns).ok_or_else(|| {
            BundlewiseError::table_load(format!(
                "{}: could not identify current part column",
                table.filename
            ))
        })?;
        let old_col = table.resolve_column(&self.old_part_columns).ok_or_else(|| {
            BundlewiseError::table_load(format!(
                "{}: could not identify old part column",
                table.filename
            ))
        })?;

        let mut edges = Vec::new();
        let mut seen: HashSet<(String, String)> = HashSet::new();
        let mut warnings = Vec::new();
        let mut skipped_rows = 0;
        let mut duplicate_count = 0;

        for row in &table.rows {
            let current = self.part_value(row, &current_col);
            let old = self.part_value(row, &old_col);

            let (current, old) = match (current, old) {
                (Some(c), Some(o)) => (c, o),
                _ => {
                    skipped_rows += 1;
                    warnings.push(format!(
                        "Row {}: Missing part identifier, skipped",
                        row.row_number
                    ));
                    continue;
                }
            };

            if current == old {
                skipped_rows += 1;
                warnings.push(format!(
                    "Row {}: Part {} supersedes itself, skipped",
                    row.row_number, current
                ));
                continue;
            }

            if !seen.insert((current.clone(), old.clone())) {
                duplicate_count += 1;
                continue;
            }

            edges.push(SupersessionEdge {
                current_part: current,
                old_part: old,
            });
        }

        if skipped_rows > 0 {
            warn!(
                table = %table.filename,
                skipped = skipped_rows,
                "Supersession table loaded with skipped rows"
            );
        }

        Ok(SupersessionExtraction {
            edges,
            duplicate_count,
            skipped_rows,
            warnings,
        })
    }

    /// Normalized part identifier from a row, None when missing
    fn part_value(&self, row: &TableRow, column: &str) -> Option<String> {
        let raw = row.raw_data.get(column)?;
        if is_missing_value(raw) {
            return None;
        }
        Some(normalize_part_number(raw))
    }
}
