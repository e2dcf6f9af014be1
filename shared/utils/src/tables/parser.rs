//! Table Parser
//!
//! Parses delimited-text exports into untyped rows with heuristic column
//! resolution. Dealer systems export the same table with wildly inconsistent
//! headers, so columns are identified by normalized substring matching
//! against per-field candidate fragments rather than exact names.

use anyhow::{Context, Result};
use std::collections::HashMap;
use uuid::Uuid;

/// Untyped parsed row keyed by normalized header
#[derive(Debug, Clone)]
pub struct TableRow {
    pub row_number: usize,
    pub raw_data: HashMap<String, String>,
}

/// Complete parsed table with metadata
#[derive(Debug, Clone)]
pub struct ParsedTable {
    pub id: Uuid,
    pub filename: String,
    pub rows: Vec<TableRow>,
    pub column_headers: Vec<String>,
    pub total_rows: usize,
    pub parse_warnings: Vec<String>,
}

impl ParsedTable {
    /// Resolve a column by matching candidate fragments against the table's
    /// headers. Both sides are normalized (lowercased, non-alphanumeric
    /// stripped) and a header matches when it contains a candidate fragment
    /// as a substring. Returns the raw header key for row lookups.
    pub fn resolve_column(&self, candidates: &[&str]) -> Option<String> {
        for candidate in candidates {
            let fragment = normalize_header(candidate);
            for header in &self.column_headers {
                if normalize_header(header).contains(&fragment) {
                    return Some(header.clone());
                }
            }
        }
        None
    }
}

/// Lowercases a header and strips every non-alphanumeric character, so
/// "Part_Number 1" and "PART-NUMBER-1" resolve identically.
fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase()
}

/// Delimited-text table parser
pub struct TableParser;

impl TableParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse table from bytes
    pub fn parse_bytes(&self, filename: &str, data: &[u8]) -> Result<ParsedTable> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .context("Failed to read table headers")?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        let mut warnings = Vec::new();

        for (idx, result) in reader.records().enumerate() {
            match result {
                Ok(record) => {
                    let raw_data: HashMap<String, String> = headers
                        .iter()
                        .enumerate()
                        .filter_map(|(i, h)| record.get(i).map(|v| (h.clone(), v.to_string())))
                        .collect();

                    rows.push(TableRow {
                        row_number: idx + 2,
                        raw_data,
                    });
                }
                Err(e) => {
                    warnings.push(format!("Row {}: Parse error - {}", idx + 2, e));
                }
            }
        }

        Ok(ParsedTable {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            total_rows: rows.len(),
            rows,
            column_headers: headers,
            parse_warnings: warnings,
        })
    }
}

impl Default for TableParser {
    fn default() -> Self {
        Self::new()
    }
}
