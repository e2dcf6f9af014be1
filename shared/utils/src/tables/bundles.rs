//! Bundle Table Loader
//!
//! Maps parsed co-occurrence tables onto typed bundle records, applying the
//! identifier normalization and default substitution the analysis core
//! expects from its inputs.

use tracing::warn;

use super::parser::{ParsedTable, TableRow};
use crate::error::{BundlewiseError, BundlewiseResult};
use crate::validation::{is_missing_value, normalize_part_number};
use bundlewise_models::BundleRecord;

/// Bundle extraction result
#[derive(Debug, Clone)]
pub struct BundleExtraction {
    pub bundles: Vec<BundleRecord>,
    pub skipped_rows: usize,
    pub warnings: Vec<String>,
}

/// Bundle table loader with heuristic column identification
pub struct BundleTableLoader {
    part_1_columns: Vec<&'static str>,
    part_2_columns: Vec<&'static str>,
    frequency_columns: Vec<&'static str>,
    confidence_columns: Vec<&'static str>,
    unit_price_columns: Vec<&'static str>,
    description_1_columns: Vec<&'static str>,
    description_2_columns: Vec<&'static str>,
}

impl Default for BundleTableLoader {
    fn default() -> Self {
        Self {
            part_1_columns: vec!["part_1", "partnumber1", "part_a", "item_1", "sku_1"],
            part_2_columns: vec!["part_2", "partnumber2", "part_b", "item_2", "sku_2"],
            frequency_columns: vec!["frequency", "customer_count", "times_bought", "count"],
            confidence_columns: vec!["confidence", "conf_score", "score"],
            unit_price_columns: vec!["unit_price", "avg_price", "price", "unit_cost"],
            description_1_columns: vec!["description_1", "desc_1"],
            description_2_columns: vec!["description_2", "desc_2"],
        }
    }
}

impl BundleTableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract typed bundle records from a parsed table.
    ///
    /// Rows with a missing part identifier are skipped with a warning.
    /// Non-numeric frequency and confidence values default to 0; a missing
    /// or non-numeric unit price is carried as None so the enhancer applies
    /// its documented default. Rows are never rejected for bad numerics.
    pub fn extract(&self, table: &ParsedTable) -> BundlewiseResult<BundleExtraction> {
        let part_1_col = table.resolve_column(&self.part_1_columns).ok_or_else(|| {
            BundlewiseError::table_load(format!(
                "{}: could not identify first part column",
                table.filename
            ))
        })?;
        let part_2_col = table.resolve_column(&self.part_2_columns).ok_or_else(|| {
            BundlewiseError::table_load(format!(
                "{}: could not identify second part column",
                table.filename
            ))
        })?;

        let frequency_col = table.resolve_column(&self.frequency_columns);
        let confidence_col = table.resolve_column(&self.confidence_columns);
        let unit_price_col = table.resolve_column(&self.unit_price_columns);
        let description_1_col = table.resolve_column(&self.description_1_columns);
        let description_2_col = table.resolve_column(&self.description_2_columns);

        let mut bundles = Vec::new();
        let mut warnings = Vec::new();
        let mut skipped_rows = 0;

        for row in &table.rows {
            let part_1 = self.part_value(row, &part_1_col);
            let part_2 = self.part_value(row, &part_2_col);

            let (part_1, part_2) = match (part_1, part_2) {
                (Some(p1), Some(p2)) => (p1, p2),
                _ => {
                    skipped_rows += 1;
                    warnings.push(format!(
                        "Row {}: Missing part identifier, skipped",
                        row.row_number
                    ));
                    continue;
                }
            };

            let frequency = self.numeric_value(row, frequency_col.as_deref()).map(|v| v as u64).unwrap_or(0);
            let confidence = self.numeric_value(row, confidence_col.as_deref()).unwrap_or(0.0);
            let unit_price = self.numeric_value(row, unit_price_col.as_deref());

            let bundle = BundleRecord {
                part_1,
                part_2,
                frequency,
                confidence,
                unit_price,
                description_1: self.text_value(row, description_1_col.as_deref()),
                description_2: self.text_value(row, description_2_col.as_deref()),
            };

            bundles.push(bundle);
        }

        if !warnings.is_empty() {
            warn!(
                table = %table.filename,
                skipped = skipped_rows,
                "Bundle table loaded with warnings"
            );
        }

        Ok(BundleExtraction {
            bundles,
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

    /// Parsed numeric cell, None when the column is absent or non-numeric
    fn numeric_value(&self, row: &TableRow, column: Option<&str>) -> Option<f64> {
        let raw = row.raw_data.get(column?)?;
        let trimmed = raw.trim();
        if is_missing_value(trimmed) {
            return None;
        }
        trimmed.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
    }

    /// Trimmed text cell, None when absent or missing-valued
    fn text_value(&self, row: &TableRow, column: Option<&str>) -> Option<String> {
        let raw = row.raw_data.get(column?)?;
        if is_missing_value(raw) {
            return None;
        }
        Some(raw.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::parser::TableParser;

    fn parse(data: &[u8]) -> ParsedTable {
        TableParser::new().parse_bytes("bundles.csv", data).unwrap()
    }

    #[test]
    fn test_bundle_extraction() {
        let table = parse(
            b"Part_1,Part_2,Customer_Count,Confidence_%,Avg_Unit_Price,Description_1\n\
              87682999.0,47135977,12,45.5,129.99,Oil Filter\n\
              84217717,87045012,3,20,,",
        );

        let loader = BundleTableLoader::new();
        let extraction = loader.extract(&table).unwrap();

        assert_eq!(extraction.bundles.len(), 2);
        assert_eq!(extraction.skipped_rows, 0);

        let first = &extraction.bundles[0];
        assert_eq!(first.part_1, "87682999"); // float artifact stripped
        assert_eq!(first.frequency, 12);
        assert_eq!(first.confidence, 45.5);
        assert_eq!(first.unit_price, Some(129.99));
        assert_eq!(first.description_1, Some("Oil Filter".to_string()));

        let second = &extraction.bundles[1];
        assert_eq!(second.unit_price, None);
        assert_eq!(second.description_1, None);
    }

    #[test]
    fn test_non_numeric_metrics_default() {
        let table = parse(
            b"Part_1,Part_2,Frequency,Confidence,Price\n\
              A100,B200,often,high,call for quote",
        );

        let loader = BundleTableLoader::new();
        let extraction = loader.extract(&table).unwrap();

        let bundle = &extraction.bundles[0];
        assert_eq!(bundle.frequency, 0);
        assert_eq!(bundle.confidence, 0.0);
        assert_eq!(bundle.unit_price, None);
    }

    #[test]
    fn test_missing_part_rows_skipped() {
        let table = parse(b"Part_1,Part_2\nA100,\nnan,B200\nA100,B200");

        let loader = BundleTableLoader::new();
        let extraction = loader.extract(&table).unwrap();

        assert_eq!(extraction.bundles.len(), 1);
        assert_eq!(extraction.skipped_rows, 2);
        assert_eq!(extraction.warnings.len(), 2);
    }

    #[test]
    fn test_unidentifiable_part_columns_rejected() {
        let table = parse(b"foo,bar\n1,2");

        let loader = BundleTableLoader::new();
        assert!(loader.extract(&table).is_err());
    }
}
