//! Bundlewise Bundle Analysis Service
//!
//! Batch entry point: loads the bundle and supersession tables from the
//! configured paths, runs the supersession-enhanced analysis, and logs the
//! report summary.

use anyhow::Result;
use tracing::{info, warn};

use bundlewise_analysis::AnalysisService;
use bundlewise_utils::config::AppConfig;
use bundlewise_utils::logging::init_logging;

fn main() -> Result<()> {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            let config = AppConfig::default();
            eprintln!("Using default configuration ({})", e);
            config
        }
    };

    init_logging(&config.logging)?;
    info!("Starting Bundlewise Bundle Analysis Service");

    let service = AnalysisService::new().with_cache(config.analysis.cache_results);
    let report = service.run(&config.analysis)?;

    info!(
        run_id = %report.run_id,
        edges = report.edge_count,
        superseding_parts = report.superseding_part_count,
        bundles = report.summary.total_bundles,
        with_history = report.summary.bundles_with_history,
        actionable = report.summary.actionable_bundles,
        "Analysis complete"
    );
    info!(
        average_boost = report.summary.average_boost,
        average_enhanced_confidence = report.summary.average_enhanced_confidence,
        total_revenue_estimate = report.summary.total_revenue_estimate,
        "Summary metrics"
    );

    if report.summary.total_bundles == 0 {
        warn!("No bundles loaded; check the configured table paths");
    }

    Ok(())
}
