use super::resolve_config;
use crate::benchmarks::DispatchComparison;
use crate::cli::args::BenchOptions;
use crate::core::{BenchmarkReporter, ScenarioReport};
use anyhow::Result;
use std::path::Path;
use tracing::info;

/// 設定された全シナリオを同じ引数で計測し、サマリーを表示する
pub fn execute_compare<R: BenchmarkReporter>(
    options: &BenchOptions,
    report: Option<&Path>,
    reporter: R,
) -> Result<Vec<ScenarioReport>> {
    let config = resolve_config(options)?;
    info!(
        loops = config.loops,
        scenarios = config.scenarios.len(),
        "compare command started"
    );

    let mut comparison = DispatchComparison::new(config, reporter)?;
    comparison.run_all()?;
    comparison.print_summary();

    if let Some(path) = report {
        comparison.export_json_report(path)?;
    }

    Ok(comparison.results().to_vec())
}
