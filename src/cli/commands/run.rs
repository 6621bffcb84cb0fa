use super::resolve_config;
use crate::benchmarks::DispatchComparison;
use crate::cli::args::BenchOptions;
use crate::core::{BenchmarkReporter, Scenario, ScenarioReport};
use anyhow::{Context, Result};
use tracing::info;

/// 単一シナリオを計測する
pub fn execute_run<R: BenchmarkReporter>(
    scenario: Scenario,
    options: &BenchOptions,
    reporter: R,
) -> Result<ScenarioReport> {
    let config = resolve_config(options)?;
    info!(%scenario, loops = config.loops, "run command started");

    let mut comparison = DispatchComparison::new(config, reporter)?;
    let result = comparison
        .run_scenario(scenario)
        .with_context(|| format!("シナリオ {scenario} の計測に失敗しました"))?;

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::NoOpReporter;

    #[test]
    fn test_execute_run() {
        let options = BenchOptions {
            loops: Some(50),
            seed: Some(1),
            ..BenchOptions::default()
        };

        let result = execute_run(Scenario::Static, &options, NoOpReporter::new()).unwrap();

        assert_eq!(result.scenario, Scenario::Static);
        assert_eq!(result.report.loops, 50);
        assert_eq!(result.report.strategies, 4);
    }

    #[test]
    fn test_execute_run_rejects_invalid_options() {
        let options = BenchOptions {
            loops: Some(usize::MAX),
            ..BenchOptions::default()
        };

        assert!(execute_run(Scenario::Dynamic, &options, NoOpReporter::new()).is_err());
    }
}
