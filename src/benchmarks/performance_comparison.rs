//! 動的ディスパッチと静的ディスパッチの性能比較
//!
//! 全シナリオに同じ引数を与えて計測し、結果の表示とJSON出力を行う

use super::operands::Operands;
use super::scenarios;
use crate::core::{BenchResult, BenchmarkReporter, Clock, Scenario, ScenarioReport};
use crate::engine::Constant;
use crate::services::{BenchConfig, BenchmarkRecord, JsonReportWriter, SystemClock};
use tracing::info;

/// ディスパッチ比較スイート
pub struct DispatchComparison<R: BenchmarkReporter, K: Clock = SystemClock> {
    config: BenchConfig,
    operands: Operands,
    reporter: R,
    clock: K,
    results: Vec<ScenarioReport>,
}

impl<R: BenchmarkReporter> DispatchComparison<R> {
    /// 設定を検証し、引数を生成してスイートを作成
    pub fn new(config: BenchConfig, reporter: R) -> BenchResult<Self> {
        Self::with_clock(config, reporter, SystemClock::new())
    }
}

impl<R: BenchmarkReporter, K: Clock> DispatchComparison<R, K> {
    pub fn with_clock(config: BenchConfig, reporter: R, clock: K) -> BenchResult<Self> {
        config.validate()?;
        let operands = Operands::generate(&config);
        info!(loops = config.loops, operands = ?config.operands, "operands generated");

        Ok(Self {
            config,
            operands,
            reporter,
            clock,
            results: Vec::new(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn operands(&self) -> &Operands {
        &self.operands
    }

    pub fn results(&self) -> &[ScenarioReport] {
        &self.results
    }

    /// 1シナリオを計測して結果を記録する
    pub fn run_scenario(&mut self, scenario: Scenario) -> BenchResult<ScenarioReport> {
        let loops = self.config.loops;
        self.reporter.report_started(scenario, loops);

        let report = match &self.operands {
            Operands::Streams { a, b } => {
                scenarios::run_scenario(scenario, loops, (a.as_slice(), b.as_slice()), &self.clock)
            }
            Operands::Scalars { a, b } => {
                scenarios::run_scenario(scenario, loops, (Constant(*a), Constant(*b)), &self.clock)
            }
        }?;

        self.reporter.report_finished(scenario, &report);

        let result = ScenarioReport { scenario, report };
        self.results.push(result);
        Ok(result)
    }

    /// 設定された全シナリオを順に計測する
    pub fn run_all(&mut self) -> BenchResult<&[ScenarioReport]> {
        let scenarios = self.config.scenarios.clone();
        for scenario in scenarios {
            self.run_scenario(scenario)?;
        }
        Ok(&self.results)
    }

    /// 1呼び出しあたりの実時間が最も短いシナリオ
    pub fn fastest(&self) -> Option<&ScenarioReport> {
        self.results
            .iter()
            .filter_map(|r| r.report.wall_ns_per_invocation().map(|ns| (r, ns)))
            .min_by(|(_, x), (_, y)| x.total_cmp(y))
            .map(|(r, _)| r)
    }

    /// 結果サマリーの表示
    pub fn print_summary(&self) {
        println!("📊 ディスパッチ比較サマリー");
        println!("{}", "=".repeat(60));

        for result in &self.results {
            let report = &result.report;
            println!("🎯 {} ({})", result.scenario.label(), result.scenario);
            println!("   ⏱️  CPU: {:.2} ms / Wall: {:.2} ms", report.cpu_ms, report.wall_ms);
            if let Some(ns) = report.wall_ns_per_invocation() {
                println!("   🔁 {ns:.3} ns/call ({} calls)", report.invocations());
            }
            println!("   🔢 checksum: {}", report.checksum);
            println!();
        }

        if let Some(best) = self.fastest() {
            println!("🏆 Fastest per call: {}", best.scenario.label());
        }
    }

    /// 結果の記録を作成
    pub fn record(&self) -> BenchmarkRecord {
        BenchmarkRecord::new(self.config.clone(), self.results.clone())
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &std::path::Path) -> anyhow::Result<()> {
        JsonReportWriter::new(path).write(&self.record())?;
        println!("📄 詳細レポートを出力しました: {}", path.display());
        Ok(())
    }
}
