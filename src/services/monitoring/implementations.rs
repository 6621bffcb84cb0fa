// 結果報告の具象実装

use crate::core::{BenchmarkReport, BenchmarkReporter, Scenario};
use std::io::Write;

/// コンソール出力による結果報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    /// 1シナリオ分の結果を整形する
    pub fn format_report(scenario: Scenario, report: &BenchmarkReport) -> String {
        format!(
            "{}: CPU time used: {:.2} ms\nWall clock time passed: {:.2} ms\n{}\n",
            scenario.label(),
            report.cpu_ms,
            report.wall_ms,
            report.checksum
        )
    }
}

impl BenchmarkReporter for ConsoleReporter {
    fn report_started(&self, scenario: Scenario, loops: usize) {
        if !self.quiet {
            println!("🔬 {} ({loops} loops)", scenario.description());
            let _ = std::io::stdout().flush();
        }
    }

    fn report_finished(&self, scenario: Scenario, report: &BenchmarkReport) {
        if !self.quiet {
            println!("{}", Self::format_report(scenario, report));
        }
    }
}

/// 何もしない結果報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchmarkReporter for NoOpReporter {
    fn report_started(&self, _scenario: Scenario, _loops: usize) {
        // 何もしない
    }

    fn report_finished(&self, _scenario: Scenario, _report: &BenchmarkReport) {
        // 何もしない
    }
}
