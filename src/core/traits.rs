// エンジンが外部に求める能力のトレイト定義

use super::error::BenchResult;
use super::types::{BenchmarkReport, Scenario};
use mockall::automock;
use std::time::Duration;

/// 時刻計測の抽象化トレイト
///
/// `benchmark`は計測ループの前後で1回ずつ問い合わせる
#[automock(type Instant = u64;)]
pub trait Clock {
    /// 実時間の時刻表現
    type Instant: Copy;

    /// プロセスの累積CPU時間
    fn now_cpu(&self) -> BenchResult<Duration>;

    /// 現在の実時間
    fn now_wall(&self) -> Self::Instant;

    /// `since`からの経過実時間
    fn elapsed(&self, since: Self::Instant) -> Duration;
}

/// ベンチマーク結果の報告トレイト
#[automock]
pub trait BenchmarkReporter {
    /// シナリオ開始時の報告
    fn report_started(&self, scenario: Scenario, loops: usize);

    /// シナリオ完了時の報告
    fn report_finished(&self, scenario: Scenario, report: &BenchmarkReport);
}

// BenchmarkReporter for Box<dyn BenchmarkReporter>
impl BenchmarkReporter for Box<dyn BenchmarkReporter> {
    fn report_started(&self, scenario: Scenario, loops: usize) {
        self.as_ref().report_started(scenario, loops)
    }

    fn report_finished(&self, scenario: Scenario, report: &BenchmarkReport) {
        self.as_ref().report_finished(scenario, report)
    }
}
