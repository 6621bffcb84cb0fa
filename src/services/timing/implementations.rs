// 時刻計測の具象実装

use crate::core::{BenchError, BenchResult, Clock};
use cpu_time::ProcessTime;
use std::time::{Duration, Instant};

/// 実時間は`Instant`、CPU時間はプロセスのCPUクロックで測る
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    type Instant = Instant;

    fn now_cpu(&self) -> BenchResult<Duration> {
        ProcessTime::try_now()
            .map(|time| time.as_duration())
            .map_err(BenchError::clock)
    }

    fn now_wall(&self) -> Instant {
        Instant::now()
    }

    fn elapsed(&self, since: Instant) -> Duration {
        since.elapsed()
    }
}
