//! ディスパッチエンジン
//!
//! ストラテジーコレクションと呼び出し関数を束ね、`run`と`benchmark`を提供する。
//! ループで回すか展開して呼ぶかはコレクションの型で決まる。

use super::streams::ArgStreams;
use crate::collection::StrategyCollection;
use crate::core::{BenchResult, BenchmarkReport, Clock};
use crate::services::SystemClock;
use std::hint::black_box;
use std::time::Duration;
use tracing::{debug, warn};

/// コレクション`C`と呼び出し関数`F`を所有するエンジン
///
/// コレクションは構築時にムーブされ、以後サイズは変わらない。
/// `F`には値でも参照（`&F`）でも渡せる。
#[derive(Debug, Clone)]
pub struct Engine<C, F> {
    strategies: C,
    invoker: F,
}

impl<C, F> Engine<C, F> {
    pub fn new(strategies: C, invoker: F) -> Self {
        Self {
            strategies,
            invoker,
        }
    }

    pub fn strategies(&self) -> &C {
        &self.strategies
    }

    /// 状態を持つストラテジーのリセット用
    pub fn strategies_mut(&mut self) -> &mut C {
        &mut self.strategies
    }

    pub fn invoker(&self) -> &F {
        &self.invoker
    }

    pub fn into_parts(self) -> (C, F) {
        (self.strategies, self.invoker)
    }

    /// 全ストラテジーに`args`を適用し、挿入順の結果列を返す
    #[inline]
    pub fn run<A>(&mut self, args: A) -> C::Output
    where
        C: StrategyCollection<F, A>,
    {
        self.strategies.apply(&self.invoker, args)
    }

    /// システムクロックで`run`を`loops`回計測する
    pub fn benchmark<S>(&mut self, loops: usize, streams: S) -> BenchResult<BenchmarkReport>
    where
        S: ArgStreams,
        C: StrategyCollection<F, S::Args>,
    {
        self.benchmark_with(loops, streams, &SystemClock::new())
    }

    /// 注入されたクロックで`run`を`loops`回計測する
    ///
    /// i 回目は各ストリームの i 番目を引数にする。全結果をラップアラウンド加算で
    /// チェックサムに畳み込み、ループ全体のCPU時間と実時間を返す。
    /// ストリーム長はループ開始前に検証し、足りなければ1回も呼び出さずに失敗する。
    pub fn benchmark_with<S, K>(
        &mut self,
        loops: usize,
        streams: S,
        clock: &K,
    ) -> BenchResult<BenchmarkReport>
    where
        S: ArgStreams,
        C: StrategyCollection<F, S::Args>,
        K: Clock,
    {
        if let Err(error) = streams.validate(loops) {
            warn!(loops, %error, "benchmark rejected");
            return Err(error);
        }

        let strategies = self.strategies.len();
        debug!(loops, strategies, "benchmark started");

        let mut checksum: u32 = 0;
        let cpu_start = read_cpu(clock)?;
        let wall_start = clock.now_wall();

        for i in 0..loops {
            let results = self.run(black_box(streams.at(i)));
            checksum = results
                .as_ref()
                .iter()
                .fold(checksum, |acc, &value| acc.wrapping_add(value));
        }

        let cpu = read_cpu(clock)?.saturating_sub(cpu_start);
        let wall = clock.elapsed(wall_start);

        let report = BenchmarkReport {
            loops,
            strategies,
            checksum: black_box(checksum),
            cpu_ms: cpu.as_secs_f64() * 1000.0,
            wall_ms: wall.as_secs_f64() * 1000.0,
        };
        debug!(
            checksum = report.checksum,
            cpu_ms = report.cpu_ms,
            wall_ms = report.wall_ms,
            "benchmark finished"
        );

        Ok(report)
    }
}

fn read_cpu<K: Clock>(clock: &K) -> BenchResult<Duration> {
    clock.now_cpu().map_err(|error| {
        warn!(%error, "cpu clock read failed");
        error
    })
}
