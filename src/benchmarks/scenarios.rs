//! 比較シナリオごとのエンジン構成
//!
//! | シナリオ | コレクション | 呼び出し関数 |
//! |---|---|---|
//! | `Dynamic` | `DynamicCollection`（Addition, Subtraction, AccumulateFirstArg） | `Compute` |
//! | `StaticTrait` | `(Addition, Subtraction, AccumulateFirstArg)` | `ViaComputer` |
//! | `Static` | `(Addition, Subtraction, Multiplication, AccumulateFirstArg)` | `Compute` |
//!
//! `Multiplication`は`Computer`を実装しないため`Static`にのみ含まれる。

use crate::collection::DynamicCollection;
use crate::core::{BenchResult, BenchmarkReport, Clock, Scenario};
use crate::engine::{ArgStreams, Engine};
use crate::invoke::{Compute, ViaComputer};
use crate::strategy::{AccumulateFirstArg, Addition, Multiplication, Subtraction};

/// `Computer`実装型だけのタプル
pub type ComputerTuple = (Addition, Subtraction, AccumulateFirstArg);

/// 共通インターフェースを持たない型を含むタプル
pub type MixedTuple = (Addition, Subtraction, Multiplication, AccumulateFirstArg);

pub fn dynamic_engine() -> Engine<DynamicCollection, Compute> {
    Engine::new(
        DynamicCollection::builder()
            .with(Addition)
            .with(Subtraction)
            .with(AccumulateFirstArg::new())
            .build(),
        Compute,
    )
}

pub fn trait_tuple_engine() -> Engine<ComputerTuple, ViaComputer> {
    Engine::new(
        (Addition, Subtraction, AccumulateFirstArg::new()),
        ViaComputer,
    )
}

pub fn static_engine() -> Engine<MixedTuple, Compute> {
    Engine::new(
        (
            Addition,
            Subtraction,
            Multiplication,
            AccumulateFirstArg::new(),
        ),
        Compute,
    )
}

/// 新しいエンジンでシナリオを1回計測する
pub fn run_scenario<S, K>(
    scenario: Scenario,
    loops: usize,
    streams: S,
    clock: &K,
) -> BenchResult<BenchmarkReport>
where
    S: ArgStreams<Args = (u32, u32)>,
    K: Clock,
{
    match scenario {
        Scenario::Dynamic => dynamic_engine().benchmark_with(loops, streams, clock),
        Scenario::StaticTrait => trait_tuple_engine().benchmark_with(loops, streams, clock),
        Scenario::Static => static_engine().benchmark_with(loops, streams, clock),
    }
}
