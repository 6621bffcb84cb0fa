//! 動的ディスパッチと静的ディスパッチを比較するマイクロベンチマーク
//!
//! 同じ2引数に対して複数の戦略を呼び出し、戻り値の列を返す処理を
//! 2通りのコレクション表現で実装して計測する。
//!
//! - [`DynamicCollection`]: 共有ハンドル（`Rc<RefCell<dyn Computer>>`）の `Vec` をループで呼ぶ
//! - タプル: 要素ごとの呼び出しをマクロで展開し、コンパイル時に解決する
//!
//! 呼び出し方は [`Invoke`] を実装する呼び出し関数に分離されている。
//!
//! ```
//! use dispatch_bench::{AccumulateFirstArg, Addition, Compute, Engine, Multiplication, Subtraction};
//!
//! let mut engine = Engine::new(
//!     (Addition, Subtraction, Multiplication, AccumulateFirstArg::new()),
//!     Compute,
//! );
//! assert_eq!(engine.run((3, 4)), [7, 4294967295, 12, 3]);
//! assert_eq!(engine.run((3, 4)), [7, 4294967295, 12, 6]);
//! ```

pub mod benchmarks;
pub mod cli;
pub mod collection;
pub mod core;
pub mod engine;
pub mod invoke;
pub mod services;
pub mod strategy;

// 公開API
pub use crate::collection::{DynamicCollection, DynamicCollectionBuilder, FixedArity, StrategyCollection};
pub use crate::core::{BenchError, BenchResult, BenchmarkReport, Scenario, ScenarioReport};
pub use crate::engine::{ArgStream, ArgStreams, Constant, Engine};
pub use crate::invoke::{from_fn, Compute, FromFn, Invoke, ViaComputer};
pub use crate::strategy::{
    shared, AccumulateFirstArg, Addition, BoxedComputer, Computer, ComputerHandle, DigitConcat,
    Multiplication, MultiplyAdd, SharedComputer, Subtraction,
};
