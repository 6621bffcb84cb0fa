//! パフォーマンス測定とベンチマークモジュール
//!
//! 静的ディスパッチと動的ディスパッチの性能比較を提供

pub mod operands;
pub mod performance_comparison;
pub mod scenarios;

pub use operands::Operands;
pub use performance_comparison::DispatchComparison;
