// 計測結果の永続化機能
// 比較結果のJSON書き出しと読み戻し

pub mod implementations;

// 公開API
pub use implementations::{BenchmarkRecord, JsonReportWriter};
