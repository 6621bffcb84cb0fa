// 設定管理機能
// ループ回数、引数生成、実行シナリオの設定

pub mod implementations;

// 公開API
pub use implementations::{BenchConfig, ConfigPreset, OperandMode, MAX_RANDOM_LOOPS};
