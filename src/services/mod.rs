// サービス層 - エンジンの外側にある協調コンポーネント
// 時刻計測、結果報告、設定、永続化をそれぞれ独立して提供する

pub mod config;
pub mod monitoring;
pub mod persistence;
pub mod timing;

// 公開API
pub use config::{BenchConfig, ConfigPreset, OperandMode};
pub use monitoring::{ConsoleReporter, NoOpReporter};
pub use persistence::{BenchmarkRecord, JsonReportWriter};
pub use timing::SystemClock;
