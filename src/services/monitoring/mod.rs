// 結果報告機能
// シナリオ開始の通知、計測結果の表示

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
