// 時刻計測機能
// 実時間とプロセスCPU時間の取得

pub mod implementations;

// 公開API
pub use implementations::SystemClock;
