// エンジン層 - コレクションへの一括呼び出しと計測ループ

pub mod dispatch_engine;
pub mod streams;

// 公開API
pub use dispatch_engine::Engine;
pub use streams::{ArgStream, ArgStreams, Constant};
