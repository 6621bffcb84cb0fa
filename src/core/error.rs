// ベンチマークエンジン用のカスタムエラー型定義

use thiserror::Error;

/// ディスパッチベンチマーク固有のエラー型
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("引数ストリームエラー: ストリーム{stream}の長さ{len}がループ回数{loops}に足りません")]
    StreamTooShort {
        stream: usize,
        len: usize,
        loops: usize,
    },

    #[error("設定エラー: {message}")]
    ConfigurationError { message: String },

    #[error("バリデーションエラー: {field} - {reason}")]
    ValidationError { field: String, reason: String },

    #[error("CPUクロック読み取りエラー: {source}")]
    ClockError {
        #[source]
        source: std::io::Error,
    },

    #[error("レポート出力エラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },
}

impl BenchError {
    /// 引数ストリーム長不足エラーの作成
    pub fn stream_too_short(stream: usize, len: usize, loops: usize) -> Self {
        Self::StreamTooShort { stream, len, loops }
    }

    /// 設定エラーの作成
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::ConfigurationError {
            message: message.into(),
        }
    }

    /// バリデーションエラーの作成
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// CPUクロック読み取りエラーの作成
    pub fn clock(source: std::io::Error) -> Self {
        Self::ClockError { source }
    }

    /// レポート出力エラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// 呼び出し側の前提条件違反かどうか
    ///
    /// 前提条件違反は入力を直せば再実行できる
    pub fn is_precondition_violation(&self) -> bool {
        matches!(
            self,
            Self::StreamTooShort { .. } | Self::ValidationError { .. }
        )
    }
}

impl From<anyhow::Error> for BenchError {
    fn from(error: anyhow::Error) -> Self {
        BenchError::ReportError { source: error }
    }
}

/// ベンチマーク処理の結果型
pub type BenchResult<T> = std::result::Result<T, BenchError>;
