// ベンチマーク結果とシナリオの型定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 1回の`benchmark`呼び出しの結果
///
/// チェックサムと2種類の経過時間だけが外部から観測できる出力
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// 実行したループ回数
    pub loops: usize,
    /// コレクション内のストラテジー数
    pub strategies: usize,
    /// 全結果のラップアラウンド加算
    pub checksum: u32,
    /// 消費CPU時間（ミリ秒）
    pub cpu_ms: f64,
    /// 経過実時間（ミリ秒）
    pub wall_ms: f64,
}

impl BenchmarkReport {
    /// ストラテジー呼び出しの総数
    pub fn invocations(&self) -> u64 {
        self.loops as u64 * self.strategies as u64
    }

    /// 1呼び出しあたりの実時間（ナノ秒）
    ///
    /// 呼び出しが一度もなければ`None`
    pub fn wall_ns_per_invocation(&self) -> Option<f64> {
        match self.invocations() {
            0 => None,
            n => Some(self.wall_ms * 1_000_000.0 / n as f64),
        }
    }
}

/// 比較対象のディスパッチ方式
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// 共有ハンドル経由の動的ディスパッチ
    Dynamic,
    /// `Computer`実装型のタプルに対する静的ディスパッチ
    StaticTrait,
    /// 共通インターフェースを持たない型のタプルに対する静的ディスパッチ
    Static,
}

impl Scenario {
    /// 全シナリオ（実行順）
    pub const ALL: [Scenario; 3] = [Scenario::Dynamic, Scenario::StaticTrait, Scenario::Static];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Dynamic => "dynamic",
            Self::StaticTrait => "static-trait",
            Self::Static => "static",
        }
    }

    /// コンソール出力用のラベル
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Dynamic => "Inheritance",
            Self::StaticTrait => "Tuple (w/ trait)",
            Self::Static => "Tuple",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Dynamic => "Rc<RefCell<dyn Computer>> の Vec をループで呼び出す",
            Self::StaticTrait => "Computer 実装型のタプルを展開して直接呼び出す",
            Self::Static => "無関係な型のタプル（Multiplication を含む）を展開して直接呼び出す",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// シナリオと結果の組
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioReport {
    pub scenario: Scenario,
    pub report: BenchmarkReport,
}
