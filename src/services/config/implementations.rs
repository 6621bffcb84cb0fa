// ベンチマーク設定の具象実装

use crate::core::{BenchError, BenchResult, Scenario};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// ランダム引数ストリームで許容する最大ループ回数
///
/// 2本のストリームを実体化するため、これを超える場合は定数モードを使う
pub const MAX_RANDOM_LOOPS: usize = 50_000_000;

/// 引数ストリームの生成方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OperandMode {
    /// ループごとに乱数を引く
    #[default]
    Random,
    /// 乱数を1組だけ引き、全ループで使い回す
    Constant,
}

/// 設定プリセット
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigPreset {
    /// バランスの取れたデフォルト設定
    Default,
    /// 短時間で終わる確認用設定
    Quick,
    /// テスト用の最小設定
    Testing,
}

impl ConfigPreset {
    pub fn config(&self) -> BenchConfig {
        match self {
            Self::Default => BenchConfig::default(),
            Self::Quick => BenchConfig::default().with_loops(100_000),
            Self::Testing => BenchConfig::default().with_loops(1_000).with_seed(0),
        }
    }
}

/// ディスパッチ比較の設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// `run`の繰り返し回数
    pub loops: usize,
    /// 乱数引数の下限（両端含む）
    pub operand_min: u32,
    /// 乱数引数の上限（両端含む）
    pub operand_max: u32,
    /// 乱数シード（未指定なら毎回変わる）
    pub seed: Option<u64>,
    pub operands: OperandMode,
    /// 実行するシナリオ（実行順）
    pub scenarios: Vec<Scenario>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            loops: 10_000_000,
            // 0 を避けるため 1..=10
            operand_min: 1,
            operand_max: 10,
            seed: None,
            operands: OperandMode::Random,
            scenarios: Scenario::ALL.to_vec(),
        }
    }
}

impl BenchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_loops(mut self, loops: usize) -> Self {
        self.loops = loops;
        self
    }

    pub fn with_operand_range(mut self, min: u32, max: u32) -> Self {
        self.operand_min = min;
        self.operand_max = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_operand_mode(mut self, operands: OperandMode) -> Self {
        self.operands = operands;
        self
    }

    pub fn with_scenarios(mut self, scenarios: Vec<Scenario>) -> Self {
        self.scenarios = scenarios;
        self
    }

    /// 設定値の整合性を検証
    pub fn validate(&self) -> BenchResult<()> {
        if self.operand_min > self.operand_max {
            return Err(BenchError::validation(
                "operand_min",
                format!(
                    "operand_max ({}) 以下である必要があります: {}",
                    self.operand_max, self.operand_min
                ),
            ));
        }

        if self.scenarios.is_empty() {
            return Err(BenchError::validation(
                "scenarios",
                "1つ以上のシナリオが必要です",
            ));
        }

        if self.operands == OperandMode::Random && self.loops > MAX_RANDOM_LOOPS {
            return Err(BenchError::configuration(format!(
                "ランダム引数では loops は {MAX_RANDOM_LOOPS} 以下にしてください（指定値: {}）。定数モードを使ってください",
                self.loops
            )));
        }

        Ok(())
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| anyhow::anyhow!("JSON変換エラー: {}", e))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| anyhow::anyhow!("JSON解析エラー: {}", e))
    }

    /// JSON設定ファイルを読み込む（省略した項目はデフォルト値）
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読み込めません: {}", path.display()))?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = BenchConfig::default();

        assert_eq!(config.loops, 10_000_000);
        assert_eq!((config.operand_min, config.operand_max), (1, 10));
        assert_eq!(config.seed, None);
        assert_eq!(config.operands, OperandMode::Random);
        assert_eq!(config.scenarios, Scenario::ALL.to_vec());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = BenchConfig::new()
            .with_loops(42)
            .with_operand_range(5, 6)
            .with_seed(9)
            .with_operand_mode(OperandMode::Constant)
            .with_scenarios(vec![Scenario::Static]);

        assert_eq!(config.loops, 42);
        assert_eq!((config.operand_min, config.operand_max), (5, 6));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.operands, OperandMode::Constant);
        assert_eq!(config.scenarios, vec![Scenario::Static]);
    }

    #[test]
    fn test_presets() {
        assert_eq!(ConfigPreset::Default.config(), BenchConfig::default());
        assert_eq!(ConfigPreset::Quick.config().loops, 100_000);

        let testing = ConfigPreset::Testing.config();
        assert_eq!(testing.loops, 1_000);
        assert_eq!(testing.seed, Some(0));
    }

    #[test]
    fn test_validate_rejects_inverted_range() {
        let error = BenchConfig::new()
            .with_operand_range(10, 1)
            .validate()
            .unwrap_err();

        assert!(matches!(error, BenchError::ValidationError { ref field, .. } if field == "operand_min"));
    }

    #[test]
    fn test_validate_rejects_empty_scenarios() {
        let error = BenchConfig::new().with_scenarios(Vec::new()).validate().unwrap_err();
        assert!(error.to_string().contains("scenarios"));
    }

    #[test]
    fn test_validate_random_loop_limit() {
        let too_many = BenchConfig::new().with_loops(MAX_RANDOM_LOOPS + 1);
        assert!(matches!(
            too_many.validate(),
            Err(BenchError::ConfigurationError { .. })
        ));

        let constant = too_many.with_operand_mode(OperandMode::Constant);
        assert!(constant.validate().is_ok());
    }

    #[test]
    fn test_json_partial_config_uses_defaults() {
        let config = BenchConfig::from_json(r#"{ "loops": 5, "operands": "constant" }"#).unwrap();

        assert_eq!(config.loops, 5);
        assert_eq!(config.operands, OperandMode::Constant);
        assert_eq!(config.operand_max, 10);
        assert_eq!(config.scenarios.len(), 3);
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let original = BenchConfig::new()
            .with_loops(77)
            .with_seed(3)
            .with_scenarios(vec![Scenario::Dynamic, Scenario::Static]);

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(original.to_json().unwrap().as_bytes()).unwrap();

        let loaded = BenchConfig::from_json_file(file.path()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file_error_mentions_path() {
        let error = BenchConfig::from_json_file(Path::new("/nonexistent/bench.json")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/bench.json"));
    }

    #[test]
    fn test_invalid_json() {
        let error = BenchConfig::from_json("{ loops: }").unwrap_err();
        assert!(error.to_string().contains("JSON解析エラー"));
    }
}
