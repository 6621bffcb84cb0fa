pub mod compare;
pub mod run;

pub use compare::*;
pub use run::*;

use crate::cli::args::BenchOptions;
use crate::services::{BenchConfig, OperandMode};
use anyhow::Result;

/// コマンドラインオプションから設定を組み立てる
///
/// 優先順位: 個別オプション > 設定ファイル > プリセット > デフォルト
pub fn resolve_config(options: &BenchOptions) -> Result<BenchConfig> {
    let mut config = match (&options.config, options.preset) {
        (Some(path), _) => BenchConfig::from_json_file(path)?,
        (None, Some(preset)) => preset.config(),
        (None, None) => BenchConfig::default(),
    };

    if let Some(loops) = options.loops {
        config = config.with_loops(loops);
    }
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }
    if options.constant {
        config = config.with_operand_mode(OperandMode::Constant);
    }

    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ConfigPreset;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_options() {
        let config = resolve_config(&BenchOptions::default()).unwrap();
        assert_eq!(config, BenchConfig::default());
    }

    #[test]
    fn test_overrides_apply_on_top_of_preset() {
        let options = BenchOptions {
            loops: Some(12),
            seed: Some(5),
            constant: true,
            preset: Some(ConfigPreset::Testing),
            config: None,
        };

        let config = resolve_config(&options).unwrap();
        assert_eq!(config.loops, 12);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.operands, OperandMode::Constant);
    }

    #[test]
    fn test_config_file_takes_precedence_over_preset() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bench.json");
        std::fs::write(&path, r#"{ "loops": 321 }"#).unwrap();

        let options = BenchOptions {
            preset: Some(ConfigPreset::Quick),
            config: Some(path),
            ..BenchOptions::default()
        };

        assert_eq!(resolve_config(&options).unwrap().loops, 321);
    }

    #[test]
    fn test_invalid_result_is_rejected() {
        let options = BenchOptions {
            loops: Some(usize::MAX),
            ..BenchOptions::default()
        };

        assert!(resolve_config(&options).is_err());
    }
}
