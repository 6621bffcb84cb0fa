// 計測結果のJSON永続化

use crate::core::ScenarioReport;
use crate::services::config::BenchConfig;
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 1回の比較実行の記録
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    pub timestamp: DateTime<Utc>,
    pub config: BenchConfig,
    pub results: Vec<ScenarioReport>,
}

impl BenchmarkRecord {
    pub fn new(config: BenchConfig, results: Vec<ScenarioReport>) -> Self {
        Self {
            timestamp: Utc::now(),
            config,
            results,
        }
    }
}

/// 記録をJSONファイルに書き出す
#[derive(Debug, Clone)]
pub struct JsonReportWriter<P: AsRef<Path>> {
    path: P,
}

impl<P: AsRef<Path>> JsonReportWriter<P> {
    pub fn new(path: P) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        self.path.as_ref()
    }

    pub fn write(&self, record: &BenchmarkRecord) -> Result<()> {
        let json = serde_json::to_string_pretty(record).context("レポートのJSON変換に失敗しました")?;
        std::fs::write(self.path(), json)
            .with_context(|| format!("レポートを書き込めません: {}", self.path().display()))?;

        tracing::info!(path = %self.path().display(), results = record.results.len(), "report written");
        Ok(())
    }

    pub fn read(&self) -> Result<BenchmarkRecord> {
        let json = std::fs::read_to_string(self.path())
            .with_context(|| format!("レポートを読み込めません: {}", self.path().display()))?;
        serde_json::from_str(&json).context("レポートのJSON解析に失敗しました")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BenchmarkReport, Scenario};
    use tempfile::TempDir;

    fn sample_results() -> Vec<ScenarioReport> {
        vec![ScenarioReport {
            scenario: Scenario::Dynamic,
            report: BenchmarkReport {
                loops: 1_000,
                strategies: 3,
                checksum: 987_654,
                cpu_ms: 0.5,
                wall_ms: 0.75,
            },
        }]
    }

    #[test]
    fn test_write_and_read_back() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonReportWriter::new(temp_dir.path().join("report.json"));
        let record = BenchmarkRecord::new(BenchConfig::default().with_loops(1_000), sample_results());

        writer.write(&record).unwrap();
        let loaded = writer.read().unwrap();

        assert_eq!(loaded, record);
    }

    #[test]
    fn test_written_json_layout() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.json");
        let writer = JsonReportWriter::new(&path);

        writer
            .write(&BenchmarkRecord::new(BenchConfig::default(), sample_results()))
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert!(value["timestamp"].is_string());
        assert_eq!(value["results"][0]["scenario"], "dynamic");
        assert_eq!(value["results"][0]["report"]["checksum"], 987_654);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let writer = JsonReportWriter::new(temp_dir.path().join("missing").join("report.json"));

        let error = writer
            .write(&BenchmarkRecord::new(BenchConfig::default(), Vec::new()))
            .unwrap_err();
        assert!(error.to_string().contains("レポートを書き込めません"));
    }
}
