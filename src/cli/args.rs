use crate::core::Scenario;
use crate::services::ConfigPreset;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dispatch_bench")]
#[command(about = "Compare dynamic and static dispatch over heterogeneous strategy collections")]
#[command(version)]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Benchmark a single dispatch scenario
    Run {
        /// Scenario to benchmark
        #[arg(short, long, value_enum, default_value = "dynamic")]
        scenario: Scenario,

        #[command(flatten)]
        options: BenchOptions,
    },

    /// Benchmark every configured scenario on the same operands
    Compare {
        #[command(flatten)]
        options: BenchOptions,

        /// Write a JSON report to this path
        #[arg(short, long)]
        report: Option<PathBuf>,
    },
}

/// Options shared by every benchmark command
#[derive(Args, Debug, Clone, Default)]
pub struct BenchOptions {
    /// Number of run() iterations
    #[arg(short, long)]
    pub loops: Option<usize>,

    /// Seed for operand generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Draw one operand pair and reuse it for every iteration
    #[arg(long)]
    pub constant: bool,

    /// Configuration preset (default, quick, testing)
    #[arg(short, long, value_enum)]
    pub preset: Option<ConfigPreset>,

    /// JSON configuration file (takes precedence over --preset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
