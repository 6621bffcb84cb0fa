use anyhow::Result;
use clap::Parser;

use dispatch_bench::cli::{execute_compare, execute_run, init_tracing, Cli, Commands};
use dispatch_bench::services::ConsoleReporter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run { scenario, options } => {
            println!("🚀 ディスパッチ計測: {}", scenario.label());
            execute_run(scenario, &options, ConsoleReporter::new())?;
        }
        Commands::Compare { options, report } => {
            println!("🚀 動的ディスパッチ vs 静的ディスパッチ");
            println!("{}", "=".repeat(60));
            execute_compare(&options, report.as_deref(), ConsoleReporter::new())?;
        }
    }

    println!("✅ 完了");
    Ok(())
}
