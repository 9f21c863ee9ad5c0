use std::path::PathBuf;
use std::process::ExitCode;

use bankdb_runner::api::catalog::{Suite, USAGE_SUMMARY};
use bankdb_runner::api::report::{DEFAULT_PREVIEW, RULE_WIDTH};
use bankdb_runner::{QueryRunner, RunnerConfig, DEFAULT_BASE_URL, DEFAULT_OUTPUT_DIR};
use clap::Parser;
use log::error;

#[derive(Parser)]
#[command(
    name = "bankdb-runner",
    about = "Run the banking API query walkthrough and save every response",
    version
)]
struct Cli {
    /// API base URL
    #[arg(long, env = "BANKDB_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory the JSON responses are written to
    #[arg(long, env = "BANKDB_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Query suite to run (banking or sample)
    #[arg(long, default_value_t = Suite::Banking)]
    suite: Suite,

    /// Records printed per response
    #[arg(long, default_value_t = DEFAULT_PREVIEW)]
    preview: usize,

    /// Skip the closing reference of available queries
    #[arg(long)]
    no_summary: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    let config = RunnerConfig {
        base_url: cli.base_url,
        output_dir: cli.output_dir,
        preview: cli.preview,
    };
    let runner = match QueryRunner::new(&config) {
        Ok(r) => r,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = runner.run_suite(cli.suite).await {
        error!("Run stopped: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    if !cli.no_summary {
        println!("\n📊 Summary of Available Queries:");
        println!("{}", "-".repeat(RULE_WIDTH));
        println!("{}", USAGE_SUMMARY);
        println!("{}", "=".repeat(RULE_WIDTH));
    }
    ExitCode::SUCCESS
}
