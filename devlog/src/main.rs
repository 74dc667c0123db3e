mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use devlog_core::logging::init_logging;
use devlog_core::logs::run_logs;
use std::io::ErrorKind;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // the reader went away (`devlog app.log | head`)
        Err(err) if is_broken_pipe(&err) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("devlog: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.format_config()?;
    let stdout = tokio::io::stdout();

    match &cli.file {
        Some(path) => {
            let file = tokio::fs::File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            run_logs(file, stdout, &config).await
        }
        None => run_logs(tokio::io::stdin(), stdout, &config).await,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<std::io::Error>())
        .any(|io| io.kind() == ErrorKind::BrokenPipe)
}
