use std::io::IsTerminal;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use check_version::config::project_root;
use check_version::report::run;
use check_version::version::FsSourceReader;

#[derive(Parser)]
#[command(name = "check-version")]
#[command(
    version,
    about = "Check that rule72's version agrees across Cargo.toml, default.nix, CHANGELOG.md and main.rs"
)]
struct Cli {}

fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();
    init_tracing();

    let root = project_root();
    info!("Checking versions below {:?}", root);

    let code = run(
        &FsSourceReader::new(root),
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
    .context("failed to write report")?;
    Ok(ExitCode::from(code))
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}
