use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Validate and inspect pre-commit hook configuration files.
#[derive(Debug, Parser)]
#[command(name = "pre-commit-config", version, about)]
struct Cli {
    #[command(subcommand)]
    command: pre_commit_config::Commands,
}

fn main() -> miette::Result<()> {
    // Silent unless RUST_LOG is set (e.g. RUST_LOG=debug)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    pre_commit_config::run(cli.command)
}
