mod fmt;
mod list;
mod plan;
mod validate;

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::config::DEFAULT_CONFIG_FILE;

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check the config file and report repository and hook counts
    Validate {
        #[command(flatten)]
        source: ConfigArg,
    },
    /// List configured hooks grouped by repository
    List {
        #[command(flatten)]
        source: ConfigArg,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show which hooks would run against which files, without running anything
    Plan {
        #[command(flatten)]
        source: ConfigArg,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
        /// Hook ids to skip (comma-separated)
        #[arg(long, env = "SKIP", value_delimiter = ',')]
        skip: Vec<String>,
        /// Only plan hooks with this id
        #[arg(long)]
        hook: Option<String>,
        /// Files to check; read one per line from stdin when omitted
        files: Vec<String>,
    },
    /// Print the config in canonical form
    Fmt {
        #[command(flatten)]
        source: ConfigArg,
    },
}

/// The `--config` option shared by every subcommand.
#[derive(Debug, Args)]
pub struct ConfigArg {
    /// Path to the YAML config file
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,
}

/// Dispatch a parsed subcommand.
pub fn run(command: Commands) -> miette::Result<()> {
    match command {
        Commands::Validate { source } => validate::run(&source.config),
        Commands::List { source, json } => list::run(&source.config, json),
        Commands::Plan {
            source,
            json,
            skip,
            hook,
            files,
        } => plan::run(
            &source.config,
            crate::plan::PlanOptions { skip, hook },
            files,
            json,
        ),
        Commands::Fmt { source } => fmt::run(&source.config),
    }
}

/// `1 hook`, `3 hooks`.
fn count(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}
