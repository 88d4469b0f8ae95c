//! Command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! # Snapshot by username
//! cargo run -- cktc
//!
//! # Snapshot by URL, keep going if the gate confirmation fails
//! cargo run -- https://linktr.ee/cktc --allow-partial
//!
//! # Print only, no JSON artifact
//! cargo run -- cktc --no-write
//! ```
//!
//! Exits with code 1 when no profile is given or the run fails.

use linktree_snapshot::application::services::GateFailurePolicy;
use linktree_snapshot::config::{self, Config};
use linktree_snapshot::runner::{self, RunOptions};
use linktree_snapshot::utils::profile_target::ProfileTarget;

use clap::{CommandFactory, Parser};
use colored::*;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Save a structured snapshot of a public Linktree profile.
#[derive(Parser)]
#[command(name = "linktree-snapshot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Profile URL (e.g. https://linktr.ee/name) or bare username
    profile: Option<String>,

    /// Directory for the JSON snapshot
    #[arg(short, long, env = "OUTPUT_DIR")]
    output_dir: Option<String>,

    /// Keep visible links if revealing gated links fails
    #[arg(long)]
    allow_partial: bool,

    /// Do not write the JSON snapshot
    #[arg(long)]
    no_write: bool,

    /// Do not print the profile to stdout
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let Some(input) = cli.profile.as_deref().filter(|p| !p.trim().is_empty()) else {
        eprintln!("{}", "Username or url is needed!".red().bold());
        eprintln!("{}", Cli::command().render_usage());
        return ExitCode::FAILURE;
    };

    let mut config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config);

    if let Some(dir) = cli.output_dir {
        config.output_dir = dir;
    }
    if cli.allow_partial {
        config.gate_failure_policy = GateFailurePolicy::Degrade;
    }

    let target = match ProfileTarget::parse(input, &config.profile_host) {
        Ok(target) => target,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            eprintln!("{}", Cli::command().render_usage());
            return ExitCode::FAILURE;
        }
    };

    let options = RunOptions {
        write_artifact: !cli.no_write,
        print_console: !cli.quiet,
    };

    match runner::run(config, target, options).await {
        Ok(outcome) => {
            if let Some(path) = outcome.artifact {
                eprintln!("{} {}", "Saved".green().bold(), path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "Snapshot failed");
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        }
    }
}

/// Initialises the tracing subscriber on stderr, as text or JSON.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
