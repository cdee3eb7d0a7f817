//! # paramseal CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.
//! Handlers return an exit code on success; errors are logged and map to
//! exit code 1.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use paramseal_cli::commit::{run_commit, CommitArgs};
use paramseal_cli::compose::{run_compose, ComposeArgs};
use paramseal_cli::verify::{run_verify, VerifyArgs};

/// Parameter commitment toolchain.
///
/// Computes commitment digests for artifact parameters, checks revealed
/// bytes against commitments, and reconstructs instantiated artifact
/// identities from template skeletons.
#[derive(Parser, Debug)]
#[command(name = "paramseal", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute the commitment digest of parameter bytes.
    Commit(CommitArgs),

    /// Check revealed parameter bytes against a commitment.
    Verify(VerifyArgs),

    /// Compose an instantiated artifact's byte identity from a skeleton.
    Compose(ComposeArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    tracing::debug!("paramseal CLI starting");

    let result = match cli.command {
        Commands::Commit(args) => run_commit(&args),
        Commands::Verify(args) => run_verify(&args),
        Commands::Compose(args) => run_compose(&args),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
