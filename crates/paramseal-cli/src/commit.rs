//! # Commit Subcommand
//!
//! Computes the commitment digest of parameter bytes, printed as 64 hex
//! chars on stdout. The digest is what an artifact bakes in at build time
//! and what `paramseal verify` later checks revealed bytes against.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use paramseal_core::commit;

use crate::{jcs_bytes, read_input_bytes};

/// Arguments for the `paramseal commit` subcommand.
#[derive(Args, Debug)]
pub struct CommitArgs {
    /// Path to the file holding the parameter bytes.
    #[arg(value_name = "FILE", required_unless_present = "hex", conflicts_with = "hex")]
    pub file: Option<PathBuf>,

    /// Hex-encoded parameter bytes, instead of a file.
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Treat the input as JSON and commit its RFC 8785 canonical form.
    #[arg(long)]
    pub json: bool,
}

/// Execute the commit subcommand.
pub fn run_commit(args: &CommitArgs) -> Result<u8> {
    let raw = read_input_bytes(args.file.as_deref(), args.hex.as_deref())?;
    let bytes = if args.json { jcs_bytes(&raw)? } else { raw };

    tracing::debug!(len = bytes.len(), "committing parameter bytes");
    println!("{}", commit(&bytes).to_hex());

    Ok(0)
}
