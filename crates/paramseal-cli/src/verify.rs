//! # Verify Subcommand
//!
//! Checks revealed parameter bytes against a commitment digest. Exit code 0
//! means the bytes match; exit code 1 means they do not. A mismatch is a
//! normal outcome, not an error.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use paramseal_core::{verify, Digest};

use crate::{jcs_bytes, read_input_bytes};

/// Arguments for the `paramseal verify` subcommand.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// The commitment digest to check against (64 hex chars).
    #[arg(long, value_name = "HEX")]
    pub commitment: String,

    /// Path to the file holding the revealed parameter bytes.
    #[arg(value_name = "FILE", required_unless_present = "hex", conflicts_with = "hex")]
    pub file: Option<PathBuf>,

    /// Hex-encoded revealed bytes, instead of a file.
    #[arg(long, value_name = "HEX")]
    pub hex: Option<String>,

    /// Treat the input as JSON and verify its RFC 8785 canonical form.
    #[arg(long)]
    pub json: bool,
}

/// Execute the verify subcommand.
pub fn run_verify(args: &VerifyArgs) -> Result<u8> {
    let commitment = Digest::from_hex(&args.commitment)
        .map_err(|e| anyhow::anyhow!("invalid commitment: {e}"))?;

    let raw = read_input_bytes(args.file.as_deref(), args.hex.as_deref())?;
    let bytes = if args.json { jcs_bytes(&raw)? } else { raw };

    if verify(&bytes, &commitment) {
        println!("OK: revealed bytes match the commitment");
        Ok(0)
    } else {
        println!("FAIL: revealed bytes do not match the commitment");
        Ok(1)
    }
}
