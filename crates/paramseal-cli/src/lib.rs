//! # paramseal-cli — Commitment Toolchain
//!
//! Provides the `paramseal` command-line interface for deployment-time work
//! with parameter commitments.
//!
//! ## Subcommands
//!
//! - `paramseal commit` — Compute the commitment digest of parameter bytes.
//! - `paramseal verify` — Check revealed bytes against a commitment.
//! - `paramseal compose` — Reconstruct an instantiated artifact's byte
//!   identity from a skeleton file plus parameter files or digests.
//!
//! ```bash
//! paramseal commit params/key.bin
//! paramseal commit --json params/config.json
//! paramseal verify --commitment 9f86d0... params/key.bin
//! paramseal compose --skeleton skeleton.json params/a.bin params/b.bin --identity
//! ```

pub mod commit;
pub mod compose;
pub mod verify;

use std::path::Path;

use anyhow::{bail, Context, Result};

use paramseal_verify::{JcsEncoder, ParamEncoder};

/// Read parameter bytes from a file or a hex literal.
///
/// Exactly one of `file` and `hex` must be given; clap enforces this at the
/// argument level, and the check here covers programmatic callers.
pub fn read_input_bytes(file: Option<&Path>, hex: Option<&str>) -> Result<Vec<u8>> {
    match (file, hex) {
        (Some(path), None) => {
            if !path.exists() {
                bail!("parameter file not found: {}", path.display());
            }
            std::fs::read(path)
                .with_context(|| format!("failed to read parameter file: {}", path.display()))
        }
        (None, Some(hex)) => hex_to_bytes(hex.trim()).context("invalid parameter hex"),
        _ => bail!("exactly one of a parameter file or --hex must be given"),
    }
}

/// Re-encode JSON input in its RFC 8785 canonical form.
///
/// Commitments over JSON parameters are computed on the canonical bytes, so
/// both the committing and the revealing side agree regardless of key order
/// or whitespace in their files.
pub fn jcs_bytes(raw: &[u8]) -> Result<Vec<u8>> {
    let value: serde_json::Value =
        serde_json::from_slice(raw).context("parameter is not valid JSON")?;
    JcsEncoder
        .encode(&value)
        .context("failed to canonicalize JSON parameter")
}

/// Decode a hex string into bytes.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>> {
    // Slicing below is at byte offsets, so every char must be one byte wide.
    if !hex.is_ascii() {
        bail!("hex string contains non-ASCII characters");
    }
    if hex.len() % 2 != 0 {
        bail!("hex string has odd length: {}", hex.len());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex at position {i}"))
        })
        .collect()
}

/// Render bytes as a lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}
