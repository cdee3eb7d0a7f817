//! # Compose Subcommand
//!
//! Reconstructs the byte identity an artifact instantiation would produce,
//! from a skeleton configuration file plus the parameters. Parameters are
//! given either as files (hashed here) or as `--digest` values (already
//! hashed), matching the two sides of the prediction flow: the instantiating
//! side holds raw parameter bytes, a predicting component holds only
//! digests.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Args;

use paramseal_core::{commit, Digest};
use paramseal_template::TemplateSkeleton;

use crate::bytes_to_hex;

/// Arguments for the `paramseal compose` subcommand.
#[derive(Args, Debug)]
pub struct ComposeArgs {
    /// Path to the skeleton JSON file (hex-encoded byte sections).
    #[arg(long, value_name = "FILE")]
    pub skeleton: PathBuf,

    /// Parameter files, hashed and spliced in the order given.
    #[arg(value_name = "PARAM", conflicts_with = "digest")]
    pub params: Vec<PathBuf>,

    /// Already-computed parameter digests (64 hex chars each), spliced in
    /// the order given.
    #[arg(long = "digest", value_name = "HEX")]
    pub digest: Vec<String>,

    /// Print the identity digest of the composed bytes instead of the bytes.
    #[arg(long)]
    pub identity: bool,
}

/// Execute the compose subcommand.
pub fn run_compose(args: &ComposeArgs) -> Result<u8> {
    let skeleton = load_skeleton(&args.skeleton)?;

    let composed = if !args.digest.is_empty() {
        let digests = args
            .digest
            .iter()
            .map(|hex| {
                Digest::from_hex(hex).map_err(|e| anyhow::anyhow!("invalid digest {hex:?}: {e}"))
            })
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(fields = digests.len(), "splicing pre-computed digests");
        skeleton.splice(&digests)?
    } else if !args.params.is_empty() {
        let raw = args
            .params
            .iter()
            .map(|path| {
                std::fs::read(path)
                    .with_context(|| format!("failed to read parameter file: {}", path.display()))
            })
            .collect::<Result<Vec<_>>>()?;
        let slices: Vec<&[u8]> = raw.iter().map(Vec::as_slice).collect();
        tracing::debug!(fields = slices.len(), "composing from parameter files");
        skeleton.compose(&slices)?
    } else {
        bail!("no parameters given: pass PARAM files or --digest values");
    };

    if args.identity {
        println!("{}", commit(&composed).to_hex());
    } else {
        println!("{}", bytes_to_hex(&composed));
    }

    Ok(0)
}

/// Load a skeleton from its JSON configuration file.
fn load_skeleton(path: &Path) -> Result<TemplateSkeleton> {
    if !path.exists() {
        bail!("skeleton file not found: {}", path.display());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read skeleton: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("failed to parse skeleton JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKELETON_JSON: &str =
        r#"{"prefix":"41","field_header":"48","field_terminator":"54","postfix":"5a"}"#;

    fn write_skeleton(dir: &Path) -> PathBuf {
        let path = dir.join("skeleton.json");
        std::fs::write(&path, SKELETON_JSON).unwrap();
        path
    }

    fn args(skeleton: PathBuf) -> ComposeArgs {
        ComposeArgs {
            skeleton,
            params: Vec::new(),
            digest: Vec::new(),
            identity: false,
        }
    }

    #[test]
    fn compose_from_parameter_files() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton = write_skeleton(dir.path());
        let x = dir.path().join("x.bin");
        let y = dir.path().join("y.bin");
        std::fs::write(&x, b"x").unwrap();
        std::fs::write(&y, b"y").unwrap();

        let mut args = args(skeleton);
        args.params = vec![x, y];
        assert_eq!(run_compose(&args).unwrap(), 0);
    }

    #[test]
    fn compose_from_digests_matches_compose_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton_path = write_skeleton(dir.path());
        let skeleton = load_skeleton(&skeleton_path).unwrap();

        // The two input modes must produce identical bytes.
        let from_files = skeleton.compose(&[b"x", b"y"]).unwrap();
        let from_digests = skeleton.splice(&[commit(b"x"), commit(b"y")]).unwrap();
        assert_eq!(from_files, from_digests);
    }

    #[test]
    fn compose_with_digest_arguments() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton = write_skeleton(dir.path());

        let mut args = args(skeleton);
        args.digest = vec![commit(b"x").to_hex(), commit(b"y").to_hex()];
        args.identity = true;
        assert_eq!(run_compose(&args).unwrap(), 0);
    }

    #[test]
    fn compose_without_parameters_fails() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton = write_skeleton(dir.path());
        assert!(run_compose(&args(skeleton)).is_err());
    }

    #[test]
    fn compose_rejects_bad_digest_hex() {
        let dir = tempfile::tempdir().unwrap();
        let skeleton = write_skeleton(dir.path());

        let mut args = args(skeleton);
        args.digest = vec!["nothex".to_string()];
        assert!(run_compose(&args).is_err());
    }

    #[test]
    fn load_skeleton_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_skeleton(&dir.path().join("absent.json")).is_err());
    }

    #[test]
    fn load_skeleton_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, b"{not json").unwrap();
        assert!(load_skeleton(&path).is_err());
    }

    #[test]
    fn loaded_skeleton_round_trips_sections() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_skeleton(dir.path());
        let skeleton = load_skeleton(&path).unwrap();
        assert_eq!(skeleton.prefix(), b"A");
        assert_eq!(skeleton.field_header(), b"H");
        assert_eq!(skeleton.field_terminator(), b"T");
        assert_eq!(skeleton.postfix(), b"Z");
    }
}
