//! # Digest Commitment Primitive
//!
//! Defines [`Digest`], the fixed-width output of the commitment hash
//! function, and the two primitive operations [`commit()`] and [`verify()`].
//!
//! ## Security Invariant
//!
//! - A commitment binds exactly one byte sequence: `verify(p, commit(p))`
//!   holds, and `verify(q, commit(p))` for `q != p` fails up to hash
//!   collisions.
//! - [`verify()`] compares digests in constant time via
//!   [`subtle::ConstantTimeEq`], so a mismatch reveals nothing about which
//!   bytes differed.
//! - The primitive is pure: no state, no side effects, mismatch is a normal
//!   boolean outcome rather than an error.
//!
//! ## Serde
//!
//! Digests serialize/deserialize as lowercase hex strings for JSON
//! interoperability with deployment configuration and CLI output.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest as _, Sha256};
use subtle::{Choice, ConstantTimeEq};

use crate::error::DigestError;

/// Width of a commitment digest in bytes (SHA-256 output).
pub const DIGEST_LEN: usize = 32;

/// A fixed-width commitment digest.
///
/// Produced by [`commit()`]. Equality is byte-exact; use
/// [`ConstantTimeEq::ct_eq`] on the verification path.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

/// A digest previously fixed into an artifact at build time.
///
/// Same representation as [`Digest`]; the alias marks the role: a commitment
/// is valid for exactly one parameter value, revealed and re-hashed at call
/// time.
pub type Commitment = Digest;

impl Digest {
    /// Create a digest from raw bytes.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Return the raw digest bytes.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from a 64-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, DigestError> {
        let hex = hex.trim().to_lowercase();
        if hex.len() != DIGEST_LEN * 2 {
            return Err(DigestError::InvalidLength(hex.len()));
        }
        let bytes = hex_to_bytes(&hex).map_err(DigestError::InvalidHex)?;
        let mut arr = [0u8; DIGEST_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

impl ConstantTimeEq for Digest {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0.ct_eq(&other.0)
    }
}

impl Serialize for Digest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Digest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Debug for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Digest({}...)", hex_prefix(&self.0))
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Compute the commitment digest of a byte sequence.
///
/// Deterministic, collision-resistant, fixed output width. The input is
/// hashed exactly as given — serialization of structured parameters is the
/// caller's responsibility, because only the caller knows the canonical
/// encoding the original commitment was computed over.
pub fn commit(bytes: &[u8]) -> Digest {
    let hash = Sha256::digest(bytes);
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&hash);
    Digest(out)
}

/// Check a byte sequence against a previously committed digest.
///
/// Exactly `commit(bytes) == commitment`, compared in constant time.
/// A mismatch is the expected outcome for forged or stale parameters and is
/// surfaced as `false`, never as an error.
pub fn verify(bytes: &[u8], commitment: &Digest) -> bool {
    commit(bytes).ct_eq(commitment).into()
}

// ---------------------------------------------------------------------------
// Hex utilities (no external hex crate dependency)
// ---------------------------------------------------------------------------

fn hex_prefix(bytes: &[u8]) -> String {
    bytes.iter().take(4).map(|b| format!("{b:02x}")).collect()
}

fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, String> {
    // Slicing below is at byte offsets, so every char must be one byte wide.
    if !hex.is_ascii() {
        return Err("hex string must be ASCII".to_string());
    }
    if hex.len() % 2 != 0 {
        return Err("hex string must have even length".to_string());
    }
    (0..hex.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("invalid hex at position {i}: {e}"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_is_deterministic() {
        let d1 = commit(b"parameter bytes");
        let d2 = commit(b"parameter bytes");
        assert_eq!(d1, d2);
    }

    #[test]
    fn commit_known_sha256_vectors() {
        // SHA256("") and SHA256("abc") — FIPS 180-2 test vectors.
        assert_eq!(
            commit(b"").to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(
            commit(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn verify_accepts_matching_bytes() {
        let commitment = commit(b"42");
        assert!(verify(b"42", &commitment));
    }

    #[test]
    fn verify_rejects_different_bytes() {
        let commitment = commit(b"42");
        assert!(!verify(b"43", &commitment));
    }

    #[test]
    fn verify_is_idempotent() {
        let commitment = commit(b"same input");
        let first = verify(b"same input", &commitment);
        let second = verify(b"same input", &commitment);
        assert_eq!(first, second);
        assert!(first);
    }

    #[test]
    fn different_inputs_produce_different_digests() {
        assert_ne!(commit(b"x"), commit(b"y"));
    }

    #[test]
    fn hex_roundtrip() {
        let digest = commit(b"roundtrip");
        let hex = digest.to_hex();
        assert_eq!(hex.len(), 64);
        let parsed = Digest::from_hex(&hex).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_accepts_uppercase_and_whitespace() {
        let digest = commit(b"case");
        let hex = digest.to_hex().to_uppercase();
        let parsed = Digest::from_hex(&format!("  {hex} ")).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn from_hex_rejects_wrong_length() {
        assert!(Digest::from_hex("aabb").is_err());
        assert!(Digest::from_hex(&"ab".repeat(33)).is_err());
    }

    #[test]
    fn from_hex_rejects_non_hex() {
        assert!(Digest::from_hex(&"zz".repeat(32)).is_err());
    }

    #[test]
    fn from_hex_rejects_multibyte_text() {
        // Three-byte leading character keeps the total at exactly 64 bytes.
        let input = format!("€{}", "0".repeat(61));
        assert_eq!(input.len(), 64);
        let result = Digest::from_hex(&input);
        assert!(matches!(result, Err(DigestError::InvalidHex(_))));
    }

    #[test]
    fn serde_json_roundtrip() {
        let digest = commit(b"serde");
        let json = serde_json::to_string(&digest).unwrap();
        assert!(json.starts_with('"'));
        assert_eq!(json.len(), 64 + 2); // 64 hex chars + 2 quotes
        let parsed: Digest = serde_json::from_str(&json).unwrap();
        assert_eq!(digest, parsed);
    }

    #[test]
    fn serde_rejects_malformed_hex() {
        let result: Result<Digest, _> = serde_json::from_str("\"not-hex\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_shows_prefix_only() {
        let digest = commit(b"debug");
        let debug = format!("{digest:?}");
        assert!(debug.starts_with("Digest("));
        assert!(debug.ends_with("...)"));
        assert!(debug.len() < 20);
    }

    #[test]
    fn display_is_full_hex() {
        let digest = commit(b"display");
        assert_eq!(format!("{digest}"), digest.to_hex());
    }

    #[test]
    fn ct_eq_matches_derived_eq() {
        let a = commit(b"a");
        let b = commit(b"b");
        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&b)));
    }
}
