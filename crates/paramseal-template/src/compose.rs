//! # Single-Parameter Composition
//!
//! The single-parameter instantiation layout has no per-field framing: the
//! parameter's digest sits directly between the global prefix and postfix.
//! [`compose_one`] hashes a serialized parameter and splices the digest;
//! [`splice_one`] splices a digest the caller already holds.
//!
//! A different artifact can predict the serialized identity of an
//! instantiated artifact from these bytes alone — skeleton plus digest —
//! without ever seeing the instantiated logic.

use paramseal_core::{commit, Digest, DIGEST_LEN};

/// Splice an already-computed digest into the single-parameter layout.
///
/// Returns `prefix ‖ digest ‖ postfix`.
pub fn splice_one(prefix: &[u8], digest: &Digest, postfix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + DIGEST_LEN + postfix.len());
    out.extend_from_slice(prefix);
    out.extend_from_slice(digest.as_bytes());
    out.extend_from_slice(postfix);
    out
}

/// Hash a serialized parameter and splice its digest into the
/// single-parameter layout.
///
/// Returns `prefix ‖ commit(param_bytes) ‖ postfix`. The digest is computed
/// over exactly the bytes given — the composer never serializes; the caller
/// supplies the same encoding the build-time commitment was computed over.
pub fn compose_one(prefix: &[u8], param_bytes: &[u8], postfix: &[u8]) -> Vec<u8> {
    splice_one(prefix, &commit(param_bytes), postfix)
}
