//! # paramseal-core — Foundational Types for paramseal
//!
//! This crate is the bedrock of the paramseal workspace. It defines the
//! commitment digest primitive and the shared error hierarchy; every other
//! crate in the workspace depends on `paramseal-core`, and it depends on
//! nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One digest type.** [`Digest`] is the only digest representation in
//!    the workspace — 32 bytes of SHA-256 output, hex serde, byte-exact
//!    equality, constant-time comparison on verification paths.
//!
//! 2. **Commitments are digests with a role.** [`Commitment`] aliases
//!    [`Digest`]: a commitment is a digest fixed into an artifact at build
//!    time, valid for exactly one parameter value.
//!
//! 3. **Mismatch is a verdict, not an exception.** [`verify()`] returns a
//!    boolean; a failed comparison is the expected outcome for forged or
//!    stale parameters and must stay cheap and side-effect-free.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `paramseal-*` crates (this is the leaf of the
//!   DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod digest;
pub mod error;

// Re-export primary types for ergonomic imports.
pub use digest::{commit, verify, Commitment, Digest, DIGEST_LEN};
pub use error::{DigestError, EncodeError, ParamsealError, TemplateError, VerifyError};
