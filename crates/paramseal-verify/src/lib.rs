//! # paramseal-verify — Commitment-Verifying Wrappers
//!
//! The call-time half of the engine: authenticate revealed parameter values
//! against previously sealed commitments before any business logic runs.
//!
//! - **Encoders** ([`ParamEncoder`], [`BytesEncoder`], [`JcsEncoder`]) —
//!   injected serializer capabilities; only the caller knows the encoding a
//!   commitment was computed over.
//! - **Sealed parameters** ([`SealedParam`]) — a commitment fused with its
//!   encoder, so verification cannot use the wrong encoding.
//! - **Reveal inputs** ([`Reveal1`]..[`Reveal3`], [`Bare1`]..[`Bare3`],
//!   [`decode_input`]) — the per-call structured aggregates, destructured
//!   strictly before any digest work.
//! - **Unseal combinators** ([`unseal1`] and family) — verify every field,
//!   then invoke the caller's business function with the authenticated
//!   values.
//!
//! ## Crate Policy
//!
//! - Depends only on `paramseal-core` internally.
//! - Purely functional: no I/O, no caching, no state across calls.
//! - Business functions and encoders are opaque capabilities; the engine
//!   never inspects them.
//! - No mocking of digest computation in tests — all tests run real SHA-256.

pub mod encoder;
pub mod reveal;
pub mod seal;
pub mod wrap;

pub use encoder::{BytesEncoder, JcsEncoder, ParamEncoder};
pub use reveal::{decode_input, Bare1, Bare2, Bare3, Reveal1, Reveal2, Reveal3};
pub use seal::SealedParam;
pub use wrap::{
    unseal1, unseal1_bare, unseal2, unseal2_bare, unseal3, unseal3_bare, unseal3_prehashed,
};
