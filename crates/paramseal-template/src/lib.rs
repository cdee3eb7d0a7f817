//! # paramseal-template — Instantiation Template Composition
//!
//! Composition of serialized artifact identities from a fixed byte skeleton
//! and per-parameter digests. An artifact that embeds committed parameters
//! has a predictable serialized form: everything except the parameter values
//! is fixed at build time, and each parameter contributes exactly its
//! 32-byte digest.
//!
//! Two layouts are provided:
//!
//! - **Single-parameter** ([`compose_one`], [`splice_one`]): the digest sits
//!   directly between a prefix and a postfix, with no per-field framing.
//! - **Multi-parameter** ([`TemplateSkeleton`]): each digest is wrapped in a
//!   field header and terminator, and the whole sequence sits between the
//!   prefix and postfix. Field order is significant.
//!
//! ## Security Invariant
//!
//! Composition is deterministic: the same skeleton and the same parameter
//! bytes, in the same order, always produce the same serialized identity.
//! The composer hashes the bytes it is given and nothing else; parameter
//! serialization happens before composition, under the caller's encoder.
//!
//! ## Crate Policy
//!
//! - No I/O. Composition is pure byte manipulation over inputs the caller
//!   already holds.
//! - No panics on untrusted input. Structural errors surface as
//!   [`TemplateError`](paramseal_core::TemplateError).

pub mod compose;
pub mod skeleton;

pub use compose::{compose_one, splice_one};
pub use skeleton::TemplateSkeleton;
