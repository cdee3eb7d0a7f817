//! # Sealed Parameters — Commitment Bound to Its Encoder
//!
//! A commitment digest is only meaningful together with the encoding it was
//! computed over. [`SealedParam`] fuses the two: the commitment and the
//! encoder capability travel as one value, so a revealed parameter can only
//! ever be checked through the encoder its commitment was created with.
//!
//! ## Security Invariant
//!
//! The commitment field is private. A `SealedParam` is constructed either
//! from an externally fixed commitment ([`SealedParam::new`], deployment
//! configuration) or by committing a known value now ([`SealedParam::seal`]).
//! Checking a wrong-encoder digest against a commitment is unrepresentable
//! in downstream code.
//!
//! Digest comparison goes through [`subtle::ConstantTimeEq`], and the
//! multi-field aggregate [`all_match`] folds per-field [`Choice`] values
//! with bitwise AND, so every field is compared before the verdict is
//! formed.

use subtle::{Choice, ConstantTimeEq};

use paramseal_core::{commit, Commitment, Digest, EncodeError};

use crate::encoder::ParamEncoder;

/// A commitment fused with the encoder capability it was computed over.
///
/// Immutable after construction. `Send + Sync` whenever the encoder is, so
/// sealed parameters can live in shared endpoint configuration.
#[derive(Debug, Clone)]
pub struct SealedParam<S> {
    commitment: Commitment,
    encoder: S,
}

impl<S> SealedParam<S> {
    /// Bind an externally fixed commitment to its encoder.
    ///
    /// Used when the commitment was baked into the artifact at build time
    /// and arrives via deployment configuration.
    pub fn new(commitment: Commitment, encoder: S) -> Self {
        Self { commitment, encoder }
    }

    /// Commit to a known parameter value now.
    ///
    /// Encodes the value through `encoder`, hashes the bytes, and binds the
    /// resulting commitment to that same encoder.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the encoder fails to serialize the value.
    pub fn seal<P>(param: &P, encoder: S) -> Result<Self, EncodeError>
    where
        S: ParamEncoder<P>,
    {
        let commitment = commit(&encoder.encode(param)?);
        Ok(Self { commitment, encoder })
    }

    /// The committed digest.
    pub fn commitment(&self) -> &Commitment {
        &self.commitment
    }

    /// Compute the digest a parameter value has under the bound encoder.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the encoder fails to serialize the value.
    pub fn digest_of<P>(&self, param: &P) -> Result<Digest, EncodeError>
    where
        S: ParamEncoder<P>,
    {
        Ok(commit(&self.encoder.encode(param)?))
    }

    /// Check a revealed parameter against the commitment.
    ///
    /// A mismatch is a normal `false` outcome, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the encoder fails to serialize the value.
    pub fn matches<P>(&self, param: &P) -> Result<bool, EncodeError>
    where
        S: ParamEncoder<P>,
    {
        Ok(self.check(param)?.into())
    }

    /// Constant-time per-field verdict, for aggregation by [`all_match`].
    pub(crate) fn check<P>(&self, param: &P) -> Result<Choice, EncodeError>
    where
        S: ParamEncoder<P>,
    {
        Ok(self.digest_of(param)?.ct_eq(&self.commitment))
    }
}

/// Aggregate per-field verdicts with a non-short-circuiting AND.
///
/// Every [`Choice`] in the iterator is folded with bitwise AND before the
/// result is converted to `bool`, so the aggregate is independent of field
/// order and of which field (if any) mismatched.
pub(crate) fn all_match<I>(checks: I) -> bool
where
    I: IntoIterator<Item = Choice>,
{
    checks
        .into_iter()
        .fold(Choice::from(1u8), |acc, c| acc & c)
        .into()
}
