//! # Unseal Combinators — Verify, Then Invoke
//!
//! The commitment-verifying wrapper family. Each combinator takes a
//! structured reveal input, one [`SealedParam`] per revealed field, and a
//! caller-supplied business function; it recomputes each field's digest
//! through the field's bound encoder, aggregates the comparisons, and only
//! on full success invokes the business function with the authenticated
//! values, returning its result verbatim.
//!
//! One combinator per payload shape:
//!
//! - **with-result** ([`unseal1`], [`unseal2`], [`unseal3`]): the input
//!   carries an auxiliary payload handed to the business function, plus a
//!   generic pass-through `context` value.
//! - **without-result** ([`unseal1_bare`], [`unseal2_bare`],
//!   [`unseal3_bare`]): no payload field in the input; the endpoint supplies
//!   a variable argument outside the structured input instead.
//! - **pre-hashed** ([`unseal3_prehashed`]): the input carries digests
//!   rather than raw values, compared directly against three independent
//!   commitments with no encoding step; the business function receives the
//!   digests themselves.
//!
//! ## Security Invariant
//!
//! The business function is never invoked unless every field verified. For
//! arity above one, all fields are compared before the verdict is formed
//! ([`all_match`](crate::seal) folds constant-time comparisons with bitwise
//! AND), so neither the outcome nor its timing depends on which field
//! mismatched. The wrapper never inspects or alters the business result.
//!
//! Verification is single-shot and stateless: the input is consumed, digests
//! are recomputed on every call, and nothing is cached across calls.

use paramseal_core::{Commitment, Digest, VerifyError};
use subtle::ConstantTimeEq;

use crate::encoder::ParamEncoder;
use crate::reveal::{Bare1, Bare2, Bare3, Reveal1, Reveal2, Reveal3};
use crate::seal::{all_match, SealedParam};

/// Verify one revealed parameter, then invoke the business function with the
/// parameter, the payload, and the pass-through context.
///
/// # Errors
///
/// [`VerifyError::CommitmentMismatch`] if the recomputed digest differs from
/// the sealed commitment; [`VerifyError::Encoding`] if the bound encoder
/// fails. In both cases the business function is not invoked.
pub fn unseal1<P1, S1, R, C, T, F>(
    input: Reveal1<P1, R>,
    first: &SealedParam<S1>,
    context: C,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    F: FnOnce(P1, R, C) -> T,
{
    if !all_match([first.check(&input.first)?]) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.payload, context))
}

/// Verify two revealed parameters, then invoke the business function.
///
/// Both fields are compared regardless of whether the first already
/// mismatched; only the aggregate verdict is observable.
///
/// # Errors
///
/// As [`unseal1`].
pub fn unseal2<P1, P2, S1, S2, R, C, T, F>(
    input: Reveal2<P1, P2, R>,
    first: &SealedParam<S1>,
    second: &SealedParam<S2>,
    context: C,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    S2: ParamEncoder<P2>,
    F: FnOnce(P1, P2, R, C) -> T,
{
    let checks = [first.check(&input.first)?, second.check(&input.second)?];
    if !all_match(checks) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.second, input.payload, context))
}

/// Verify three revealed parameters, then invoke the business function.
///
/// # Errors
///
/// As [`unseal1`].
pub fn unseal3<P1, P2, P3, S1, S2, S3, R, C, T, F>(
    input: Reveal3<P1, P2, P3, R>,
    first: &SealedParam<S1>,
    second: &SealedParam<S2>,
    third: &SealedParam<S3>,
    context: C,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    S2: ParamEncoder<P2>,
    S3: ParamEncoder<P3>,
    F: FnOnce(P1, P2, P3, R, C) -> T,
{
    let checks = [
        first.check(&input.first)?,
        second.check(&input.second)?,
        third.check(&input.third)?,
    ];
    if !all_match(checks) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.second, input.third, input.payload, context))
}

/// Verify one revealed parameter from a payload-free input, then invoke the
/// business function with the parameter and an endpoint-supplied variable
/// argument.
///
/// # Errors
///
/// As [`unseal1`].
pub fn unseal1_bare<P1, S1, V, T, F>(
    input: Bare1<P1>,
    first: &SealedParam<S1>,
    arg: V,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    F: FnOnce(P1, V) -> T,
{
    if !all_match([first.check(&input.first)?]) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, arg))
}

/// Verify two revealed parameters from a payload-free input.
///
/// # Errors
///
/// As [`unseal1`].
pub fn unseal2_bare<P1, P2, S1, S2, V, T, F>(
    input: Bare2<P1, P2>,
    first: &SealedParam<S1>,
    second: &SealedParam<S2>,
    arg: V,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    S2: ParamEncoder<P2>,
    F: FnOnce(P1, P2, V) -> T,
{
    let checks = [first.check(&input.first)?, second.check(&input.second)?];
    if !all_match(checks) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.second, arg))
}

/// Verify three revealed parameters from a payload-free input.
///
/// # Errors
///
/// As [`unseal1`].
pub fn unseal3_bare<P1, P2, P3, S1, S2, S3, V, T, F>(
    input: Bare3<P1, P2, P3>,
    first: &SealedParam<S1>,
    second: &SealedParam<S2>,
    third: &SealedParam<S3>,
    arg: V,
    business: F,
) -> Result<T, VerifyError>
where
    S1: ParamEncoder<P1>,
    S2: ParamEncoder<P2>,
    S3: ParamEncoder<P3>,
    F: FnOnce(P1, P2, P3, V) -> T,
{
    let checks = [
        first.check(&input.first)?,
        second.check(&input.second)?,
        third.check(&input.third)?,
    ];
    if !all_match(checks) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.second, input.third, arg))
}

/// Verify three parameters already supplied in digest form.
///
/// No encoding or hashing happens: each revealed digest is compared directly
/// against its own commitment. Used when the caller already holds committed
/// values as digests and re-hashing would be redundant. The three commitment
/// slots are independent; each is compared only against its own field. The
/// business function receives the authenticated digests as its parameters.
///
/// # Errors
///
/// [`VerifyError::CommitmentMismatch`] if any digest differs from its
/// commitment. The business function is not invoked.
pub fn unseal3_prehashed<R, C, T, F>(
    input: Reveal3<Digest, Digest, Digest, R>,
    first: &Commitment,
    second: &Commitment,
    third: &Commitment,
    context: C,
    business: F,
) -> Result<T, VerifyError>
where
    F: FnOnce(Digest, Digest, Digest, R, C) -> T,
{
    let checks = [
        input.first.ct_eq(first),
        input.second.ct_eq(second),
        input.third.ct_eq(third),
    ];
    if !all_match(checks) {
        return Err(VerifyError::CommitmentMismatch);
    }
    Ok(business(input.first, input.second, input.third, input.payload, context))
}
