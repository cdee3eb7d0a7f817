//! # Serializer Capabilities
//!
//! Defines the abstract interface for parameter serializers. A commitment is
//! a digest over *encoded* parameter bytes, so verification must re-encode
//! the revealed value with the same encoding the commitment was computed
//! over. Only the caller knows that encoding; the engine receives it as an
//! injected capability.
//!
//! ## Security Invariant
//!
//! An encoder must be deterministic: the same parameter value must always
//! produce the same bytes. A non-deterministic encoder makes verification
//! spuriously fail, and the engine cannot distinguish that from a genuine
//! forgery. Determinism is the caller's contract; [`JcsEncoder`] is the
//! stock encoder that discharges it for any serde-serializable type.

use serde::Serialize;

use paramseal_core::EncodeError;

/// Abstract interface for encoding a parameter into the bytes its
/// commitment was computed over.
///
/// Implemented by the stock encoders in this module and blanket-implemented
/// for plain `Fn(&P) -> Vec<u8>` closures, so an endpoint with a bespoke
/// encoding can pass a closure directly.
pub trait ParamEncoder<P> {
    /// Encode a parameter value into its committed byte form.
    fn encode(&self, param: &P) -> Result<Vec<u8>, EncodeError>;
}

impl<P, F> ParamEncoder<P> for F
where
    F: Fn(&P) -> Vec<u8>,
{
    fn encode(&self, param: &P) -> Result<Vec<u8>, EncodeError> {
        Ok(self(param))
    }
}

/// Pass-through encoder for parameters that are already byte sequences.
///
/// Used when the endpoint receives the parameter in its committed encoding
/// and no re-serialization is needed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BytesEncoder;

impl<P> ParamEncoder<P> for BytesEncoder
where
    P: AsRef<[u8]>,
{
    fn encode(&self, param: &P) -> Result<Vec<u8>, EncodeError> {
        Ok(param.as_ref().to_vec())
    }
}

/// RFC 8785 (JSON Canonicalization Scheme) encoder.
///
/// Produces a deterministic byte sequence for any serializable parameter:
/// sorted keys, compact separators, canonical number formatting. Both sides
/// of a commitment (the build-time committer and the call-time verifier)
/// using `JcsEncoder` are guaranteed byte agreement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JcsEncoder;

impl<P> ParamEncoder<P> for JcsEncoder
where
    P: Serialize,
{
    fn encode(&self, param: &P) -> Result<Vec<u8>, EncodeError> {
        let s = serde_jcs::to_string(param)
            .map_err(|e| EncodeError::Serialization(e.to_string()))?;
        Ok(s.into_bytes())
    }
}
