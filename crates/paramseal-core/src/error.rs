//! # Error Types — Structured Error Hierarchy
//!
//! Defines the error types used throughout the paramseal workspace. All
//! errors use `thiserror` for derive-based `Display` and `Error`
//! implementations.
//!
//! ## Design
//!
//! - A commitment mismatch carries no per-field detail: for multi-parameter
//!   verification only the aggregate verdict is observable, so the error
//!   cannot leak which field diverged.
//! - Malformed structured input is surfaced before any digest computation
//!   and is never partially processed.
//! - Serializer non-determinism is a caller bug the engine cannot detect;
//!   it manifests as an ordinary mismatch and is deliberately not given an
//!   error variant of its own.

use thiserror::Error;

/// Top-level error type for the paramseal workspace.
#[derive(Error, Debug)]
pub enum ParamsealError {
    /// Digest parsing failed.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// A parameter serializer capability failed.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Template composition failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// Commitment verification failed.
    #[error("verify error: {0}")]
    Verify(#[from] VerifyError),
}

/// Error parsing a [`Digest`](crate::Digest) from its hex form.
#[derive(Error, Debug)]
pub enum DigestError {
    /// Hex string has the wrong length.
    #[error("digest hex must be 64 chars, got {0}")]
    InvalidLength(usize),

    /// Hex string contains invalid characters.
    #[error("invalid digest hex: {0}")]
    InvalidHex(String),
}

/// Error from a caller-supplied parameter serializer.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// The parameter could not be serialized to bytes.
    #[error("parameter serialization failed: {0}")]
    Serialization(String),
}

/// Error composing an instantiated-artifact template.
#[derive(Error, Debug)]
pub enum TemplateError {
    /// The multi-field layout requires at least one parameter field.
    #[error("template composition requires at least one parameter field")]
    NoFields,
}

/// Error from the commitment-verifying wrapper family.
#[derive(Error, Debug)]
pub enum VerifyError {
    /// One or more recomputed digests differ from the stored commitments.
    /// The business function was not invoked.
    #[error("commitment mismatch: revealed parameters do not match the sealed digests")]
    CommitmentMismatch,

    /// The structured input could not be destructured into the expected
    /// parameters-plus-payload shape.
    #[error("malformed structured input: {0}")]
    MalformedInput(String),

    /// A parameter serializer failed before any digest could be compared.
    #[error("parameter encoding failed: {0}")]
    Encoding(#[from] EncodeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commitment_mismatch_display_names_no_field() {
        let err = VerifyError::CommitmentMismatch;
        let msg = format!("{err}");
        assert!(msg.contains("commitment mismatch"));
        assert!(!msg.contains("first"));
        assert!(!msg.contains("second"));
    }

    #[test]
    fn malformed_input_display() {
        let err = VerifyError::MalformedInput("missing field `payload`".to_string());
        assert!(format!("{err}").contains("missing field `payload`"));
    }

    #[test]
    fn encode_error_converts_into_verify_error() {
        let encode = EncodeError::Serialization("float not representable".to_string());
        let err = VerifyError::from(encode);
        assert!(matches!(err, VerifyError::Encoding(_)));
    }

    #[test]
    fn all_leaf_errors_convert_into_umbrella() {
        let variants: Vec<ParamsealError> = vec![
            DigestError::InvalidLength(10).into(),
            EncodeError::Serialization("e".to_string()).into(),
            TemplateError::NoFields.into(),
            VerifyError::CommitmentMismatch.into(),
        ];
        for v in variants {
            assert!(!format!("{v}").is_empty());
            assert!(!format!("{v:?}").is_empty());
        }
    }

    #[test]
    fn digest_error_display_mentions_expected_length() {
        let err = DigestError::InvalidLength(10);
        let msg = format!("{err}");
        assert!(msg.contains("64"));
        assert!(msg.contains("10"));
    }
}
