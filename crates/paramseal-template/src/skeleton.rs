//! # Template Skeleton — Constant Byte Scaffolding
//!
//! Defines [`TemplateSkeleton`], the four constant byte sequences that
//! surround parameter digests in an instantiated artifact's serialized
//! form: global prefix, per-field header, per-field terminator, global
//! postfix.
//!
//! ## External Contract
//!
//! Skeleton bytes are obtained out-of-band — by running the genuine
//! instantiation process once with placeholder parameters and recording the
//! bytes surrounding the digest locations. They must remain byte-identical
//! to what that process produces; a drift in the instantiation format
//! silently breaks identity reproduction, and nothing here can detect it.
//!
//! ## Serde
//!
//! All four fields serialize as lowercase hex strings, so a skeleton can be
//! recorded in a deployment configuration file and loaded by both the CLI
//! and endpoint code:
//!
//! ```json
//! {"prefix":"5901...","field_header":"d879","field_terminator":"ff","postfix":"0001"}
//! ```

use paramseal_core::{commit, Digest, TemplateError};
use serde::{Deserialize, Serialize};

/// Constant byte scaffolding for the multi-field instantiation layout.
///
/// Immutable after construction; a deployed artifact's skeleton never
/// changes. Cheap to clone, safe to share across threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateSkeleton {
    /// Bytes preceding the first parameter field.
    #[serde(with = "hex_bytes")]
    prefix: Vec<u8>,
    /// Bytes opening each parameter field.
    #[serde(with = "hex_bytes")]
    field_header: Vec<u8>,
    /// Bytes closing each parameter field.
    #[serde(with = "hex_bytes")]
    field_terminator: Vec<u8>,
    /// Bytes following the last parameter field.
    #[serde(with = "hex_bytes")]
    postfix: Vec<u8>,
}

impl TemplateSkeleton {
    /// Create a skeleton from its four constant byte sequences.
    pub fn new(
        prefix: impl Into<Vec<u8>>,
        field_header: impl Into<Vec<u8>>,
        field_terminator: impl Into<Vec<u8>>,
        postfix: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            field_header: field_header.into(),
            field_terminator: field_terminator.into(),
            postfix: postfix.into(),
        }
    }

    /// Bytes preceding the first parameter field.
    pub fn prefix(&self) -> &[u8] {
        &self.prefix
    }

    /// Bytes opening each parameter field.
    pub fn field_header(&self) -> &[u8] {
        &self.field_header
    }

    /// Bytes closing each parameter field.
    pub fn field_terminator(&self) -> &[u8] {
        &self.field_terminator
    }

    /// Bytes following the last parameter field.
    pub fn postfix(&self) -> &[u8] {
        &self.postfix
    }

    /// Splice already-computed digests into the multi-field layout.
    ///
    /// Returns `prefix ‖ Σᵢ(header ‖ digestᵢ ‖ terminator) ‖ postfix`, with
    /// fields strictly in input order — the order must match the byte order
    /// the genuine instantiation process itself would produce.
    ///
    /// This is the primitive for a predicting artifact that holds only the
    /// digests, never the raw parameters.
    pub fn splice(&self, digests: &[Digest]) -> Result<Vec<u8>, TemplateError> {
        if digests.is_empty() {
            return Err(TemplateError::NoFields);
        }
        let field_len =
            self.field_header.len() + paramseal_core::DIGEST_LEN + self.field_terminator.len();
        let mut out = Vec::with_capacity(
            self.prefix.len() + digests.len() * field_len + self.postfix.len(),
        );
        out.extend_from_slice(&self.prefix);
        for digest in digests {
            out.extend_from_slice(&self.field_header);
            out.extend_from_slice(digest.as_bytes());
            out.extend_from_slice(&self.field_terminator);
        }
        out.extend_from_slice(&self.postfix);
        Ok(out)
    }

    /// Hash each serialized parameter and splice the digests into the
    /// multi-field layout.
    ///
    /// The composer hashes exactly the bytes given: serialization is the
    /// caller's responsibility, preserving parity with how the original
    /// artifact's build-time parameters were encoded. The canonical host
    /// format carries two or three fields; any non-empty count is accepted.
    pub fn compose(&self, params: &[&[u8]]) -> Result<Vec<u8>, TemplateError> {
        let digests: Vec<Digest> = params.iter().map(|p| commit(p)).collect();
        self.splice(&digests)
    }

    /// Derived identity of the artifact this skeleton would instantiate
    /// with the given parameters: the commitment of the composed bytes.
    pub fn instance_identity(&self, params: &[&[u8]]) -> Result<Digest, TemplateError> {
        Ok(commit(&self.compose(params)?))
    }
}

/// Hex-string serde for skeleton byte fields.
mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let hex: String = bytes.iter().map(|b| format!("{b:02x}")).collect();
        serializer.serialize_str(&hex)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let hex = String::deserialize(deserializer)?;
        let hex = hex.trim().to_lowercase();
        // Slicing below is at byte offsets, so every char must be one byte wide.
        if !hex.is_ascii() {
            return Err(serde::de::Error::custom("hex string must be ASCII"));
        }
        if hex.len() % 2 != 0 {
            return Err(serde::de::Error::custom("hex string must have even length"));
        }
        (0..hex.len())
            .step_by(2)
            .map(|i| {
                u8::from_str_radix(&hex[i..i + 2], 16).map_err(|e| {
                    serde::de::Error::custom(format!("invalid hex at position {i}: {e}"))
                })
            })
            .collect()
    }
}
