//! # Structured Reveal Inputs
//!
//! The per-call aggregates carrying revealed parameter value(s) and, for the
//! with-result shapes, an auxiliary payload passed through to the business
//! function. One shape per (arity, payload) combination; each is consumed by
//! value exactly once by the matching unseal combinator.
//!
//! ## Destructuring
//!
//! Endpoints receive these in some untrusted encoded form. [`decode_input`]
//! destructures a decoded JSON value into the expected shape; every shape
//! carries `deny_unknown_fields`, so a wrong field count or a stray payload
//! field fails destructuring before any digest work happens.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use paramseal_core::VerifyError;

/// Single revealed parameter with an auxiliary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reveal1<P1, R> {
    /// The revealed parameter value.
    pub first: P1,
    /// Auxiliary payload passed through to the business function.
    pub payload: R,
}

/// Two revealed parameters with an auxiliary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reveal2<P1, P2, R> {
    pub first: P1,
    pub second: P2,
    pub payload: R,
}

/// Three revealed parameters with an auxiliary payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Reveal3<P1, P2, P3, R> {
    pub first: P1,
    pub second: P2,
    pub third: P3,
    pub payload: R,
}

/// Single revealed parameter, no payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bare1<P1> {
    /// The revealed parameter value.
    pub first: P1,
}

/// Two revealed parameters, no payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bare2<P1, P2> {
    pub first: P1,
    pub second: P2,
}

/// Three revealed parameters, no payload field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bare3<P1, P2, P3> {
    pub first: P1,
    pub second: P2,
    pub third: P3,
}

/// Destructure an untrusted decoded value into a typed reveal shape.
///
/// # Errors
///
/// Returns [`VerifyError::MalformedInput`] when the value does not have the
/// expected shape: wrong field count, unknown fields, or field values of the
/// wrong type. The failure is surfaced before any digest computation.
pub fn decode_input<T>(value: serde_json::Value) -> Result<T, VerifyError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(value).map_err(|e| VerifyError::MalformedInput(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use paramseal_core::commit;
    use serde_json::json;

    #[test]
    fn decode_reveal1() {
        let input: Reveal1<u64, bool> =
            decode_input(json!({"first": 42, "payload": true})).unwrap();
        assert_eq!(input.first, 42);
        assert!(input.payload);
    }

    #[test]
    fn decode_reveal3() {
        let input: Reveal3<u64, String, Vec<u8>, bool> = decode_input(json!({
            "first": 1,
            "second": "two",
            "third": [3],
            "payload": false,
        }))
        .unwrap();
        assert_eq!(input.second, "two");
        assert_eq!(input.third, vec![3]);
    }

    #[test]
    fn decode_bare2() {
        let input: Bare2<u64, u64> = decode_input(json!({"first": 1, "second": 2})).unwrap();
        assert_eq!((input.first, input.second), (1, 2));
    }

    #[test]
    fn unknown_field_is_malformed() {
        let result: Result<Reveal1<u64, bool>, _> =
            decode_input(json!({"first": 42, "payload": true, "extra": 1}));
        assert!(matches!(result, Err(VerifyError::MalformedInput(_))));
    }

    #[test]
    fn missing_field_is_malformed() {
        let result: Result<Reveal2<u64, u64, bool>, _> =
            decode_input(json!({"first": 1, "payload": true}));
        assert!(matches!(result, Err(VerifyError::MalformedInput(_))));
    }

    #[test]
    fn bare_shape_rejects_payload_field() {
        let result: Result<Bare1<u64>, _> =
            decode_input(json!({"first": 42, "payload": true}));
        assert!(matches!(result, Err(VerifyError::MalformedInput(_))));
    }

    #[test]
    fn wrong_value_type_is_malformed() {
        let result: Result<Reveal1<u64, bool>, _> =
            decode_input(json!({"first": "not a number", "payload": true}));
        assert!(matches!(result, Err(VerifyError::MalformedInput(_))));
    }

    #[test]
    fn digest_fields_decode_from_hex() {
        let d = commit(b"prehashed");
        let input: Bare1<paramseal_core::Digest> =
            decode_input(json!({"first": d.to_hex()})).unwrap();
        assert_eq!(input.first, d);
    }

    #[test]
    fn digest_field_with_multibyte_text_is_malformed() {
        // Valid byte length for a digest field, invalid character content.
        let text = format!("€{}", "0".repeat(61));
        let result: Result<Bare1<paramseal_core::Digest>, _> =
            decode_input(json!({"first": text}));
        assert!(matches!(result, Err(VerifyError::MalformedInput(_))));
    }

    #[test]
    fn reveal_shapes_roundtrip_through_json() {
        let input = Reveal2 {
            first: 1u64,
            second: "s".to_string(),
            payload: vec![1u8, 2],
        };
        let value = serde_json::to_value(&input).unwrap();
        let back: Reveal2<u64, String, Vec<u8>> = decode_input(value).unwrap();
        assert_eq!(back, input);
    }
}
