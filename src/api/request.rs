//! Purpose: Encode authenticated request bodies as one flat JSON object.
//! Exports: `encode_request`, `merge_objects`.
//! Role: Request-side envelope; the transport sends the returned bytes as-is.
//! Invariants: Output is never nested; credential and payload keys share one object.
//! Invariants: On key collision the payload value wins, in the credential key's position.
//! Notes: Merging happens on `serde_json::Map`, never on partially serialized text.

use super::{ApiResult, Credentials};
use crate::core::error::{Error, ErrorKind};
use serde::Serialize;
use serde_json::{Map, Value};

/// Builds the body for an authenticated call.
///
/// A missing payload, or one that serializes to `null` or `{}`, yields the
/// credential object alone. Payloads that serialize to anything other than an
/// object cannot be flattened and fail with [`ErrorKind::Encode`].
pub fn encode_request<T>(credentials: &Credentials, payload: Option<&T>) -> ApiResult<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let base = match to_object(credentials, "credentials")? {
        Some(base) => base,
        None => {
            return Err(Error::new(ErrorKind::Encode)
                .with_message("credentials did not encode to a JSON object"));
        }
    };

    let merged = match payload {
        Some(payload) => match to_object(payload, "payload")? {
            Some(overlay) if !overlay.is_empty() => merge_objects(base, overlay),
            _ => base,
        },
        None => base,
    };

    serde_json::to_vec(&Value::Object(merged)).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message("failed to encode request json")
            .with_source(err)
    })
}

/// Merges `overlay` into `base`; overlay values replace base values on collision.
pub fn merge_objects(
    mut base: Map<String, Value>,
    overlay: Map<String, Value>,
) -> Map<String, Value> {
    for (key, value) in overlay {
        if base.contains_key(&key) {
            tracing::warn!(key = %key, "request payload overrides credential key");
        }
        base.insert(key, value);
    }
    base
}

fn to_object<T>(value: &T, side: &str) -> ApiResult<Option<Map<String, Value>>>
where
    T: Serialize + ?Sized,
{
    let value = serde_json::to_value(value).map_err(|err| {
        Error::new(ErrorKind::Encode)
            .with_message(format!("{side} is not representable as JSON"))
            .with_source(err)
    })?;
    match value {
        Value::Object(map) => Ok(Some(map)),
        Value::Null => Ok(None),
        other => Err(Error::new(ErrorKind::Encode).with_message(format!(
            "{side} must encode to a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_request, merge_objects};
    use crate::api::Credentials;
    use crate::core::error::ErrorKind;
    use serde::Serialize;
    use serde_json::{Map, Value, json};

    fn credentials() -> Credentials {
        Credentials::new("pk1", "sk1")
    }

    fn decode(bytes: &[u8]) -> Map<String, Value> {
        serde_json::from_slice(bytes).expect("object")
    }

    #[test]
    fn absent_payload_yields_credentials_only() {
        let bytes = encode_request::<Value>(&credentials(), None).expect("encode");
        assert_eq!(
            Value::Object(decode(&bytes)),
            json!({"apikey": "pk1", "secretapikey": "sk1"})
        );
    }

    #[test]
    fn null_unit_and_empty_payloads_are_ignored() {
        let expected = encode_request::<Value>(&credentials(), None).expect("base");
        let null = encode_request(&credentials(), Some(&Value::Null)).expect("null");
        let unit = encode_request(&credentials(), Some(&())).expect("unit");
        let empty = encode_request(&credentials(), Some(&json!({}))).expect("empty");
        assert_eq!(null, expected);
        assert_eq!(unit, expected);
        assert_eq!(empty, expected);
    }

    #[test]
    fn struct_payload_is_flattened() {
        #[derive(Serialize)]
        struct CreateRecord<'a> {
            name: &'a str,
            #[serde(rename = "type")]
            record_type: &'a str,
            content: &'a str,
        }

        let payload = CreateRecord {
            name: "www",
            record_type: "A",
            content: "1.1.1.1",
        };
        let bytes = encode_request(&credentials(), Some(&payload)).expect("encode");
        let text = std::str::from_utf8(&bytes).expect("utf8");
        assert_eq!(
            text,
            r#"{"apikey":"pk1","secretapikey":"sk1","name":"www","type":"A","content":"1.1.1.1"}"#
        );
    }

    #[test]
    fn payload_overrides_colliding_credential_key() {
        let payload = json!({"apikey": "override", "ttl": "600"});
        let bytes = encode_request(&credentials(), Some(&payload)).expect("encode");
        let keys: Vec<_> = decode(&bytes).into_iter().collect();
        assert_eq!(
            keys,
            vec![
                ("apikey".to_string(), json!("override")),
                ("secretapikey".to_string(), json!("sk1")),
                ("ttl".to_string(), json!("600")),
            ]
        );
    }

    #[test]
    fn non_object_payload_is_an_encode_error() {
        for payload in [json!([1, 2]), json!(7), json!("text"), json!(true)] {
            let err = encode_request(&credentials(), Some(&payload)).expect_err("reject");
            assert_eq!(err.kind(), ErrorKind::Encode, "{payload}");
        }
    }

    #[test]
    fn unrepresentable_payload_is_an_encode_error() {
        let mut payload = std::collections::HashMap::new();
        payload.insert(vec![1u8], "value");
        let err = encode_request(&credentials(), Some(&payload)).expect_err("reject");
        assert_eq!(err.kind(), ErrorKind::Encode);
    }

    #[test]
    fn merge_keeps_base_order() {
        let base = json!({"b": 1, "a": 2});
        let overlay = json!({"c": 3, "b": 4});
        let (Value::Object(base), Value::Object(overlay)) = (base, overlay) else {
            panic!("objects");
        };
        let merged = merge_objects(base, overlay);
        let keys: Vec<_> = merged.keys().cloned().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(merged.get("b"), Some(&json!(4)));
    }
}
