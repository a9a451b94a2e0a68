//! Purpose: Decode registrar "quasi-boolean" fields into real booleans.
//! Exports: `decode_quasi_bool`.
//! Role: One routine shared by every on/off field so errors read identically.
//! Invariants: Integer form is tried before string form.
//! Invariants: Only 0 and 1 are accepted; anything else names the field.

use crate::core::error::{Error, ErrorKind};
use serde_json::Value;

/// Decodes `0`, `1`, `"0"`, or `"1"` as a boolean.
///
/// The value is first read as a JSON integer. If that fails it is read as a
/// string and parsed as a signed integer. Fractional numbers, `null`, and
/// containers are rejected. A bare `-0` arrives from serde_json as a float and
/// is rejected with them.
pub fn decode_quasi_bool(field: &str, raw: &Value) -> Result<bool, Error> {
    let number = match raw.as_i64() {
        Some(number) => number,
        None => match raw {
            Value::String(text) => text
                .parse::<i64>()
                .map_err(|err| not_a_boolean(field).with_source(err))?,
            _ => return Err(not_a_boolean(field)),
        },
    };

    match number {
        0 => Ok(false),
        1 => Ok(true),
        _ => Err(not_a_boolean(field)),
    }
}

fn not_a_boolean(field: &str) -> Error {
    Error::new(ErrorKind::NotBoolean)
        .with_message(format!("{field} response not a boolean"))
        .with_field(field)
}
