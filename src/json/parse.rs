//! Purpose: Provide the internal runtime JSON decode entrypoint for response bytes.
//! Exports: `from_slice`.
//! Role: Parser boundary so callsites avoid ad hoc serde_json error mapping.
//! Invariants: Input buffers are borrowed read-only and never retained.
//! Notes: Field-level failures are mapped by callsites; this layer reports envelope shape only.

use crate::core::error::{Error, ErrorKind};
use serde::de::DeserializeOwned;

pub(crate) fn from_slice<T: DeserializeOwned>(input: &[u8], context: &str) -> Result<T, Error> {
    serde_json::from_slice(input).map_err(|err| {
        Error::new(ErrorKind::MalformedJson)
            .with_message(format!("malformed JSON envelope ({context}): {err}"))
            .with_source(err)
    })
}
