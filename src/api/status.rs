//! Purpose: Model the response-side status envelope and server error bodies.
//! Exports: `Status`, `ServerError`, `STATUS_SUCCESS`, `decode_response`.
//! Role: Detect API-level failure before a typed body is decoded.
//! Invariants: API status failures map to `ErrorKind::Api`; HTTP bodies map to `ErrorKind::Server`.
//! Invariants: A failed status short-circuits; the body type is never decoded.

use super::ApiResult;
use crate::core::error::{Error, ErrorKind};
use crate::json::parse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STATUS_SUCCESS: &str = "SUCCESS";

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Status {
    pub fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }

    pub fn into_result(self) -> ApiResult<()> {
        if self.is_success() {
            return Ok(());
        }
        Err(Error::new(ErrorKind::Api).with_message(self.to_string()))
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.status,
            self.message.as_deref().unwrap_or_default()
        )
    }
}

/// Error body returned alongside a non-2xx HTTP status.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerError {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ServerError {
    pub fn into_error(self) -> Error {
        Error::new(ErrorKind::Server).with_message(self.to_string())
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "status: {} message: {}",
            self.status_code,
            self.message.as_deref().unwrap_or_default()
        )
    }
}

/// Decodes a typed response after checking its status envelope.
pub fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> ApiResult<T> {
    let status: Status = parse::from_slice(bytes, "status envelope")?;
    status.into_result()?;
    parse::from_slice(bytes, std::any::type_name::<T>())
}
