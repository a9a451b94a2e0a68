//! Purpose: Hold the API key pair sent with every authenticated request.
//! Exports: `Credentials`.
//! Role: Caller-supplied configuration; loadable from any serde source.
//! Invariants: Wire keys are `apikey` and `secretapikey`.
//! Invariants: `Debug` output never includes the secret key.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(rename = "apikey")]
    pub api_key: String,
    #[serde(rename = "secretapikey")]
    pub secret_api_key: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret_api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_api_key: secret_api_key.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_api_key", &"<redacted>")
            .finish()
    }
}
