//! Purpose: Structured error model shared by the encoder, decoder, and envelopes.
//! Exports: `Error`, `ErrorKind`.
//! Role: Single error type; kinds split encode failures from decode failures.
//! Invariants: Decode errors name the field or stage that failed.
//! Invariants: API status failures and server (HTTP) failures use distinct kinds.

use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    /// A request value could not be represented as a flat JSON object.
    Encode,
    /// Response bytes were not a well-formed JSON envelope.
    MalformedJson,
    MissingField,
    InvalidField,
    NotBoolean,
    InvalidDate,
    /// The response status envelope reported a failure.
    Api,
    /// The server answered with a transport-level error body.
    Server,
}

impl ErrorKind {
    pub fn is_encode(self) -> bool {
        matches!(self, ErrorKind::Encode)
    }

    pub fn is_decode(self) -> bool {
        matches!(
            self,
            ErrorKind::MalformedJson
                | ErrorKind::MissingField
                | ErrorKind::InvalidField
                | ErrorKind::NotBoolean
                | ErrorKind::InvalidDate
        )
    }
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    field: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            field: None,
            source: None,
        }
    }

    pub(crate) fn missing_field(field: &str) -> Self {
        Self::new(ErrorKind::MissingField)
            .with_message(format!("missing required field `{field}`"))
            .with_field(field)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}
