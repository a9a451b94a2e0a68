//! Purpose: Define the stable public Rust API boundary for the registrar codec.
//! Exports: Credential, request, status, domain, and response types plus their codecs.
//! Role: Public, additive-only surface; hides internal parsing helpers.
//! Invariants: This module is the only public path to encode/decode operations.
//! Invariants: Every operation is a pure function of its inputs; nothing is retained.

mod credentials;
mod domain;
mod request;
mod responses;
mod status;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::timestamp::DATE_FORMAT;
pub use credentials::Credentials;
pub use domain::{Domain, DomainLabel, decode_domain, decode_domain_list};
pub use request::{encode_request, merge_objects};
pub use responses::{
    CreateResponse, NameServersResponse, PingResponse, Record, RetrieveResponse, SslBundle,
    SslBundleResponse,
};
pub use status::{STATUS_SUCCESS, ServerError, Status, decode_response};

pub type ApiResult<T> = Result<T, Error>;
