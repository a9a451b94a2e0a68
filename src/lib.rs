//! Purpose: Encoding layer for the Porkbun domain-registrar JSON API.
//! Exports: `api` (request envelopes, status envelopes, domain decoding, errors), `logging`.
//! Role: Library used by HTTP transports; performs no I/O of its own.
//! Invariants: Encoders and decoders are pure and safe to call from any thread.
//! Invariants: Internal modules prefer explicit inputs/outputs over hidden state.
pub mod api;
pub mod core;
mod json;
pub mod logging;
