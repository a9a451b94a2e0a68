//! Purpose: Internal JSON parsing boundary shared by the decoders.
//! Exports: `parse` module with decode helpers used by API internals.
//! Role: Single seam for parser error mapping so callsites avoid ad hoc decode logic.
//! Invariants: Response-byte decoding goes through this module.
//! Invariants: Helper APIs stay small and deterministic (no hidden global state).

pub(crate) mod parse;
