// Core modules implementing error modeling and per-field wire decoding.
pub mod error;
pub mod quasi_bool;
pub mod timestamp;
