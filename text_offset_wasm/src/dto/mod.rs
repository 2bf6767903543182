//! JS-facing DTO types for `text_offset_wasm`.
//!
//! Offsets are in the unit named by the result, UTF-16 code units by default.
pub mod v1;
