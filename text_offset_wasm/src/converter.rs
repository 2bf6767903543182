//! Conversion utilities for the WASM/JS boundary.
//!
//! This module is stateless and centralizes:
//! - Input conversion (options JSON).
//! - UTF-16 → byte/char bridging for the reported offset.
//! - DTO and error conversion (`text_offset` types → `dto::v1::*` views, `js_sys::Error`).

use js_sys::Error as JsError;
use text_offset::{Location, OffsetError};
use wasm_bindgen::prelude::JsValue;

use crate::dto::v1::{LocateResult, OffsetOptions, OffsetUnit};
use crate::offsets::{utf16_offset_to_byte, utf16_offset_to_char};

pub struct Converter;

impl Converter {
    /// Parse the JS-provided options JSON. Empty input means defaults.
    pub fn parse_options(options_json: &str) -> Result<OffsetOptions, JsValue> {
        decode_options(options_json)
            .map_err(|_| JsValue::from(JsError::new("Invalid options JSON")))
    }

    /// Re-express a UTF-16 offset into `text` in `unit`.
    pub fn offset_in_unit(text: &str, utf16: usize, unit: OffsetUnit) -> usize {
        match unit {
            OffsetUnit::Utf16 => utf16,
            OffsetUnit::Utf8 => utf16_offset_to_byte(text, utf16),
            OffsetUnit::Char => utf16_offset_to_char(text, utf16),
        }
    }

    /// `text` is the container's text content; it is only read for non-UTF-16 units.
    pub fn locate_result(location: Location, unit: OffsetUnit, text: &str) -> LocateResult {
        let offset = Self::offset_in_unit(text, location.offset, unit);
        LocateResult {
            offset: Self::offset_to_js(offset),
            found: location.found,
            unit,
        }
    }

    pub fn offset_to_js(offset: usize) -> u32 {
        u32::try_from(offset).unwrap_or(u32::MAX)
    }

    pub fn error(err: &OffsetError) -> JsValue {
        JsValue::from(JsError::new(&err.to_string()))
    }
}

pub(crate) fn decode_options(options_json: &str) -> Result<OffsetOptions, serde_json::Error> {
    let trimmed = options_json.trim();
    if trimmed.is_empty() {
        return Ok(OffsetOptions::default());
    }
    serde_json::from_str(trimmed)
}
