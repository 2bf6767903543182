//! WASM exports for locating the selection start inside a container element.
//!
//! Offsets cross the JS boundary as UTF-16 code units unless the caller asks for
//! another unit.

mod converter;
mod dom;
pub mod dto;
pub mod offsets;

use text_offset::{DocumentTree, Location, locate_in_container};
use wasm_bindgen::prelude::*;

use crate::dto::v1::OffsetUnit;

pub use converter::Converter;
pub use dom::{LiveDom, LiveSelection};

/// Offset of the current selection start relative to the text of `containerId`.
///
/// Returns 0 when nothing is selected. Throws when the container does not exist.
#[wasm_bindgen(js_name = getAbsoluteOffsetInContainer)]
pub fn get_absolute_offset_in_container(container_id: &str) -> Result<u32, JsValue> {
    let dom = LiveDom::current();
    let location = locate(&dom, &LiveSelection::current(), container_id)?;
    Ok(Converter::offset_to_js(location.offset))
}

/// Like `getAbsoluteOffsetInContainer`, also reporting whether the start node was found.
///
/// `optionsJson` is `{"unit": "utf16" | "utf8" | "char"}`; empty means UTF-16.
#[wasm_bindgen(js_name = locateSelectionStart)]
pub fn locate_selection_start(
    container_id: &str,
    options_json: Option<String>,
) -> Result<JsValue, JsValue> {
    let options = Converter::parse_options(options_json.as_deref().unwrap_or(""))?;
    let dom = LiveDom::current();
    let location = locate(&dom, &LiveSelection::current(), container_id)?;

    let text = match options.unit {
        OffsetUnit::Utf16 => String::new(),
        OffsetUnit::Utf8 | OffsetUnit::Char => dom
            .element_by_id(container_id)
            .map(|container| dom.text_content(&container))
            .unwrap_or_default(),
    };

    let result = Converter::locate_result(location, options.unit, &text);
    serde_wasm_bindgen::to_value(&result).map_err(JsValue::from)
}

fn locate(
    dom: &LiveDom,
    selection: &LiveSelection,
    container_id: &str,
) -> Result<Location, JsValue> {
    locate_in_container(dom, selection, container_id).map_err(|err| Converter::error(&err))
}
