//! Character offset of a selection start inside a container.
//!
//! Pipeline: resolve container → walk subtree in document order → add the partial
//! contribution of the start node.
//! All lengths and offsets are UTF-16 code units, matching what a browser reports for
//! `Text.length` and for a range offset inside a text node.
//! Conversion to UTF-8 byte offsets for Rust strings happens in `text_offset_wasm`.

mod document;
mod error;
mod locate;
mod node;
mod tests;

pub use document::{Document, NodeId, Selection};
pub use error::OffsetError;
pub use locate::{
    Location, locate_from, locate_in_container, offset_in_container, text_length_sum,
};
pub use node::{DocumentTree, NodeContent, RangeStart, SelectionSource};
