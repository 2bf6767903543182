use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unit an offset is reported in.
#[derive(Serialize, Deserialize, TS, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OffsetUnit {
    /// UTF-16 code units, as the DOM counts them.
    #[default]
    Utf16,
    /// UTF-8 bytes into the container's text content.
    Utf8,
    /// Unicode scalar values.
    Char,
}

/// Per-call options for `locateSelectionStart`.
#[derive(Deserialize, TS, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OffsetOptions {
    pub unit: OffsetUnit,
}

#[derive(Serialize, TS, Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocateResult {
    pub offset: u32,
    /// False when the selection is empty or starts outside the container.
    pub found: bool,
    pub unit: OffsetUnit,
}
