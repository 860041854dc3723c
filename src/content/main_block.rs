use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resolve;

/// A homepage content block. Order is backend insertion order and is
/// never re-sorted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MainBlock {
    pub mainheading: String,
    pub para: String,
    pub icon_url: String,
}

/// Flatten a raw main block; the header icon is resolved at its
/// `small` size variant.
pub fn normalize_main_block(raw: &Value) -> MainBlock {
    MainBlock {
        mainheading: resolve::text(raw, "mainheading"),
        para: resolve::text(raw, "para"),
        icon_url: resolve::format_url(raw, "headericon", "small"),
    }
}
