use serde::Serialize;

use crate::markup::StyleOp;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct StyleJson {
    pub name: &'static str,
    pub label: &'static str,
    pub shortcut: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<&'static str>,
}

pub fn style_to_json(op: StyleOp) -> StyleJson {
    let markers = op.markers();
    StyleJson {
        name: op.name(),
        label: op.label(),
        shortcut: format!("Ctrl+{}", op.shortcut().to_ascii_uppercase()),
        open: markers.map(|(open, _)| open),
        close: markers.map(|(_, close)| close),
    }
}

// ---------------------------------------------------------------------------
// Text formatting
// ---------------------------------------------------------------------------

/// One line of `tp styles`, e.g. `bold           Ctrl+B  **…**`
pub fn format_style_line(op: StyleOp) -> String {
    let markers = match op.markers() {
        Some((open, close)) => format!("{}\u{2026}{}", open, close),
        None => "1. per line".to_string(),
    };
    format!(
        "{:<14} Ctrl+{}  {}",
        op.name(),
        op.shortcut().to_ascii_uppercase(),
        markers
    )
}
