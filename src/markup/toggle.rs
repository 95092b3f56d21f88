use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::selection::Selection;

/// A line that already starts with a list number, e.g. `12. item`.
/// Tested against the trimmed line.
static NUMBERED_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.\s").expect("numbered line pattern"));

/// The prefix removed when un-numbering a line.
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.\s*").expect("number prefix pattern"));

/// An inline style that can be toggled on a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StyleOp {
    /// `**text**`
    Bold,
    /// `*text*`
    Italic,
    /// `<u>text</u>`
    Underline,
    /// `1. line` prefixes on every non-blank line
    NumberedList,
}

impl StyleOp {
    pub const ALL: [StyleOp; 4] = [
        StyleOp::Bold,
        StyleOp::Italic,
        StyleOp::Underline,
        StyleOp::NumberedList,
    ];

    /// Opening and closing markers for the wrapping styles.
    /// `None` for the line-based numbered list.
    pub fn markers(self) -> Option<(&'static str, &'static str)> {
        match self {
            StyleOp::Bold => Some(("**", "**")),
            StyleOp::Italic => Some(("*", "*")),
            StyleOp::Underline => Some(("<u>", "</u>")),
            StyleOp::NumberedList => None,
        }
    }

    /// The letter used with Ctrl/Cmd to trigger this style
    pub fn shortcut(self) -> char {
        match self {
            StyleOp::Bold => 'b',
            StyleOp::Italic => 'i',
            StyleOp::Underline => 'u',
            StyleOp::NumberedList => 'h',
        }
    }

    pub fn from_shortcut(c: char) -> Option<StyleOp> {
        StyleOp::ALL
            .into_iter()
            .find(|op| op.shortcut() == c.to_ascii_lowercase())
    }

    pub fn name(self) -> &'static str {
        match self {
            StyleOp::Bold => "bold",
            StyleOp::Italic => "italic",
            StyleOp::Underline => "underline",
            StyleOp::NumberedList => "numbered-list",
        }
    }

    /// Human label, e.g. for key hints
    pub fn label(self) -> &'static str {
        match self {
            StyleOp::Bold => "Bold",
            StyleOp::Italic => "Italic",
            StyleOp::Underline => "Underline",
            StyleOp::NumberedList => "Numbered List",
        }
    }
}

impl fmt::Display for StyleOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bold" | "b" => Ok(StyleOp::Bold),
            "italic" | "i" => Ok(StyleOp::Italic),
            "underline" | "u" => Ok(StyleOp::Underline),
            "numbered-list" | "numbered" | "list" | "h" => Ok(StyleOp::NumberedList),
            other => Err(format!(
                "unknown style '{}' (expected bold, italic, underline or numbered-list)",
                other
            )),
        }
    }
}

/// What a toggle did to the selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleDirection {
    /// Markers were added
    Applied,
    /// Existing markers were removed
    Removed,
    /// Nothing was selected
    Unchanged,
}

/// Result of toggling a style: the whole new buffer plus the selection
/// that now covers the (re)styled text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleEdit {
    pub text: String,
    pub selection: Selection,
    pub direction: ToggleDirection,
}

/// Toggle `op` on the selected part of `text`.
///
/// The decision to add or remove is made from the selected text alone: if it
/// already carries the style's markers at its boundaries they are stripped,
/// otherwise they are added. The returned selection keeps its start and ends
/// after the transformed text.
///
/// An empty selection returns the input untouched. Out-of-range offsets are
/// clamped to the buffer and never panic.
pub fn apply_style(text: &str, selection: Selection, op: StyleOp) -> StyleEdit {
    let sel = selection.clamp_to(text);
    if sel.is_empty() {
        return StyleEdit {
            text: text.to_string(),
            selection,
            direction: ToggleDirection::Unchanged,
        };
    }

    let selected = sel.slice(text);
    let (replacement, direction) = match op.markers() {
        Some((open, close)) => toggle_wrapped(selected, open, close, op),
        None => toggle_numbered_list(selected),
    };

    let mut out = String::with_capacity(text.len() - selected.len() + replacement.len());
    out.push_str(&text[..sel.start]);
    out.push_str(&replacement);
    out.push_str(&text[sel.end..]);

    StyleEdit {
        text: out,
        selection: Selection::new(sel.start, sel.start + replacement.len()),
        direction,
    }
}

/// Whether `selected` already carries the markers of a wrapping style.
pub fn is_wrapped(selected: &str, op: StyleOp) -> bool {
    let Some((open, close)) = op.markers() else {
        return false;
    };
    if selected.len() < open.len() + close.len() {
        return false;
    }
    if !selected.starts_with(open) || !selected.ends_with(close) {
        return false;
    }
    // A single `*` must not match the opening of `**bold**`
    if op == StyleOp::Italic && selected.starts_with("**") {
        return false;
    }
    true
}

fn toggle_wrapped(
    selected: &str,
    open: &str,
    close: &str,
    op: StyleOp,
) -> (String, ToggleDirection) {
    if is_wrapped(selected, op) {
        let inner = &selected[open.len()..selected.len() - close.len()];
        (inner.to_string(), ToggleDirection::Removed)
    } else {
        (format!("{open}{selected}{close}"), ToggleDirection::Applied)
    }
}

/// Whether any line of `selected` already starts with a list number.
pub fn is_numbered(selected: &str) -> bool {
    selected
        .split('\n')
        .any(|line| NUMBERED_LINE.is_match(line.trim()))
}

fn toggle_numbered_list(selected: &str) -> (String, ToggleDirection) {
    let lines = selected.split('\n');

    if is_numbered(selected) {
        // Strips from every line, numbered or not
        let stripped: Vec<String> = lines
            .map(|line| NUMBER_PREFIX.replace(line, "").into_owned())
            .collect();
        return (stripped.join("\n"), ToggleDirection::Removed);
    }

    let mut counter = 0usize;
    let numbered: Vec<String> = lines
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                counter += 1;
                format!("{counter}. {line}")
            }
        })
        .collect();
    (numbered.join("\n"), ToggleDirection::Applied)
}
