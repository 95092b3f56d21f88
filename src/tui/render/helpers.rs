use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::markup::Selection;
use crate::model::task::Priority;
use crate::util::unicode;

/// Checkbox shown before a task title
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Short priority marker for list rows
pub(super) fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "!  ",
        Priority::Medium => "!! ",
        Priority::High => "!!!",
    }
}

/// Split one line of a text field into spans, styling the part covered by
/// `selection`. `line_start` is the byte offset of `line` in the full text.
pub(super) fn selection_spans(
    line: &str,
    line_start: usize,
    selection: Option<Selection>,
    base: Style,
    selected: Style,
) -> Vec<Span<'static>> {
    let line_end = line_start + line.len();
    let Some(sel) = selection.filter(|s| !s.is_empty()) else {
        return vec![Span::styled(line.to_string(), base)];
    };
    if sel.end <= line_start || sel.start >= line_end {
        return vec![Span::styled(line.to_string(), base)];
    }
    let from = sel.start.max(line_start) - line_start;
    let to = sel.end.min(line_end) - line_start;

    let mut spans = Vec::with_capacity(3);
    if from > 0 {
        spans.push(Span::styled(line[..from].to_string(), base));
    }
    spans.push(Span::styled(line[from..to].to_string(), selected));
    if to < line.len() {
        spans.push(Span::styled(line[to..].to_string(), base));
    }
    spans
}

/// Compute total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum()
}

pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}
