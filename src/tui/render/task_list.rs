use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::{checkbox, priority_marker, spans_width};

/// Render the task list behind the form
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;

    if app.tasks().is_empty() {
        let hint = Line::from(Span::styled(
            " No tasks yet. Press a to add one.",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(Paragraph::new(hint).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor row on screen
    if height > 0 {
        if app.cursor < app.scroll_offset {
            app.scroll_offset = app.cursor;
        } else if app.cursor >= app.scroll_offset + height {
            app.scroll_offset = app.cursor + 1 - height;
        }
    }

    let theme = &app.theme;
    let mut lines: Vec<Line> = Vec::new();
    for (idx, task) in app
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_cursor = idx == app.cursor;
        let row_bg = if is_cursor { theme.selection_bg } else { bg };
        let text_fg = if task.completed { theme.dim } else { theme.text };

        let mut spans = vec![
            Span::styled(
                if is_cursor { "\u{258E}" } else { " " },
                Style::default().fg(theme.highlight).bg(row_bg),
            ),
            Span::styled(
                format!("{} ", checkbox(task.completed)),
                Style::default().fg(text_fg).bg(row_bg),
            ),
            Span::styled(
                format!("{} ", priority_marker(task.priority)),
                Style::default()
                    .fg(theme.priority_color(task.priority))
                    .bg(row_bg),
            ),
        ];

        let due = task
            .due_date_str()
            .map(|d| format!(" {} ", d))
            .unwrap_or_default();
        let used = spans_width(&spans) + due.len();
        let title_width = width.saturating_sub(used);
        let mut title_style = Style::default().fg(text_fg).bg(row_bg);
        if task.completed {
            title_style = title_style.add_modifier(Modifier::CROSSED_OUT);
        } else if is_cursor {
            title_style = title_style.fg(theme.text_bright);
        }
        let title = unicode::truncate_to_width(&task.title, title_width);
        let pad = title_width.saturating_sub(unicode::display_width(&title));
        spans.push(Span::styled(title, title_style));
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(row_bg)));
        if !due.is_empty() {
            spans.push(Span::styled(due, Style::default().fg(theme.dim).bg(row_bg)));
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}
