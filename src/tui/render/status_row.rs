use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;
use crate::tui::modal::FormField;

/// Key hints shown while browsing the list
const LIST_HINTS: &str = "a add  e edit  space done  d delete  ? hints  q quit";

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = if let Some(ref msg) = app.status_message {
        Line::from(Span::styled(
            format!(" {}", msg),
            Style::default().fg(app.theme.yellow).bg(bg),
        ))
    } else if app.show_key_hints {
        let hint = key_hints(app);
        let hint_width = hint.chars().count();
        let mut spans = Vec::new();
        if hint_width < width {
            spans.push(Span::styled(
                " ".repeat(width - hint_width - 1),
                Style::default().bg(bg),
            ));
        }
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        Line::from(spans)
    } else {
        Line::from(Span::styled(" ".repeat(width), Style::default().bg(bg)))
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

fn key_hints(app: &App) -> String {
    let Some(modal) = app.modal.as_ref() else {
        return LIST_HINTS.to_string();
    };
    let field = match modal.focus {
        FormField::Description => "^B/^I/^U/^H format",
        FormField::Priority => "\u{2190}\u{2192} change",
        FormField::DueDate => "\u{2190}\u{2192} day  \u{2191}\u{2193} week  t today",
        FormField::Completed => "space toggle",
        FormField::Title | FormField::Submit => "enter submit",
    };
    format!("{}  tab next  ^S save  esc close", field)
}
