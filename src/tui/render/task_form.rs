use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::markup::StyleOp;
use crate::model::task::Priority;
use crate::tui::app::App;
use crate::tui::modal::{FormField, ModalMode, ModalState};
use crate::tui::text_field::FieldCursor;
use crate::tui::theme::Theme;
use crate::util::unicode;

use super::helpers::{centered_rect_fixed, selection_spans};

const FORM_WIDTH: u16 = 60;
/// Visible rows of the description field
pub const DESCRIPTION_ROWS: u16 = 4;

/// Placeholder of the empty description, listing the formatting shortcuts
pub fn description_placeholder() -> String {
    let keys: Vec<String> = StyleOp::ALL
        .iter()
        .map(|op| format!("Ctrl+{}: {}", op.shortcut().to_ascii_uppercase(), op.label()))
        .collect();
    format!("Task Description ({})", keys.join(", "))
}

/// Render the task form centered over `area` and register its region for
/// outside-click detection.
pub fn render_task_form(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    let theme = &app.theme;
    let bg = theme.background;

    // borders + title(2) + gap + description label + rows + gap
    // + priority, due, completed + gap + submit
    let height = 2 + 2 + 1 + 1 + DESCRIPTION_ROWS + 1 + 3 + 1 + 1;
    let popup = centered_rect_fixed(FORM_WIDTH.min(area.width.saturating_sub(2)), height, area);
    app.outside.register(popup);
    frame.render_widget(Clear, popup);

    let heading = match modal.mode {
        ModalMode::Add => " New Task ",
        ModalMode::Edit => " Edit Task ",
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            heading,
            Style::default()
                .fg(theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(theme.highlight).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup);
    frame.render_widget(block, popup);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                // title label
            Constraint::Length(1),                // title input
            Constraint::Length(1),                // gap
            Constraint::Length(1),                // description label
            Constraint::Length(DESCRIPTION_ROWS), // description input
            Constraint::Length(1),                // gap
            Constraint::Length(1),                // priority
            Constraint::Length(1),                // due date
            Constraint::Length(1),                // completed
            Constraint::Length(1),                // gap
            Constraint::Length(1),                // submit
        ])
        .split(inner);

    render_label(frame, theme, modal, FormField::Title, rows[0]);
    render_title_input(frame, theme, modal, rows[1]);
    render_label(frame, theme, modal, FormField::Description, rows[3]);
    render_description_input(frame, theme, modal, rows[4]);

    let priority = modal.draft.priority;
    render_choice(
        frame,
        theme,
        modal,
        FormField::Priority,
        Span::styled(
            priority_choice_label(priority),
            Style::default().fg(theme.priority_color(priority)),
        ),
        rows[6],
    );
    let due = modal
        .draft
        .due_date_str()
        .unwrap_or_else(|| "\u{2014}".to_string());
    render_choice(
        frame,
        theme,
        modal,
        FormField::DueDate,
        Span::styled(due, Style::default().fg(theme.text_bright)),
        rows[7],
    );
    let completed = if modal.draft.completed { "Yes" } else { "No" };
    render_choice(
        frame,
        theme,
        modal,
        FormField::Completed,
        Span::styled(completed, Style::default().fg(theme.text_bright)),
        rows[8],
    );
    render_submit(frame, theme, modal, rows[10]);
}

fn label_style(theme: &Theme, focused: bool) -> Style {
    let style = Style::default().bg(theme.background);
    if focused {
        style.fg(theme.highlight).add_modifier(Modifier::BOLD)
    } else {
        style.fg(theme.text)
    }
}

fn field_bg(theme: &Theme, focused: bool) -> Style {
    if focused {
        Style::default().bg(theme.selection_bg)
    } else {
        Style::default().bg(theme.field_bg)
    }
}

fn render_label(frame: &mut Frame, theme: &Theme, modal: &ModalState, field: FormField, area: Rect) {
    let label = Span::styled(field.label(), label_style(theme, modal.focus == field));
    frame.render_widget(Paragraph::new(Line::from(label)), area);
}

fn render_title_input(frame: &mut Frame, theme: &Theme, modal: &ModalState, area: Rect) {
    let focused = modal.focus == FormField::Title;
    let text = &modal.draft.title;
    let bg = field_bg(theme, focused);

    if text.is_empty() {
        let placeholder = Span::styled("Task Title", bg.fg(theme.dim));
        frame.render_widget(Paragraph::new(Line::from(placeholder)).style(bg), area);
    } else {
        let col = unicode::display_width(&text[..modal.title_cursor.cursor.min(text.len())]);
        let h_scroll = if focused {
            horizontal_scroll(col, area.width)
        } else {
            0
        };
        let line = text_line(theme, text, 0, &modal.title_cursor, focused);
        frame.render_widget(
            Paragraph::new(line).style(bg).scroll((0, h_scroll)),
            area,
        );
        if focused {
            frame.set_cursor_position((area.x + (col - h_scroll as usize) as u16, area.y));
        }
        return;
    }
    if focused {
        frame.set_cursor_position((area.x, area.y));
    }
}

/// One line of a text field with the selection highlighted while focused
fn text_line(
    theme: &Theme,
    line: &str,
    line_start: usize,
    fc: &FieldCursor,
    focused: bool,
) -> Line<'static> {
    let base = Style::default().fg(theme.text_bright);
    let selected = Style::default()
        .fg(theme.background)
        .bg(theme.text_selection_bg);
    let selection = focused.then(|| fc.selection());
    Line::from(selection_spans(line, line_start, selection, base, selected))
}

/// Columns to scroll so the caret at `col` stays inside `width`
fn horizontal_scroll(col: usize, width: u16) -> u16 {
    let width = width.max(1) as usize;
    col.saturating_sub(width - 1) as u16
}

fn render_description_input(frame: &mut Frame, theme: &Theme, modal: &mut ModalState, area: Rect) {
    let focused = modal.focus == FormField::Description;
    let bg = field_bg(theme, focused);

    if modal.draft.description.is_empty() {
        let placeholder = Paragraph::new(description_placeholder())
            .style(bg.fg(theme.dim))
            .wrap(Wrap { trim: true });
        frame.render_widget(placeholder, area);
        modal.description_scroll = 0;
        if focused {
            frame.set_cursor_position((area.x, area.y));
        }
        return;
    }

    let text = &modal.draft.description;
    let cursor = modal.description_cursor.cursor.min(text.len());
    let (cursor_line, cursor_col) = unicode::line_and_col(text, cursor);

    // Keep the caret's line inside the visible rows
    let rows = area.height.max(1) as usize;
    if cursor_line < modal.description_scroll {
        modal.description_scroll = cursor_line;
    } else if cursor_line >= modal.description_scroll + rows {
        modal.description_scroll = cursor_line + 1 - rows;
    }
    let h_scroll = if focused {
        horizontal_scroll(cursor_col, area.width)
    } else {
        0
    };

    let mut lines = Vec::new();
    let mut offset = 0;
    for line in text.split('\n') {
        lines.push(text_line(theme, line, offset, &modal.description_cursor, focused));
        offset += line.len() + 1;
    }

    let paragraph = Paragraph::new(lines)
        .style(bg)
        .scroll((modal.description_scroll as u16, h_scroll));
    frame.render_widget(paragraph, area);

    if focused {
        let x = area.x + (cursor_col - h_scroll as usize) as u16;
        let y = area.y + (cursor_line - modal.description_scroll) as u16;
        frame.set_cursor_position((x, y));
    }
}

fn render_choice(
    frame: &mut Frame,
    theme: &Theme,
    modal: &ModalState,
    field: FormField,
    value: Span<'static>,
    area: Rect,
) {
    let focused = modal.focus == field;
    let label_width = 18;
    let label = format!("{:<width$}", field.label(), width = label_width);
    let value_style = field_bg(theme, focused).patch(value.style);
    let line = Line::from(vec![
        Span::styled(label, label_style(theme, focused)),
        Span::styled(format!(" {} ", value.content), value_style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_submit(frame: &mut Frame, theme: &Theme, modal: &ModalState, area: Rect) {
    let focused = modal.focus == FormField::Submit;
    let color = match modal.mode {
        ModalMode::Edit => theme.blue,
        ModalMode::Add => theme.green,
    };
    let mut style = Style::default().fg(theme.background).bg(color);
    if focused {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    let label = format!(" {} ", modal.mode.submit_label());
    let pad = (area.width as usize).saturating_sub(label.len()) / 2;
    let line = Line::from(vec![
        Span::styled(" ".repeat(pad), Style::default().bg(theme.background)),
        Span::styled(label, style),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Priority value as shown in the form selector
pub fn priority_choice_label(priority: Priority) -> String {
    format!("\u{2039} {} \u{203A}", priority.label())
}
