use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::markup::{self, StyleOp, ToggleDirection};
use crate::model::task::FieldUpdate;
use crate::tui::app::App;
use crate::tui::deferred::AfterRender;
use crate::tui::modal::{FormField, ModalState};
use crate::tui::text_field::FieldCursor;

/// Ctrl on most terminals, Cmd (Super) where the terminal reports it
fn is_command(m: KeyModifiers) -> bool {
    m.contains(KeyModifiers::CONTROL) || m.contains(KeyModifiers::SUPER)
}

/// A printable character typed without Ctrl/Alt/Cmd
fn typed_char(key: KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
        {
            Some(c)
        }
        _ => None,
    }
}

/// The formatting style bound to `key` (Ctrl/Cmd + B, I, U or H), if any
pub fn style_shortcut(key: KeyEvent) -> Option<StyleOp> {
    match key.code {
        KeyCode::Char(c) if is_command(key.modifiers) => StyleOp::from_shortcut(c),
        _ => None,
    }
}

/// Edit the title through the draft's field setter
pub(super) fn edit_title(modal: &mut ModalState, f: impl FnOnce(&mut FieldCursor, &mut String)) {
    let mut text = std::mem::take(&mut modal.draft.title);
    f(&mut modal.title_cursor, &mut text);
    modal.draft.set_field(FieldUpdate::Title(text));
}

/// Edit the description through the draft's field setter
pub(super) fn edit_description(
    modal: &mut ModalState,
    f: impl FnOnce(&mut FieldCursor, &mut String),
) {
    let mut text = std::mem::take(&mut modal.draft.description);
    f(&mut modal.description_cursor, &mut text);
    modal.draft.set_field(FieldUpdate::Description(text));
}

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    let focus = modal.focus;

    match (key.modifiers, key.code) {
        // Esc: clear the selection first, otherwise close without saving
        (_, KeyCode::Esc) => {
            let cursor = match focus {
                FormField::Title => Some(&mut modal.title_cursor),
                FormField::Description => Some(&mut modal.description_cursor),
                _ => None,
            };
            if let Some(fc) = cursor
                && fc.has_selection()
            {
                fc.clear_selection();
                return;
            }
            app.close_modal();
        }
        (m, KeyCode::Char('s')) if is_command(m) => app.submit_modal(),
        (_, KeyCode::Tab) => modal.focus = focus.next(),
        (_, KeyCode::BackTab) => modal.focus = focus.prev(),
        _ => match focus {
            FormField::Title => handle_title(app, key),
            FormField::Description => handle_description(app, key),
            FormField::Priority => handle_priority(app, key),
            FormField::DueDate => handle_due_date(app, key),
            FormField::Completed => handle_completed(app, key),
            FormField::Submit => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    app.submit_modal();
                }
            }
        },
    }
}

/// Caret movement shared by both text fields. Returns true if `key` was handled.
fn move_in_field(fc: &mut FieldCursor, text: &str, key: KeyEvent, multiline: bool) -> bool {
    let extend = key.modifiers.contains(KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Left => fc.move_left(text, extend),
        KeyCode::Right => fc.move_right(text, extend),
        KeyCode::Home => fc.move_home(text, extend),
        KeyCode::End => fc.move_end(text, extend),
        KeyCode::Up if multiline => {
            fc.move_up(text, extend);
        }
        KeyCode::Down if multiline => {
            fc.move_down(text, extend);
        }
        KeyCode::Char('a') if is_command(key.modifiers) => fc.select_all(text),
        _ => return false,
    }
    true
}

fn handle_title(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    if move_in_field(&mut modal.title_cursor, &modal.draft.title, key, false) {
        return;
    }
    match key.code {
        // Enter in a single-line input submits the form
        KeyCode::Enter => app.submit_modal(),
        KeyCode::Down => modal.focus = FormField::Title.next(),
        KeyCode::Backspace => edit_title(modal, |fc, buf| fc.backspace(buf)),
        KeyCode::Delete => edit_title(modal, |fc, buf| fc.delete_forward(buf)),
        _ => {
            if let Some(c) = typed_char(key) {
                edit_title(modal, |fc, buf| fc.insert(buf, c.encode_utf8(&mut [0; 4])));
            }
        }
    }
}

fn handle_description(app: &mut App, key: KeyEvent) {
    if let Some(op) = style_shortcut(key) {
        toggle_description_style(app, op);
        return;
    }
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    if move_in_field(
        &mut modal.description_cursor,
        &modal.draft.description,
        key,
        true,
    ) {
        return;
    }
    match key.code {
        KeyCode::Enter => edit_description(modal, |fc, buf| fc.insert(buf, "\n")),
        KeyCode::Backspace => edit_description(modal, |fc, buf| fc.backspace(buf)),
        KeyCode::Delete => edit_description(modal, |fc, buf| fc.delete_forward(buf)),
        _ => {
            if let Some(c) = typed_char(key) {
                edit_description(modal, |fc, buf| fc.insert(buf, c.encode_utf8(&mut [0; 4])));
            }
        }
    }
}

/// Toggle `op` on the description's selection.
///
/// The new text replaces the field value right away; the selection over the
/// restyled text is queued and applied once the new value has been drawn.
/// Without an open form, or with nothing selected, nothing happens.
pub fn toggle_description_style(app: &mut App, op: StyleOp) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    let selection = modal.description_cursor.selection();
    let edit = markup::apply_style(&modal.draft.description, selection, op);
    if edit.direction == ToggleDirection::Unchanged {
        return;
    }
    tracing::debug!(
        style = %op,
        direction = ?edit.direction,
        start = edit.selection.start,
        end = edit.selection.end,
        "toggled description style"
    );
    modal.replace_description(edit.text);
    app.after_render.push(AfterRender::RestoreSelection {
        field: FormField::Description,
        selection: edit.selection,
    });
}

fn handle_priority(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    let current = modal.draft.priority;
    let next = match key.code {
        KeyCode::Left => current.prev(),
        KeyCode::Right | KeyCode::Char(' ') => current.next(),
        KeyCode::Enter => {
            modal.focus = FormField::Priority.next();
            return;
        }
        _ => return,
    };
    modal.draft.set_field(FieldUpdate::Priority(next));
}

fn handle_due_date(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Left => modal.shift_due_date(-1),
        KeyCode::Right => modal.shift_due_date(1),
        KeyCode::Up => modal.shift_due_date(-7),
        KeyCode::Down => modal.shift_due_date(7),
        KeyCode::Char('t') => modal
            .draft
            .set_field(FieldUpdate::DueDate(Some(Local::now().date_naive()))),
        KeyCode::Backspace | KeyCode::Delete => modal.draft.set_field(FieldUpdate::DueDate(None)),
        KeyCode::Enter => modal.focus = FormField::DueDate.next(),
        _ => {}
    }
}

fn handle_completed(app: &mut App, key: KeyEvent) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    let completed = match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Char(' ') => !modal.draft.completed,
        KeyCode::Char('y') => true,
        KeyCode::Char('n') => false,
        KeyCode::Enter => {
            modal.focus = FormField::Completed.next();
            return;
        }
        _ => return,
    };
    modal.draft.set_field(FieldUpdate::Completed(completed));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_need_a_command_modifier() {
        let bare = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE);
        assert_eq!(style_shortcut(bare), None);
        let ctrl_b = KeyEvent::new(KeyCode::Char('b'), KeyModifiers::CONTROL);
        assert_eq!(style_shortcut(ctrl_b), Some(StyleOp::Bold));
        let ctrl_shift_u = KeyEvent::new(
            KeyCode::Char('U'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        );
        assert_eq!(style_shortcut(ctrl_shift_u), Some(StyleOp::Underline));
        let cmd_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::SUPER);
        assert_eq!(style_shortcut(cmd_h), Some(StyleOp::NumberedList));
        let ctrl_z = KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL);
        assert_eq!(style_shortcut(ctrl_z), None);
    }

    #[test]
    fn legacy_ctrl_i_arrives_as_tab_and_is_not_a_shortcut() {
        // Without keyboard enhancement 0x09 decodes as Tab
        assert_eq!(style_shortcut(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)), None);
        // 0x08 decodes as Ctrl+H, so the list shortcut works either way
        let ctrl_h = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(style_shortcut(ctrl_h), Some(StyleOp::NumberedList));
    }

    #[test]
    fn typed_char_skips_control_chords() {
        assert_eq!(
            typed_char(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::SHIFT)),
            Some('x')
        );
        assert_eq!(
            typed_char(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)),
            None
        );
    }
}
