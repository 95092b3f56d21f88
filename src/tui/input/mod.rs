mod form;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use super::app::App;
use super::modal::FormField;

use form::*;
use list::*;

pub use form::{style_shortcut, toggle_description_style};

/// Handle a key event for the list or the open form
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    let key = normalize_key(key);
    if app.is_editing() {
        handle_form(app, key);
    } else {
        handle_list(app, key);
    }
}

/// Handle a mouse event. A press outside the open form closes it.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(mouse.kind, MouseEventKind::Down(_)) {
        return;
    }
    if app.is_editing() && app.outside.is_outside(mouse.column, mouse.row) {
        tracing::debug!(column = mouse.column, row = mouse.row, "click outside form");
        app.close_modal();
    }
}

/// Handle a bracketed paste event. Only the form's text fields accept paste.
pub fn handle_paste(app: &mut App, text: &str) {
    let Some(modal) = app.modal.as_mut() else {
        return;
    };
    if text.is_empty() {
        return;
    }
    match modal.focus {
        FormField::Title => {
            // Single-line: replace newlines with spaces
            let clean = text.replace('\n', " ").replace('\r', "");
            edit_title(modal, |fc, buf| fc.insert(buf, &clean));
        }
        FormField::Description => {
            let clean = text.replace('\r', "");
            edit_description(modal, |fc, buf| fc.insert(buf, &clean));
        }
        _ => {}
    }
}

/// Uppercase shifted letters so `G` and `Shift+g` compare equal.
fn normalize_key(mut key: KeyEvent) -> KeyEvent {
    if let KeyCode::Char(c) = key.code
        && key.modifiers.contains(KeyModifiers::SHIFT)
        && c.is_ascii_lowercase()
    {
        key.code = KeyCode::Char(c.to_ascii_uppercase());
    }
    key
}
