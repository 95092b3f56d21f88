use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,
        (m, KeyCode::Char('c')) if m.contains(KeyModifiers::CONTROL) => app.should_quit = true,
        (_, KeyCode::Char('j') | KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k') | KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g') | KeyCode::Home) => app.cursor = 0,
        (_, KeyCode::Char('G') | KeyCode::End) => {
            app.cursor = app.tasks().len().saturating_sub(1);
        }
        (_, KeyCode::Char('a')) => app.open_add_modal(),
        (_, KeyCode::Char('e') | KeyCode::Enter) => app.open_edit_modal(),
        (_, KeyCode::Char(' ') | KeyCode::Char('x')) => app.toggle_completed_at_cursor(),
        (_, KeyCode::Char('d') | KeyCode::Delete) => app.delete_at_cursor(),
        (_, KeyCode::Char('?')) => app.show_key_hints = !app.show_key_hints,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    let len = app.tasks().len();
    if len == 0 {
        return;
    }
    app.cursor = app.cursor.saturating_add_signed(delta).min(len - 1);
}
