use ratatui::Terminal;
use ratatui::backend::TestBackend;

use crate::model::Config;
use crate::ops::task_ops::{TaskList, TaskStore};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render the whole app into an in-memory buffer and return plain text (no styles).
pub fn render_app(app: &mut App, w: u16, h: u16) -> String {
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| super::render(frame, app)).unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// An app over an in-memory store holding one task per title.
pub fn app_with_tasks(titles: &[&str]) -> App {
    let mut store = TaskList::new();
    for title in titles {
        store.create_task(crate::model::Task::new(*title));
    }
    App::new(Box::new(store), Config::default())
}
