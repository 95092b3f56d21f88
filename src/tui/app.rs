use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
    Event, KeyEventKind, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
    PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
    supports_keyboard_enhancement,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::load_config;
use crate::model::Config;
use crate::model::task::{Task, TaskId};
use crate::ops::task_ops::{TaskList, TaskStore};

use super::deferred::{AfterRender, AfterRenderQueue};
use super::input;
use super::modal::{ModalMode, ModalState};
use super::outside::OutsideDetector;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub store: Box<dyn TaskStore>,
    pub config: Config,
    pub theme: Theme,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible task row
    pub scroll_offset: usize,
    /// The open task form, if any
    pub modal: Option<ModalState>,
    /// Jobs to run once the current frame is on screen
    pub after_render: AfterRenderQueue,
    /// Screen region of the open form, for outside-click detection
    pub outside: OutsideDetector,
    /// One-shot message for the status row, cleared on the next key
    pub status_message: Option<String>,
    pub show_key_hints: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Box<dyn TaskStore>, config: Config) -> Self {
        let theme = Theme::from_config(&config.ui);
        let show_key_hints = config.ui.show_key_hints;
        App {
            store,
            config,
            theme,
            cursor: 0,
            scroll_offset: 0,
            modal: None,
            after_render: AfterRenderQueue::default(),
            outside: OutsideDetector::default(),
            status_message: None,
            show_key_hints,
            should_quit: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// The task under the list cursor
    pub fn active_task(&self) -> Option<&Task> {
        self.tasks().get(self.cursor)
    }

    fn active_task_id(&self) -> Option<TaskId> {
        self.active_task().and_then(|t| t.id)
    }

    /// Whether the task form is open
    pub fn is_editing(&self) -> bool {
        self.modal.is_some()
    }

    pub fn modal_mode(&self) -> Option<ModalMode> {
        self.modal.as_ref().map(|m| m.mode)
    }

    pub fn open_add_modal(&mut self) {
        self.modal = Some(ModalState::add(self.config.defaults.priority));
    }

    /// Open the form on the active task. No-op on an empty list.
    pub fn open_edit_modal(&mut self) {
        if let Some(task) = self.active_task() {
            self.modal = Some(ModalState::edit(task));
        }
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
        self.outside.clear();
    }

    /// Write the draft to the store (update in edit mode, create in add
    /// mode), then close the form.
    pub fn submit_modal(&mut self) {
        let Some(modal) = self.modal.take() else {
            return;
        };
        match modal.mode {
            ModalMode::Edit => match self.store.update_task(&modal.draft) {
                Ok(()) => {
                    tracing::debug!(id = ?modal.draft.id, "updated task");
                    self.status_message = Some(format!("Updated \u{201c}{}\u{201d}", modal.draft.title));
                }
                Err(e) => {
                    tracing::warn!(error = %e, "task update failed");
                    self.status_message = Some(format!("update failed: {}", e));
                }
            },
            ModalMode::Add => {
                let title = modal.draft.title.clone();
                let id = self.store.create_task(modal.draft);
                tracing::debug!(id, "created task");
                self.move_cursor_to(id);
                self.status_message = Some(format!("Created \u{201c}{}\u{201d}", title));
            }
        }
        self.close_modal();
    }

    /// Put the list cursor on the task with `id`, if present
    pub fn move_cursor_to(&mut self, id: TaskId) {
        if let Some(idx) = self.tasks().iter().position(|t| t.id == Some(id)) {
            self.cursor = idx;
        }
    }

    /// Keep the cursor inside the list after deletions
    pub fn clamp_cursor(&mut self) {
        let len = self.tasks().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn toggle_completed_at_cursor(&mut self) {
        let Some(id) = self.active_task_id() else {
            return;
        };
        if let Err(e) = self.store.toggle_completed(id) {
            tracing::warn!(error = %e, "toggle completed failed");
        }
    }

    pub fn delete_at_cursor(&mut self) {
        let Some(id) = self.active_task_id() else {
            return;
        };
        match self.store.delete_task(id) {
            Ok(task) => {
                self.status_message = Some(format!("Deleted \u{201c}{}\u{201d}", task.title));
            }
            Err(e) => tracing::warn!(error = %e, "delete failed"),
        }
        self.clamp_cursor();
    }

    /// Run the jobs queued for after the frame that was just drawn.
    /// Returns true if any ran (the caller should redraw).
    pub fn run_after_render(&mut self) -> bool {
        if self.after_render.is_empty() {
            return false;
        }
        for job in self.after_render.take() {
            match job {
                AfterRender::RestoreSelection { field, selection } => match self.modal.as_mut() {
                    Some(modal) => modal.restore_selection(field, selection),
                    None => tracing::debug!("form closed before selection restore"),
                },
            }
        }
        true
    }
}

/// Run the TUI application
pub fn run(config_path: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(config_path, &cwd)?;
    let kitty_keyboard = config.ui.kitty_keyboard.unwrap_or(true);

    let mut app = App::new(Box::new(TaskList::new()), config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableBracketedPaste
    )?;
    let enhanced_keys = kitty_keyboard && supports_keyboard_enhancement().unwrap_or(false);
    if enhanced_keys {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
        )?;
    }
    tracing::debug!(enhanced_keys, "terminal ready");

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal(enhanced_keys);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    restore_terminal(enhanced_keys);
    terminal.show_cursor()?;

    result
}

fn restore_terminal(enhanced_keys: bool) {
    let mut stdout = io::stdout();
    if enhanced_keys {
        let _ = execute!(stdout, PopKeyboardEnhancementFlags);
    }
    let _ = disable_raw_mode();
    let _ = execute!(
        stdout,
        DisableBracketedPaste,
        DisableMouseCapture,
        LeaveAlternateScreen
    );
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Deferred work sees the frame that was just drawn; draw again so
        // its effect shows before the next key is read.
        if app.run_after_render() {
            continue;
        }

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
