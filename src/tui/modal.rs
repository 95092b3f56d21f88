use std::fmt;

use chrono::{Days, Local, NaiveDate};

use crate::markup::Selection;
use crate::model::task::{FieldUpdate, Priority, Task};

use super::text_field::FieldCursor;

/// Whether the form creates a new task or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMode {
    Add,
    Edit,
}

impl ModalMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ModalMode::Add => "add",
            ModalMode::Edit => "edit",
        }
    }

    /// Label of the submit button
    pub fn submit_label(self) -> &'static str {
        match self {
            ModalMode::Add => "Create Task",
            ModalMode::Edit => "Update Task",
        }
    }
}

impl fmt::Display for ModalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Description,
    Priority,
    DueDate,
    Completed,
    Submit,
}

impl FormField {
    pub const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::Description,
        FormField::Priority,
        FormField::DueDate,
        FormField::Completed,
        FormField::Submit,
    ];

    fn index(self) -> usize {
        FormField::ORDER
            .iter()
            .position(|f| *f == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> FormField {
        FormField::ORDER[(self.index() + 1) % FormField::ORDER.len()]
    }

    pub fn prev(self) -> FormField {
        let len = FormField::ORDER.len();
        FormField::ORDER[(self.index() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Description => "Description",
            FormField::Priority => "Select Priority",
            FormField::DueDate => "Due Date",
            FormField::Completed => "Task Completed",
            FormField::Submit => "",
        }
    }
}

/// State of the open task form
#[derive(Debug, Clone)]
pub struct ModalState {
    pub mode: ModalMode,
    /// The task being edited; written to the store on submit
    pub draft: Task,
    pub focus: FormField,
    pub title_cursor: FieldCursor,
    pub description_cursor: FieldCursor,
    /// First visible description line
    pub description_scroll: usize,
}

impl ModalState {
    /// Form for a new task
    pub fn add(default_priority: Priority) -> Self {
        let mut draft = Task::default();
        draft.set_field(FieldUpdate::Priority(default_priority));
        Self::with_draft(ModalMode::Add, draft)
    }

    /// Form pre-filled from an existing task
    pub fn edit(task: &Task) -> Self {
        let mut draft = Task::default();
        draft.set_field(FieldUpdate::SetTask(task.clone()));
        Self::with_draft(ModalMode::Edit, draft)
    }

    fn with_draft(mode: ModalMode, draft: Task) -> Self {
        ModalState {
            mode,
            title_cursor: FieldCursor::at_end(&draft.title),
            description_cursor: FieldCursor::at_end(&draft.description),
            draft,
            focus: FormField::Title,
            description_scroll: 0,
        }
    }

    /// Replace the description text. Like a text area whose value is set
    /// programmatically, the caret drops to the end and any selection is lost.
    pub fn replace_description(&mut self, text: String) {
        self.draft.set_field(FieldUpdate::Description(text));
        self.description_cursor = FieldCursor::at_end(&self.draft.description);
    }

    /// Focus `field` and apply `selection` to it.
    /// Only the text fields hold a selection; other fields just take focus.
    pub fn restore_selection(&mut self, field: FormField, selection: Selection) {
        self.focus = field;
        match field {
            FormField::Title => self
                .title_cursor
                .set_selection(&self.draft.title, selection),
            FormField::Description => self
                .description_cursor
                .set_selection(&self.draft.description, selection),
            _ => {}
        }
    }

    /// Shift the due date by `days` (negative = earlier). An unset date
    /// starts from today.
    pub fn shift_due_date(&mut self, days: i64) {
        let base = self
            .draft
            .due_date
            .unwrap_or_else(|| Local::now().date_naive());
        let shifted = shift_date(base, days);
        self.draft.set_field(FieldUpdate::DueDate(Some(shifted)));
    }
}

fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    let step = Days::new(days.unsigned_abs());
    let shifted = if days >= 0 {
        date.checked_add_days(step)
    } else {
        date.checked_sub_days(step)
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_through_every_field() {
        let mut f = FormField::Title;
        for _ in 0..FormField::ORDER.len() {
            f = f.next();
        }
        assert_eq!(f, FormField::Title);
        assert_eq!(FormField::Title.prev(), FormField::Submit);
        assert_eq!(FormField::Description.next(), FormField::Priority);
    }

    #[test]
    fn edit_form_loads_task() {
        let task = Task {
            id: Some(3),
            title: "Ship".into(),
            description: "notes".into(),
            ..Default::default()
        };
        let modal = ModalState::edit(&task);
        assert_eq!(modal.mode, ModalMode::Edit);
        assert_eq!(modal.draft, task);
        assert_eq!(modal.title_cursor.cursor, 4);
        assert_eq!(modal.description_cursor.cursor, 5);
    }

    #[test]
    fn add_form_uses_default_priority() {
        let modal = ModalState::add(Priority::Medium);
        assert_eq!(modal.mode, ModalMode::Add);
        assert_eq!(modal.draft.priority, Priority::Medium);
        assert!(modal.draft.id.is_none());
        assert_eq!(modal.mode.submit_label(), "Create Task");
    }

    #[test]
    fn replace_description_moves_caret_to_end() {
        let mut modal = ModalState::add(Priority::Low);
        modal.replace_description("abc".into());
        modal
            .description_cursor
            .set_selection("abc", Selection::new(0, 2));
        modal.replace_description("**ab**c".into());
        assert_eq!(modal.description_cursor, FieldCursor::at_end("**ab**c"));
    }

    #[test]
    fn restore_selection_focuses_field() {
        let mut modal = ModalState::add(Priority::Low);
        modal.replace_description("**hello** world".into());
        modal.restore_selection(FormField::Description, Selection::new(0, 9));
        assert_eq!(modal.focus, FormField::Description);
        assert_eq!(modal.description_cursor.selection(), Selection::new(0, 9));
    }

    #[test]
    fn due_date_shifts() {
        let mut modal = ModalState::add(Priority::Low);
        modal.draft.due_date = NaiveDate::from_ymd_opt(2026, 2, 27);
        modal.shift_due_date(2);
        assert_eq!(modal.draft.due_date, NaiveDate::from_ymd_opt(2026, 3, 1));
        modal.shift_due_date(-7);
        assert_eq!(modal.draft.due_date, NaiveDate::from_ymd_opt(2026, 2, 22));
    }

    #[test]
    fn unset_due_date_starts_from_today() {
        let mut modal = ModalState::add(Priority::Low);
        modal.shift_due_date(0);
        assert_eq!(modal.draft.due_date, Some(Local::now().date_naive()));
    }
}
