use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the task store on creation
pub type TaskId = u64;

/// Task priority, in ascending order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Label shown in the priority selector
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority, wrapping high → low
    pub fn next(self) -> Priority {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    /// Previous priority, wrapping low → high
    pub fn prev(self) -> Priority {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority '{}'", other)),
        }
    }
}

/// A to-do task. Also used as the editable draft behind the task form;
/// a draft that has never been created has no `id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<TaskId>,
    pub title: String,
    /// Free text, may contain inline markdown markers
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
}

/// A single-field change to a task draft.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Description(String),
    Priority(Priority),
    DueDate(Option<NaiveDate>),
    Completed(bool),
    /// Replace the whole draft (e.g. when an edit form opens on an existing task)
    SetTask(Task),
}

impl Task {
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            title: title.into(),
            ..Default::default()
        }
    }

    /// Apply a field change to this task
    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Description(description) => self.description = description,
            FieldUpdate::Priority(priority) => self.priority = priority,
            FieldUpdate::DueDate(due_date) => self.due_date = due_date,
            FieldUpdate::Completed(completed) => self.completed = completed,
            FieldUpdate::SetTask(task) => *self = task,
        }
    }

    /// Due date formatted as `YYYY-MM-DD`, if set
    pub fn due_date_str(&self) -> Option<String> {
        self.due_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_field_updates_one_field() {
        let mut task = Task::new("Write report");
        task.set_field(FieldUpdate::Description("**draft** first".into()));
        task.set_field(FieldUpdate::Priority(Priority::High));
        task.set_field(FieldUpdate::Completed(true));
        assert_eq!(task.title, "Write report");
        assert_eq!(task.description, "**draft** first");
        assert_eq!(task.priority, Priority::High);
        assert!(task.completed);
        assert_eq!(task.id, None);
    }

    #[test]
    fn set_task_replaces_draft() {
        let mut draft = Task::new("scratch");
        let stored = Task {
            id: Some(7),
            title: "Stored".into(),
            due_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            ..Default::default()
        };
        draft.set_field(FieldUpdate::SetTask(stored.clone()));
        assert_eq!(draft, stored);
        assert_eq!(draft.due_date_str().as_deref(), Some("2026-03-01"));
    }

    #[test]
    fn priority_cycles_both_ways() {
        for p in Priority::ALL {
            assert_eq!(p.next().prev(), p);
        }
        assert_eq!(Priority::High.next(), Priority::Low);
        assert_eq!(Priority::Low.prev(), Priority::High);
    }

    #[test]
    fn priority_parse_and_serde() {
        assert_eq!("Medium".parse::<Priority>(), Ok(Priority::Medium));
        assert!("urgent".parse::<Priority>().is_err());
        let json = serde_json::to_string(&Priority::High).unwrap();
        assert_eq!(json, "\"high\"");
    }

    #[test]
    fn default_task_is_low_priority_and_open() {
        let task = Task::default();
        assert_eq!(task.priority, Priority::Low);
        assert!(!task.completed);
        assert!(task.due_date.is_none());
    }
}
