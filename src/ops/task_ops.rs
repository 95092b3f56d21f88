use crate::model::task::{Task, TaskId};

/// Error type for task operations
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task not found: {0}")]
    NotFound(TaskId),
    #[error("task has no id (it was never created)")]
    MissingId,
}

/// Owner of the task records the form creates and edits.
pub trait TaskStore {
    /// All tasks in display order
    fn tasks(&self) -> &[Task];

    fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks().iter().find(|t| t.id == Some(id))
    }

    /// Store a new task, assigning it a fresh id. Any id on `task` is ignored.
    fn create_task(&mut self, task: Task) -> TaskId;

    /// Replace the stored task with the same id.
    fn update_task(&mut self, task: &Task) -> Result<(), TaskError>;

    fn delete_task(&mut self, id: TaskId) -> Result<Task, TaskError>;

    /// Flip the completed flag, returning the new value.
    fn toggle_completed(&mut self, id: TaskId) -> Result<bool, TaskError>;
}

/// In-memory task store. Ids count up from 1 and are never reused.
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    last_id: TaskId,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: TaskId) -> Result<usize, TaskError> {
        self.tasks
            .iter()
            .position(|t| t.id == Some(id))
            .ok_or(TaskError::NotFound(id))
    }
}

impl TaskStore for TaskList {
    fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    fn create_task(&mut self, mut task: Task) -> TaskId {
        self.last_id += 1;
        let id = self.last_id;
        task.id = Some(id);
        self.tasks.push(task);
        id
    }

    fn update_task(&mut self, task: &Task) -> Result<(), TaskError> {
        let id = task.id.ok_or(TaskError::MissingId)?;
        let idx = self.position(id)?;
        self.tasks[idx] = task.clone();
        Ok(())
    }

    fn delete_task(&mut self, id: TaskId) -> Result<Task, TaskError> {
        let idx = self.position(id)?;
        Ok(self.tasks.remove(idx))
    }

    fn toggle_completed(&mut self, id: TaskId) -> Result<bool, TaskError> {
        let idx = self.position(id)?;
        let task = &mut self.tasks[idx];
        task.completed = !task.completed;
        Ok(task.completed)
    }
}
