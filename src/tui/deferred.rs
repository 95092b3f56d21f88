use crate::markup::Selection;

use super::modal::FormField;

/// Work that must wait until the next frame has been drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AfterRender {
    /// Focus `field` and select `selection` in it. Queued after the field's
    /// text is replaced, so the selection is set against what is on screen.
    RestoreSelection {
        field: FormField,
        selection: Selection,
    },
}

/// FIFO of jobs drained by the event loop right after `terminal.draw`.
#[derive(Debug, Default)]
pub struct AfterRenderQueue {
    pending: Vec<AfterRender>,
}

impl AfterRenderQueue {
    pub fn push(&mut self, job: AfterRender) {
        self.pending.push(job);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Take every queued job, oldest first.
    pub fn take(&mut self) -> Vec<AfterRender> {
        std::mem::take(&mut self.pending)
    }
}
