//! Edit-in-place sessions.
//!
//! While a task is being edited its label is conceptually swapped for an
//! editable buffer. That buffer lives here, *outside* the engine: the engine
//! state is never touched while a session is open, so cancelling is guaranteed
//! to restore the exact pre-edit text—there is nothing to roll back.
//!
//! Committing hands the buffer to [`TaskListEngine::commit_edit`], which routes
//! through `update_task_text` and therefore inherits its blank-deletes rule.
//!
//! [`TaskListEngine::commit_edit`]: crate::engine::TaskListEngine::commit_edit

use uuid::Uuid;

/// A pending edit of one task's text.
///
/// Obtained from [`TaskListEngine::begin_edit`]; consumed by `commit_edit`
/// or `cancel_edit`.
///
/// [`TaskListEngine::begin_edit`]: crate::engine::TaskListEngine::begin_edit
#[derive(Debug, Clone)]
pub struct EditSession {
    id: Uuid,
    original: String,
    buffer: String,
}

impl EditSession {
    pub(crate) fn new(id: Uuid, text: String) -> Self {
        Self {
            id,
            buffer: text.clone(),
            original: text,
        }
    }

    /// The task being edited.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The text the task had when the session opened.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Current contents of the edit buffer (pre-filled with the original text).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub(crate) fn into_parts(self) -> (Uuid, String) {
        (self.id, self.buffer)
    }
}
