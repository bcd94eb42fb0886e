//! Update command applied to an existing task.

use super::{Task, TaskStatus};

/// Replacement values for a task update.
///
/// Title and description are replaced unconditionally: a patch without a
/// title clears the task's title. Build from [`TaskPatch::replacing`] to
/// change a single field while keeping the others. Status is applied only
/// when present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub(super) title: Option<String>,
    pub(super) description: Option<String>,
    pub(super) status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Creates a patch that clears title and description and keeps status.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a patch carrying the task's current title and description.
    #[must_use]
    pub fn replacing(task: &Task) -> Self {
        Self {
            title: task.title().map(str::to_owned),
            description: task.description().map(str::to_owned),
            status: None,
        }
    }

    /// Sets the replacement title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the title.
    #[must_use]
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn without_description(mut self) -> Self {
        self.description = None;
        self
    }

    /// Sets the target status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Returns the replacement title.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the replacement description.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the target status, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }
}
