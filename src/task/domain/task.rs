//! Task aggregate root.

use super::{TaskDomainError, TaskId, TaskPatch, TaskStatus};
use crate::identity::domain::UserId;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use serde::Serialize;

/// Task aggregate root.
///
/// The owner is fixed at creation. `completed_at` is stamped the first time
/// the task reaches [`TaskStatus::Completed`] and is kept afterwards, even if
/// the status moves away again. Both timestamps are kept at microsecond
/// precision so a stored task reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    owner_id: UserId,
    title: Option<String>,
    description: Option<String>,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub owner_id: UserId,
    /// Persisted title.
    pub title: Option<String>,
    /// Persisted description.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted completion timestamp.
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Maximum title length in characters.
    pub const MAX_TITLE_LENGTH: usize = 200;

    /// Maximum description length in characters.
    pub const MAX_DESCRIPTION_LENGTH: usize = 2000;

    /// Creates a pending task owned by `owner_id`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooLong`] or
    /// [`TaskDomainError::DescriptionTooLong`] when a text field exceeds its
    /// limit.
    pub fn new(
        owner_id: UserId,
        title: Option<String>,
        description: Option<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        validate_text(title.as_deref(), description.as_deref())?;
        Ok(Self {
            id: TaskId::new(),
            owner_id,
            title,
            description,
            status: TaskStatus::Pending,
            created_at: stamp(clock),
            completed_at: None,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            owner_id: data.owner_id,
            title: data.title,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            completed_at: data.completed_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning user's identifier.
    #[must_use]
    pub const fn owner_id(&self) -> UserId {
        self.owner_id
    }

    /// Returns the title, if set.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if set.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the first completion timestamp, if the task was ever
    /// completed.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns `true` when `user_id` owns this task.
    #[must_use]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }

    /// Marks the task completed and stamps the completion time.
    ///
    /// Calling this on a completed task changes nothing.
    pub fn complete(&mut self, clock: &impl Clock) {
        if self.status.is_completed() {
            return;
        }
        self.status = TaskStatus::Completed;
        self.completed_at = Some(stamp(clock));
    }

    /// Moves the task to `status`.
    ///
    /// Any transition is permitted. Moving to `Completed` goes through
    /// [`Task::complete`]; other targets are plain assignment and leave
    /// `completed_at` untouched.
    pub fn set_status(&mut self, status: TaskStatus, clock: &impl Clock) {
        if status.is_completed() {
            self.complete(clock);
        } else {
            self.status = status;
        }
    }

    /// Applies an update command.
    ///
    /// Title and description are replaced by the patch values, including
    /// `None`. The task is left untouched when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TitleTooLong`] or
    /// [`TaskDomainError::DescriptionTooLong`] when a replacement value
    /// exceeds its limit.
    pub fn apply_patch(
        &mut self,
        patch: TaskPatch,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        let TaskPatch {
            title,
            description,
            status,
        } = patch;
        validate_text(title.as_deref(), description.as_deref())?;

        self.title = title;
        self.description = description;
        if let Some(target) = status {
            self.set_status(target, clock);
        }
        Ok(())
    }
}

/// Reads the clock at the precision `TIMESTAMPTZ` stores.
fn stamp(clock: &impl Clock) -> DateTime<Utc> {
    clock.utc().trunc_subsecs(6)
}

fn validate_text(title: Option<&str>, description: Option<&str>) -> Result<(), TaskDomainError> {
    let title_length = title.map_or(0, |value| value.chars().count());
    if title_length > Task::MAX_TITLE_LENGTH {
        return Err(TaskDomainError::TitleTooLong {
            max: Task::MAX_TITLE_LENGTH,
            actual: title_length,
        });
    }

    let description_length = description.map_or(0, |value| value.chars().count());
    if description_length > Task::MAX_DESCRIPTION_LENGTH {
        return Err(TaskDomainError::DescriptionTooLong {
            max: Task::MAX_DESCRIPTION_LENGTH,
            actual: description_length,
        });
    }
    Ok(())
}
