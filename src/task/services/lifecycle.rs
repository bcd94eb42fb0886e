//! Ownership-scoped task lifecycle service.
//!
//! Every operation receives the authenticated caller explicitly. Existence is
//! always checked before ownership, so an unknown task reports
//! [`TaskLifecycleError::NotFound`] to every caller and an existing task owned
//! by someone else reports [`TaskLifecycleError::Forbidden`].

use crate::identity::{
    domain::UserId,
    ports::{UserDirectory, UserDirectoryError},
};
use crate::task::{
    domain::{Task, TaskDomainError, TaskId, TaskPatch},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: Option<String>,
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with a title and description.
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
        }
    }

    /// Creates a request with neither title nor description.
    #[must_use]
    pub fn untitled() -> Self {
        Self::default()
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// The caller is not a known user.
    #[error("user not found: {0}")]
    UserNotFound(UserId),

    /// No task exists with the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task exists but belongs to another user.
    #[error("user {caller} may not access task {task_id}")]
    Forbidden {
        /// Task the caller tried to access.
        task_id: TaskId,
        /// Authenticated caller.
        caller: UserId,
    },

    /// Input values were rejected by domain validation.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// Task store operation failed.
    #[error(transparent)]
    Storage(TaskRepositoryError),

    /// User directory lookup failed.
    #[error(transparent)]
    Identity(#[from] UserDirectoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::NotFound(task_id),
            other => Self::Storage(other),
        }
    }
}

/// Transport-agnostic classification of lifecycle failures.
///
/// A boundary layer maps these to client-visible outcomes, for example
/// HTTP 404, 403, 422, 503 and 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The task or the caller's user record does not exist.
    NotFound,
    /// The caller does not own the task.
    Forbidden,
    /// The request carried invalid values.
    Invalid,
    /// A collaborator is temporarily unreachable; retrying may succeed.
    Unavailable,
    /// Any other failure.
    Internal,
}

impl TaskLifecycleError {
    /// Classifies the failure for a boundary layer.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::UserNotFound(_) | Self::NotFound(_) => FailureKind::NotFound,
            Self::Forbidden { .. } => FailureKind::Forbidden,
            Self::Validation(_) => FailureKind::Invalid,
            Self::Storage(err) if err.is_transient() => FailureKind::Unavailable,
            Self::Identity(err) if err.is_transient() => FailureKind::Unavailable,
            Self::Storage(_) | Self::Identity(_) => FailureKind::Internal,
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
pub struct TaskLifecycleService<R, U, C>
where
    R: TaskRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    users: Arc<U>,
    clock: Arc<C>,
}

impl<R, U, C> Clone for TaskLifecycleService<R, U, C>
where
    R: TaskRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            users: Arc::clone(&self.users),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, U, C> TaskLifecycleService<R, U, C>
where
    R: TaskRepository,
    U: UserDirectory,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, users: Arc<U>, clock: Arc<C>) -> Self {
        Self {
            repository,
            users,
            clock,
        }
    }

    /// Creates a pending task owned by `caller`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::UserNotFound`] when the caller is not a
    /// known user, [`TaskLifecycleError::Validation`] when a text field is
    /// too long, and storage or identity errors unchanged.
    #[instrument(skip_all, fields(caller = %caller))]
    pub async fn create(
        &self,
        request: CreateTaskRequest,
        caller: UserId,
    ) -> TaskLifecycleResult<Task> {
        if self.users.find_by_id(caller).await?.is_none() {
            warn!("task creation requested by unknown user");
            return Err(TaskLifecycleError::UserNotFound(caller));
        }

        let CreateTaskRequest { title, description } = request;
        let task = Task::new(caller, title, description, &*self.clock)?;
        self.repository.add(&task).await?;
        info!(task_id = %task.id(), "task created");
        Ok(task)
    }

    /// Returns the task if `caller` owns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// and [`TaskLifecycleError::Forbidden`] when another user owns it.
    #[instrument(skip_all, fields(task_id = %id, caller = %caller))]
    pub async fn get_by_id(&self, id: TaskId, caller: UserId) -> TaskLifecycleResult<Task> {
        let task = self.load_owned(id, caller).await?;
        debug!("task loaded");
        Ok(task)
    }

    /// Returns every task owned by `caller`, oldest first.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Storage`] when the listing fails.
    #[instrument(skip_all, fields(caller = %caller))]
    pub async fn get_all_for_owner(&self, caller: UserId) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.list_by_owner(caller).await?;
        debug!(count = tasks.len(), "tasks listed");
        Ok(tasks)
    }

    /// Applies `patch` to a task owned by `caller` and returns the result.
    ///
    /// Title and description are replaced, not merged; see [`TaskPatch`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or disappears before the write, [`TaskLifecycleError::Forbidden`] when
    /// another user owns it, and [`TaskLifecycleError::Validation`] when a
    /// replacement value is too long.
    #[instrument(skip_all, fields(task_id = %id, caller = %caller))]
    pub async fn update(
        &self,
        id: TaskId,
        patch: TaskPatch,
        caller: UserId,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.load_owned(id, caller).await?;
        task.apply_patch(patch, &*self.clock)?;
        self.repository.update(&task).await?;
        info!(status = %task.status(), "task updated");
        Ok(task)
    }

    /// Permanently removes a task owned by `caller`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or is removed concurrently, and [`TaskLifecycleError::Forbidden`] when
    /// another user owns it.
    #[instrument(skip_all, fields(task_id = %id, caller = %caller))]
    pub async fn delete(&self, id: TaskId, caller: UserId) -> TaskLifecycleResult<()> {
        let task = self.load_owned(id, caller).await?;
        self.repository.delete(task.id()).await?;
        info!("task deleted");
        Ok(())
    }

    /// Loads a task and checks that `caller` owns it.
    async fn load_owned(&self, id: TaskId, caller: UserId) -> TaskLifecycleResult<Task> {
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(id))?;

        if !task.is_owned_by(caller) {
            warn!("ownership check failed");
            return Err(TaskLifecycleError::Forbidden {
                task_id: id,
                caller,
            });
        }
        Ok(task)
    }
}
