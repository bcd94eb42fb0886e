//! Domain model for task lifecycle management.
//!
//! A task belongs to exactly one owner for its whole life. The domain keeps
//! completion stamping and text limits here so that every adapter and service
//! sees the same rules.

mod error;
mod ids;
mod patch;
mod status;
mod task;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use ids::TaskId;
pub use patch::TaskPatch;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task};
