//! Task repository trait
//!
//! Defines the interface for task storage operations. Absence is reported
//! as `Option`/`bool`; no operation can fail.

use async_trait::async_trait;

use super::model::Task;

/// Repository interface for task CRUD operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Store a new task, assigning its id
    async fn create(&self, task: Task) -> Task;

    /// Get a task by id
    async fn get(&self, id: u64) -> Option<Task>;

    /// Get all tasks in insertion order
    async fn list(&self) -> Vec<Task>;

    /// Replace the description and completion flag of an existing task
    async fn update(&self, id: u64, task: Task) -> Option<Task>;

    /// Delete a task by id, reporting whether anything was removed
    async fn delete(&self, id: u64) -> bool;
}
