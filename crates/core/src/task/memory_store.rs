//! In-memory task store

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::Task;
use super::repository::TaskRepository;

/// In-memory task store
///
/// Tasks are kept in insertion order behind a lock. Ids come from a counter
/// that starts at 0 and is never reused within the process lifetime, so the
/// first assigned id is 1.
#[derive(Debug, Default)]
pub struct MemoryTaskStore {
    state: RwLock<StoreState>,
}

#[derive(Debug, Default)]
struct StoreState {
    tasks: Vec<Task>,
    counter: u64,
}

impl MemoryTaskStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TaskRepository for MemoryTaskStore {
    async fn create(&self, mut task: Task) -> Task {
        let mut state = self.state.write().await;
        state.counter += 1;
        task.id = Some(state.counter);
        state.tasks.push(task.clone());
        tracing::debug!(id = state.counter, "task created");
        task
    }

    async fn get(&self, id: u64) -> Option<Task> {
        self.state
            .read()
            .await
            .tasks
            .iter()
            .find(|task| task.id == Some(id))
            .cloned()
    }

    async fn list(&self) -> Vec<Task> {
        // Snapshot copy; callers may mutate the returned Vec freely
        self.state.read().await.tasks.clone()
    }

    async fn update(&self, id: u64, task: Task) -> Option<Task> {
        let mut state = self.state.write().await;
        let existing = state.tasks.iter_mut().find(|t| t.id == Some(id))?;
        existing.description = task.description;
        existing.completed = task.completed;
        Some(existing.clone())
    }

    async fn delete(&self, id: u64) -> bool {
        let mut state = self.state.write().await;
        let before = state.tasks.len();
        state.tasks.retain(|task| task.id != Some(id));
        let deleted = state.tasks.len() != before;
        if deleted {
            tracing::debug!(id, "task deleted");
        }
        deleted
    }
}
