//! Application state

use std::sync::Arc;

use todo_core::task::MemoryTaskStore;

/// Shared application state
#[derive(Clone, Default)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Default)]
struct AppStateInner {
    task_store: MemoryTaskStore,
}

impl AppState {
    /// Create a new AppState with a fresh, empty task store
    pub fn new() -> Self {
        Self::with_store(MemoryTaskStore::new())
    }

    /// Create a new AppState around the given task store
    pub fn with_store(task_store: MemoryTaskStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner { task_store }),
        }
    }

    /// Get reference to the task store
    pub fn task_store(&self) -> &MemoryTaskStore {
        &self.inner.task_store
    }
}
