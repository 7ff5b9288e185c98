use super::StateStore;
use crate::error::{Result, TodozError};
use crate::model::{Filter, Task};

/// In-memory storage for testing and embedding. Does NOT persist data
/// across processes.
///
/// The `fail_writes` switch lets tests exercise the write-failure path:
/// every save returns an error while the stored state stays untouched.
#[derive(Default)]
pub struct InMemoryStore {
    tasks: Vec<Task>,
    filter: Filter,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse every subsequent save.
    pub fn fail_writes(mut self, fail: bool) -> Self {
        self.fail_writes = fail;
        self
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes {
            return Err(TodozError::Store("write refused by store".to_string()));
        }
        Ok(())
    }
}

impl StateStore for InMemoryStore {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        Ok(self.tasks.clone())
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        self.check_writable()?;
        self.tasks = tasks.to_vec();
        Ok(())
    }

    fn load_filter(&self) -> Result<Filter> {
        Ok(self.filter)
    }

    fn save_filter(&mut self, filter: Filter) -> Result<()> {
        self.check_writable()?;
        self.filter = filter;
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use uuid::Uuid;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_active_task(mut self, text: &str) -> Self {
            let mut tasks = self.store.load_tasks().unwrap();
            tasks.insert(0, Task::new(Uuid::new_v4(), text.to_string()));
            self.store.save_tasks(&tasks).unwrap();
            self
        }

        pub fn with_completed_task(mut self, text: &str) -> Self {
            let mut task = Task::new(Uuid::new_v4(), text.to_string());
            task.completed = true;
            let mut tasks = self.store.load_tasks().unwrap();
            tasks.insert(0, task);
            self.store.save_tasks(&tasks).unwrap();
            self
        }

        pub fn with_filter(mut self, filter: Filter) -> Self {
            self.store.save_filter(filter).unwrap();
            self
        }
    }
}
