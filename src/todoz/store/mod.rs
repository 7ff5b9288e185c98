use crate::error::Result;
use crate::model::{Filter, Task};

pub mod fs;
pub mod memory;

/// Abstract interface for persisted engine state.
///
/// Two independent entries: the ordered task list and the display filter.
/// The load side never fails on absent or corrupt data—implementations fall
/// back to the empty list and `Filter::All`—while genuine I/O failures on
/// the save side must surface to the caller.
pub trait StateStore {
    /// Load the persisted task list, newest first.
    fn load_tasks(&self) -> Result<Vec<Task>>;

    /// Replace the persisted task list.
    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()>;

    /// Load the persisted display filter.
    fn load_filter(&self) -> Result<Filter>;

    /// Replace the persisted display filter.
    fn save_filter(&mut self, filter: Filter) -> Result<()>;
}
