use super::StateStore;
use crate::error::{Result, TodozError};
use crate::model::{Filter, Task};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const TASKS_FILE: &str = "tasks.json";
const FILTER_FILE: &str = "filter.json";

/// JSON-on-disk store.
///
/// `tasks.json` holds the ordered task array, `filter.json` the filter tag.
/// Writes go through a tmp file and rename, so a crash never leaves a
/// half-written entry behind. Reads that find nothing usable degrade to the
/// defaults instead of erroring.
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodozError::Io)?;
        }
        Ok(())
    }

    fn write_atomic(&self, name: &str, payload: &str) -> Result<()> {
        self.ensure_dir()?;
        let tmp = self.root.join(format!(".{}-{}.tmp", name, Uuid::new_v4()));
        fs::write(&tmp, payload).map_err(TodozError::Io)?;
        if let Err(e) = fs::rename(&tmp, self.root.join(name)) {
            // Best effort; the tmp file must not outlive the failed write
            let _ = fs::remove_file(&tmp);
            return Err(TodozError::Io(e));
        }
        Ok(())
    }

    // Absent and unreadable both mean "nothing stored"; the load path
    // never raises.
    fn read_entry(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.root.join(name)).ok()
    }
}

impl StateStore for JsonFileStore {
    fn load_tasks(&self) -> Result<Vec<Task>> {
        let Some(raw) = self.read_entry(TASKS_FILE) else {
            return Ok(Vec::new());
        };
        // Corrupt JSON falls back to the empty list
        let tasks: Vec<Task> = serde_json::from_str(&raw).unwrap_or_default();
        // Hand-edited files can carry duplicate ids; keep the first
        // occurrence so every id stays unique in memory
        let mut seen = HashSet::new();
        Ok(tasks.into_iter().filter(|t| seen.insert(t.id)).collect())
    }

    fn save_tasks(&mut self, tasks: &[Task]) -> Result<()> {
        let payload = serde_json::to_string_pretty(tasks).map_err(TodozError::Serialization)?;
        self.write_atomic(TASKS_FILE, &payload)
    }

    fn load_filter(&self) -> Result<Filter> {
        let Some(raw) = self.read_entry(FILTER_FILE) else {
            return Ok(Filter::All);
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn save_filter(&mut self, filter: Filter) -> Result<()> {
        let payload = serde_json::to_string(&filter).map_err(TodozError::Serialization)?;
        self.write_atomic(FILTER_FILE, &payload)
    }
}
