//! # Domain Model: Tasks, Filters, and Text Normalization
//!
//! A [`Task`] is a single to-do entry: an immutable unique id, the entry text, a
//! completion flag, and the creation time. The list itself is an ordered `Vec<Task>`
//! kept newest-first; ordering and uniqueness are enforced by the engine, not here.
//!
//! ## Text normalization
//!
//! Task text is trimmed on the way in and is never stored or rendered empty:
//!
//! - Adding blank text is a no-op.
//! - Editing a task down to blank text deletes the task.
//!
//! Both rules funnel through [`normalize_text`], which returns `None` when nothing
//! survives the trim.
//!
//! ## Wire shape
//!
//! The persisted record is `{id, text, completed, createdAt}`—camelCase field names,
//! matching the layout earlier versions of the app wrote. `Filter` serializes as one
//! of the lowercase tags `"all"`, `"active"`, `"completed"`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Uuid,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// A fresh, not-yet-completed task. The caller supplies the id so the
    /// generator stays injectable.
    pub fn new(id: Uuid, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }
}

/// Display filter for the task list.
///
/// Governs which tasks are visible, never which tasks are stored. Persisted
/// independently of task data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether a task is visible under this filter.
    pub fn admits(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        };
        write!(f, "{}", tag)
    }
}

impl FromStr for Filter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(format!(
                "unknown filter '{}' (expected all, active, or completed)",
                other
            )),
        }
    }
}

/// Trims task text. `None` means nothing was left, which callers treat as
/// "no task here": adds become no-ops, edit-commits become deletes.
pub fn normalize_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
