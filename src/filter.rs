//! Filter modes and the filtered-view projection.
//!
//! The filter decides which tasks a consumer sees; it never reorders them.
//! Mode names coming in as text (config values, script commands) are parsed
//! leniently: anything unrecognized falls back to showing everything.

use serde::{Deserialize, Serialize};

use crate::task::{Snapshot, Task};

/// Which tasks the filtered view exposes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    #[default]
    ShowAll,
    ShowCompleted,
    ShowUncompleted,
}

impl FilterMode {
    /// Canonical name used in output and config files.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::ShowAll => "show_all",
            FilterMode::ShowCompleted => "show_completed",
            FilterMode::ShowUncompleted => "show_uncompleted",
        }
    }

    /// Parse a mode name, tolerating case, separators, and shorthand.
    ///
    /// Unknown names map to `ShowAll` rather than failing, so a stale or
    /// bogus filter value degrades to the full unfiltered view.
    pub fn parse_lenient(raw: &str) -> Self {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "showcompleted" | "completed" | "done" => FilterMode::ShowCompleted,
            "showuncompleted" | "uncompleted" | "pending" | "active" => {
                FilterMode::ShowUncompleted
            }
            _ => FilterMode::ShowAll,
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            FilterMode::ShowAll => true,
            FilterMode::ShowCompleted => task.is_complete,
            FilterMode::ShowUncompleted => !task.is_complete,
        }
    }
}

impl std::fmt::Display for FilterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Project the tasks matching the snapshot's filter, in original order.
pub fn filtered(snapshot: &Snapshot) -> Vec<Task> {
    snapshot
        .tasks
        .iter()
        .filter(|task| snapshot.filter.matches(task))
        .cloned()
        .collect()
}
