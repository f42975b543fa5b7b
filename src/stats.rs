//! Aggregate statistics projection.
//!
//! Recomputed in full on every call; nothing is cached between reads.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::task::Snapshot;

/// Counts and completion percentage derived from one snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct TaskStats {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub completed: usize,
    pub uncompleted: usize,
    pub percent_completed: f64,
}

/// Derive the stats view from a snapshot.
///
/// `completed + uncompleted == total` holds for every input, and the
/// percentage is 0 exactly when the list is empty.
pub fn compute(snapshot: &Snapshot) -> TaskStats {
    let total = snapshot.tasks.len();
    let completed = snapshot
        .tasks
        .iter()
        .filter(|task| task.is_complete)
        .count();
    let uncompleted = total - completed;
    let percent_completed = if total == 0 {
        0.0
    } else {
        completed as f64 / total as f64 * 100.0
    };

    TaskStats {
        generated_at: Utc::now(),
        total,
        completed,
        uncompleted,
        percent_completed,
    }
}

/// Round a completion percentage for display.
///
/// Ties round up (half away from zero), so 12.5 shows as 13.
pub fn display_percent(percent: f64) -> u32 {
    percent.round() as u32
}
