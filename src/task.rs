//! Task records and the mutable store.
//!
//! The store owns the canonical ordered task list and the active filter.
//! Consumers mutate it through the operations here and read it through
//! [`Snapshot`] plus the projections in [`crate::filter`] and
//! [`crate::stats`]; nothing else touches the internals.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::filter::FilterMode;
use crate::ids::IdAllocator;

/// One to-do entry.
///
/// The id is assigned at creation and never changes. Text is free-form
/// and may be empty; no validation happens anywhere in the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub is_complete: bool,
}

/// Point-in-time pairing of the task list and the active filter.
///
/// The sole input to both projections. Same snapshot in, same view out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub filter: FilterMode,
}

/// Ordered task list with id-keyed lookup and the active filter mode.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    index_by_id: HashMap<u64, usize>,
    filter: FilterMode,
    ids: IdAllocator,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a non-default filter, e.g. from configuration.
    pub fn with_filter(filter: FilterMode) -> Self {
        Self {
            filter,
            ..Self::default()
        }
    }

    /// Append a new task and return its id.
    ///
    /// Empty text is accepted and stored verbatim.
    pub fn add_task(&mut self, text: impl Into<String>) -> u64 {
        let id = self.ids.next();
        self.index_by_id.insert(id, self.tasks.len());
        self.tasks.push(Task {
            id,
            text: text.into(),
            is_complete: false,
        });
        debug!(id, total = self.tasks.len(), "task added");
        id
    }

    /// Replace the text of the task with the given id, in place.
    pub fn edit_task_text(&mut self, id: u64, new_text: impl Into<String>) -> Result<()> {
        let position = self.position_of(id)?;
        self.tasks[position].text = new_text.into();
        debug!(id, "task text edited");
        Ok(())
    }

    /// Flip the completion flag and return the new value.
    pub fn toggle_complete(&mut self, id: u64) -> Result<bool> {
        let position = self.position_of(id)?;
        let task = &mut self.tasks[position];
        task.is_complete = !task.is_complete;
        debug!(id, is_complete = task.is_complete, "task toggled");
        Ok(task.is_complete)
    }

    /// Remove the task with the given id and return it.
    ///
    /// Tasks after it shift down one position; their relative order is
    /// preserved.
    pub fn delete_task(&mut self, id: u64) -> Result<Task> {
        let position = self.position_of(id)?;
        self.index_by_id.remove(&id);
        let removed = self.tasks.remove(position);
        for entry in self.index_by_id.values_mut() {
            if *entry > position {
                *entry -= 1;
            }
        }
        debug!(id, remaining = self.tasks.len(), "task deleted");
        Ok(removed)
    }

    /// Drop every task. The filter and the id counter are untouched, so
    /// ids stay unique across the store's whole lifetime.
    pub fn clear_all(&mut self) {
        self.tasks.clear();
        self.index_by_id.clear();
        debug!("all tasks cleared");
    }

    pub fn set_filter(&mut self, filter: FilterMode) {
        self.filter = filter;
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.index_by_id
            .get(&id)
            .and_then(|position| self.tasks.get(*position))
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Current state as the projection input.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tasks: self.tasks.clone(),
            filter: self.filter,
        }
    }

    fn position_of(&self, id: u64) -> Result<usize> {
        self.index_by_id
            .get(&id)
            .copied()
            .ok_or(Error::TaskNotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(texts: &[&str]) -> TaskStore {
        let mut store = TaskStore::new();
        for text in texts {
            store.add_task(*text);
        }
        store
    }

    #[test]
    fn add_assigns_increasing_ids_and_appends() {
        let store = store_with(&["first", "second", "third"]);
        let ids: Vec<u64> = store.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(store.tasks().iter().all(|task| !task.is_complete));
    }

    #[test]
    fn add_accepts_empty_text() {
        let mut store = TaskStore::new();
        let id = store.add_task("");
        assert_eq!(store.get(id).map(|task| task.text.as_str()), Some(""));
    }

    #[test]
    fn edit_changes_text_only() {
        let mut store = store_with(&["a", "b"]);
        store.toggle_complete(1).unwrap();
        store.edit_task_text(1, "renamed").unwrap();

        let task = store.get(1).unwrap();
        assert_eq!(task.text, "renamed");
        assert!(task.is_complete);
        assert_eq!(store.tasks()[1].id, 1);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = store_with(&["a"]);
        assert!(store.toggle_complete(0).unwrap());
        assert!(!store.toggle_complete(0).unwrap());
        assert!(!store.get(0).unwrap().is_complete);
    }

    #[test]
    fn delete_preserves_order_of_remaining_tasks() {
        let mut store = store_with(&["a", "b", "c", "d"]);
        let removed = store.delete_task(1).unwrap();
        assert_eq!(removed.text, "b");

        let ids: Vec<u64> = store.tasks().iter().map(|task| task.id).collect();
        assert_eq!(ids, vec![0, 2, 3]);
        assert!(store.get(1).is_none());
    }

    #[test]
    fn lookup_stays_consistent_after_delete() {
        let mut store = store_with(&["a", "b", "c"]);
        store.delete_task(0).unwrap();

        assert_eq!(store.get(1).map(|task| task.text.as_str()), Some("b"));
        assert_eq!(store.get(2).map(|task| task.text.as_str()), Some("c"));
        store.edit_task_text(2, "still reachable").unwrap();
        assert_eq!(store.tasks()[1].text, "still reachable");
    }

    #[test]
    fn missing_ids_are_reported_not_ignored() {
        let mut store = store_with(&["a"]);
        assert!(matches!(
            store.edit_task_text(9, "x"),
            Err(Error::TaskNotFound(9))
        ));
        assert!(matches!(
            store.toggle_complete(9),
            Err(Error::TaskNotFound(9))
        ));
        assert!(matches!(store.delete_task(9), Err(Error::TaskNotFound(9))));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_all_keeps_filter_and_id_counter() {
        let mut store = store_with(&["a", "b"]);
        store.set_filter(FilterMode::ShowCompleted);
        store.clear_all();

        assert!(store.is_empty());
        assert_eq!(store.filter(), FilterMode::ShowCompleted);

        let next = store.add_task("after clear");
        assert_eq!(next, 2);
    }

    #[test]
    fn snapshot_captures_tasks_and_filter() {
        let mut store = store_with(&["a"]);
        store.set_filter(FilterMode::ShowUncompleted);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.tasks.len(), 1);
        assert_eq!(snapshot.filter, FilterMode::ShowUncompleted);
    }
}
