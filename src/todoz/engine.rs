//! The task-list engine.
//!
//! [`TaskListEngine`] owns the ordered task list (newest first) and the display
//! filter, and exposes the operations the UI event source drives: add, toggle,
//! edit, delete, clear-completed, change-filter. Every operation that changes
//! state persists through the [`StateStore`] and then re-derives the visible
//! view through the [`View`] seam before returning.
//!
//! One engine instance per application session; there are no process-wide
//! singletons and no interior threads. A failed persistence write surfaces as
//! an error but never rolls back the in-memory mutation.

use crate::edit::EditSession;
use crate::error::Result;
use crate::ids::IdSource;
use crate::model::{normalize_text, Filter, Task};
use crate::store::StateStore;
use uuid::Uuid;

/// Receives the derived view after every state change.
///
/// The engine never prints or owns a display surface; whatever is on the other
/// side of this trait does. Any `FnMut(&[Task], usize)` qualifies.
pub trait View {
    fn render(&mut self, visible: &[Task], items_left: usize);
}

impl<F: FnMut(&[Task], usize)> View for F {
    fn render(&mut self, visible: &[Task], items_left: usize) {
        self(visible, items_left)
    }
}

/// A view that ignores every render, for embedders that poll the engine
/// instead of listening to it.
pub fn null_view() -> Box<dyn View> {
    Box::new(|_: &[Task], _: usize| {})
}

/// Human-readable remaining-work label: "1 item left", "3 items left".
pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

pub struct TaskListEngine<S: StateStore> {
    store: S,
    ids: Box<dyn IdSource>,
    view: Box<dyn View>,
    tasks: Vec<Task>,
    filter: Filter,
}

impl<S: StateStore> TaskListEngine<S> {
    /// Load persisted state and render the initial view.
    ///
    /// Absent or corrupt storage comes back as an empty list and the All
    /// filter (the store's contract), so this only fails on real I/O errors.
    pub fn load(store: S, ids: Box<dyn IdSource>, view: Box<dyn View>) -> Result<Self> {
        let tasks = store.load_tasks()?;
        let filter = store.load_filter()?;
        let mut engine = Self {
            store,
            ids,
            view,
            tasks,
            filter,
        };
        engine.emit();
        Ok(engine)
    }

    /// Insert a new task at the front of the list. Blank text (after
    /// trimming) is a no-op.
    pub fn add_task(&mut self, text: &str) -> Result<()> {
        let Some(text) = normalize_text(text) else {
            return Ok(());
        };
        let task = Task::new(self.ids.next_id(), text);
        self.tasks.insert(0, task);
        self.persist_tasks()
    }

    /// Remove the task with this id. Unknown ids are an idempotent no-op.
    pub fn delete_task(&mut self, id: Uuid) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist_tasks()
    }

    /// Flip the completed flag on the task with this id; no-op when absent.
    pub fn toggle_task(&mut self, id: Uuid) -> Result<()> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        task.completed = !task.completed;
        self.persist_tasks()
    }

    /// Replace a task's text with the trimmed value. Text that trims to
    /// nothing deletes the task instead; unknown ids are a no-op.
    pub fn update_task_text(&mut self, id: Uuid, new_text: &str) -> Result<()> {
        let Some(text) = normalize_text(new_text) else {
            return self.delete_task(id);
        };
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(());
        };
        task.text = text;
        self.persist_tasks()
    }

    /// Drop every completed task.
    pub fn clear_completed(&mut self) -> Result<()> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        if self.tasks.len() == before {
            return Ok(());
        }
        self.persist_tasks()
    }

    /// Change the display filter. Persisted independently of task data.
    pub fn set_filter(&mut self, filter: Filter) -> Result<()> {
        self.filter = filter;
        let result = self.store.save_filter(filter);
        self.emit();
        result
    }

    // --- Pure derivations ---

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The full list, newest first, regardless of filter.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// The slice of the list the current filter admits, in list order.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| self.filter.admits(t)).collect()
    }

    /// Count of not-yet-completed tasks.
    pub fn items_left(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    pub fn items_left_label(&self) -> String {
        items_left_label(self.items_left())
    }

    // --- Edit-in-place ---

    /// Open an edit session for a task; `None` for unknown ids. The engine
    /// is not mutated until the session is committed.
    pub fn begin_edit(&self, id: Uuid) -> Option<EditSession> {
        let task = self.tasks.iter().find(|t| t.id == id)?;
        Some(EditSession::new(id, task.text.clone()))
    }

    /// Commit a session: the buffer becomes the task's text, or deletes the
    /// task when it trims to nothing.
    pub fn commit_edit(&mut self, session: EditSession) -> Result<()> {
        let (id, buffer) = session.into_parts();
        self.update_task_text(id, &buffer)
    }

    /// Discard a session without mutating anything, re-rendering from the
    /// unmodified state. The pre-edit text is restored exactly because it
    /// was never changed.
    pub fn cancel_edit(&mut self, session: EditSession) {
        let _ = session;
        self.emit();
    }

    // --- Persist + re-derive protocol ---

    fn persist_tasks(&mut self) -> Result<()> {
        // The view is re-derived even when the write fails: the in-memory
        // mutation stands either way, and the caller gets the error.
        let result = self.store.save_tasks(&self.tasks);
        self.emit();
        result
    }

    fn emit(&mut self) {
        let visible: Vec<Task> = self
            .tasks
            .iter()
            .filter(|t| self.filter.admits(t))
            .cloned()
            .collect();
        let items_left = self.items_left();
        self.view.render(&visible, items_left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialSource;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    fn engine() -> TaskListEngine<InMemoryStore> {
        engine_with(InMemoryStore::new())
    }

    fn engine_with(store: InMemoryStore) -> TaskListEngine<InMemoryStore> {
        TaskListEngine::load(store, Box::new(SequentialSource::new()), null_view()).unwrap()
    }

    type RenderLog = Rc<RefCell<Vec<(Vec<String>, usize)>>>;

    fn recording_engine() -> (TaskListEngine<InMemoryStore>, RenderLog) {
        let log: RenderLog = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let view = move |visible: &[Task], items_left: usize| {
            let texts = visible.iter().map(|t| t.text.clone()).collect();
            sink.borrow_mut().push((texts, items_left));
        };
        let engine = TaskListEngine::load(
            InMemoryStore::new(),
            Box::new(SequentialSource::new()),
            Box::new(view),
        )
        .unwrap();
        (engine, log)
    }

    fn visible_texts(engine: &TaskListEngine<InMemoryStore>) -> Vec<String> {
        engine
            .visible_tasks()
            .iter()
            .map(|t| t.text.clone())
            .collect()
    }

    #[test]
    fn test_add_inserts_newest_first() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine.add_task("Walk dog").unwrap();

        assert_eq!(visible_texts(&engine), vec!["Walk dog", "Buy milk"]);
    }

    #[test]
    fn test_add_sequences_keep_ids_unique() {
        let mut engine = engine();
        for i in 0..50 {
            engine.add_task(&format!("task {}", i)).unwrap();
        }

        let ids: HashSet<Uuid> = engine.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 50);
        // Still newest-first after the whole sequence
        assert_eq!(engine.tasks()[0].text, "task 49");
        assert_eq!(engine.tasks()[49].text, "task 0");
    }

    #[test]
    fn test_add_trims_text() {
        let mut engine = engine();
        engine.add_task("  Buy milk  ").unwrap();
        assert_eq!(engine.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn test_blank_add_is_a_noop() {
        let mut engine = engine();
        engine.add_task("").unwrap();
        engine.add_task("   ").unwrap();
        assert!(engine.tasks().is_empty());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        engine.delete_task(id).unwrap();
        assert!(engine.tasks().is_empty());

        // Absent id: no error, no change
        engine.delete_task(id).unwrap();
        engine.delete_task(Uuid::from_u128(999)).unwrap();
        assert!(engine.tasks().is_empty());
    }

    #[test]
    fn test_toggle_is_its_own_inverse() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        engine.toggle_task(id).unwrap();
        assert!(engine.tasks()[0].completed);

        engine.toggle_task(id).unwrap();
        assert!(!engine.tasks()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_a_noop() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine.toggle_task(Uuid::from_u128(999)).unwrap();
        assert!(!engine.tasks()[0].completed);
    }

    #[test]
    fn test_update_replaces_with_trimmed_text() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        engine.update_task_text(id, "  Buy oat milk  ").unwrap();
        assert_eq!(engine.tasks()[0].text, "Buy oat milk");
        assert_eq!(engine.tasks()[0].id, id);
    }

    #[test]
    fn test_update_to_blank_deletes() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        engine.update_task_text(id, "   ").unwrap();
        assert!(engine.tasks().is_empty());
    }

    #[test]
    fn test_update_unknown_id_is_a_noop() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine
            .update_task_text(Uuid::from_u128(999), "Walk dog")
            .unwrap();
        assert_eq!(visible_texts(&engine), vec!["Buy milk"]);
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine.add_task("Walk dog").unwrap();
        let id = engine.tasks()[1].id; // "Buy milk"
        engine.toggle_task(id).unwrap();

        engine.clear_completed().unwrap();
        let after_once = visible_texts(&engine);
        assert_eq!(after_once, vec!["Walk dog"]);

        engine.clear_completed().unwrap();
        assert_eq!(visible_texts(&engine), after_once);
    }

    #[test]
    fn test_filter_derivations_are_exact_ordered_subsets() {
        let mut engine = engine();
        engine.add_task("a").unwrap();
        engine.add_task("b").unwrap();
        engine.add_task("c").unwrap();
        let b = engine.tasks()[1].id;
        engine.toggle_task(b).unwrap();

        engine.set_filter(Filter::Active).unwrap();
        assert_eq!(visible_texts(&engine), vec!["c", "a"]);

        engine.set_filter(Filter::Completed).unwrap();
        assert_eq!(visible_texts(&engine), vec!["b"]);

        engine.set_filter(Filter::All).unwrap();
        assert_eq!(visible_texts(&engine), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_visible_tasks_does_not_mutate() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine.set_filter(Filter::Completed).unwrap();

        let before = engine.tasks().to_vec();
        let _ = engine.visible_tasks();
        let _ = engine.visible_tasks();
        assert_eq!(engine.tasks(), &before[..]);
        assert_eq!(engine.filter(), Filter::Completed);
    }

    #[test]
    fn test_items_left_label_pluralizes() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(2), "2 items left");
    }

    #[test]
    fn test_worked_example() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        engine.add_task("Walk dog").unwrap();

        assert_eq!(visible_texts(&engine), vec!["Walk dog", "Buy milk"]);
        assert_eq!(engine.items_left(), 2);

        let buy_milk = engine
            .tasks()
            .iter()
            .find(|t| t.text == "Buy milk")
            .unwrap()
            .id;
        engine.toggle_task(buy_milk).unwrap();
        assert_eq!(engine.items_left(), 1);
        assert_eq!(engine.items_left_label(), "1 item left");

        engine.set_filter(Filter::Completed).unwrap();
        assert_eq!(visible_texts(&engine), vec!["Buy milk"]);
    }

    #[test]
    fn test_loads_fixture_state() {
        let fixture = StoreFixture::new()
            .with_active_task("Buy milk")
            .with_completed_task("Walk dog")
            .with_filter(Filter::Active);

        let engine = engine_with(fixture.store);
        assert_eq!(engine.filter(), Filter::Active);
        assert_eq!(visible_texts(&engine), vec!["Buy milk"]);
        assert_eq!(engine.items_left(), 1);
    }

    #[test]
    fn test_write_failure_surfaces_but_keeps_mutation() {
        let store = InMemoryStore::new().fail_writes(true);
        let mut engine = engine_with(store);

        let err = engine.add_task("Buy milk");
        assert!(err.is_err());
        // The mutation is not rolled back
        assert_eq!(visible_texts(&engine), vec!["Buy milk"]);
        assert_eq!(engine.items_left(), 1);
    }

    #[test]
    fn test_view_renders_after_every_mutation() {
        let (mut engine, log) = recording_engine();
        log.borrow_mut().clear(); // drop the initial load render

        engine.add_task("Buy milk").unwrap();
        engine.add_task("Walk dog").unwrap();
        let id = engine.tasks()[1].id;
        engine.toggle_task(id).unwrap();
        engine.set_filter(Filter::Active).unwrap();

        let log = log.borrow();
        assert_eq!(log.len(), 4);
        assert_eq!(log[0], (vec!["Buy milk".to_string()], 1));
        assert_eq!(
            log[1],
            (vec!["Walk dog".to_string(), "Buy milk".to_string()], 2)
        );
        assert_eq!(
            log[2],
            (vec!["Walk dog".to_string(), "Buy milk".to_string()], 1)
        );
        assert_eq!(log[3], (vec!["Walk dog".to_string()], 1));
    }

    #[test]
    fn test_view_not_rendered_on_noops() {
        let (mut engine, log) = recording_engine();
        log.borrow_mut().clear();

        engine.add_task("   ").unwrap();
        engine.delete_task(Uuid::from_u128(999)).unwrap();
        engine.toggle_task(Uuid::from_u128(999)).unwrap();
        engine.clear_completed().unwrap();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_edit_commit_updates_text() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        let mut session = engine.begin_edit(id).unwrap();
        assert_eq!(session.buffer(), "Buy milk");
        session.set_buffer("Buy oat milk");
        engine.commit_edit(session).unwrap();

        assert_eq!(engine.tasks()[0].text, "Buy oat milk");
    }

    #[test]
    fn test_edit_commit_blank_deletes() {
        let mut engine = engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;

        let mut session = engine.begin_edit(id).unwrap();
        session.set_buffer("   ");
        engine.commit_edit(session).unwrap();

        assert!(engine.tasks().is_empty());
    }

    #[test]
    fn test_edit_cancel_restores_exact_pre_edit_text() {
        let (mut engine, log) = recording_engine();
        engine.add_task("Buy milk").unwrap();
        let id = engine.tasks()[0].id;
        log.borrow_mut().clear();

        let mut session = engine.begin_edit(id).unwrap();
        session.set_buffer("Something else entirely");
        engine.cancel_edit(session);

        assert_eq!(engine.tasks()[0].text, "Buy milk");
        // Cancel re-renders from the unmodified state
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0], (vec!["Buy milk".to_string()], 1));
    }

    #[test]
    fn test_begin_edit_unknown_id() {
        let engine = engine();
        assert!(engine.begin_edit(Uuid::from_u128(999)).is_none());
    }
}
