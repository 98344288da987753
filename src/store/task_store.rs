//! TaskStore implementation.
//!
//! The TaskStore owns the authoritative, insertion-ordered task collection
//! and persists the whole collection through a [`TaskStorage`] slot after
//! every mutation.
//!
//! Mutations are built against a copy of the collection and only become
//! visible once the save succeeds, so a failed call leaves both memory and
//! storage as they were.

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::sample::sample_tasks;
use crate::clock::{Clock, SystemClock};
use crate::domain::{Task, TaskId, TaskPatch};
use crate::error::{Result, TaskError};
use crate::id::IdGenerator;
use crate::query::{self, ViewQuery};
use crate::stats::{self, Stats};
use crate::storage::TaskStorage;

/// What to do when the loaded collection is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Bootstrap {
    /// Seed the sample tasks and persist them
    #[default]
    SampleData,
    /// Start with an empty collection
    Empty,
}

/// Proof that the user agreed to a destructive bulk operation.
///
/// The front end obtains this (prompt, `--yes` flag, dialog) before calling
/// [`TaskStore::clear_completed`] or [`TaskStore::delete_all`]; the store
/// never prompts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    _private: (),
}

impl Confirmation {
    /// Record that the user confirmed.
    pub fn granted() -> Self {
        Self { _private: () }
    }
}

/// TaskStore manages the task collection and its persistence.
pub struct TaskStore<S: TaskStorage, C: Clock = SystemClock> {
    storage: S,
    clock: C,
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl<S: TaskStorage> TaskStore<S, SystemClock> {
    /// Open a store on `storage` using wall-clock time.
    pub fn open(storage: S, bootstrap: Bootstrap) -> Result<Self> {
        Self::open_with_clock(storage, SystemClock, bootstrap)
    }
}

impl<S: TaskStorage, C: Clock> TaskStore<S, C> {
    /// Open a store on `storage` with an explicit clock.
    ///
    /// Absent or unreadable stored data counts as empty. An empty collection
    /// is seeded with sample tasks when `bootstrap` asks for it, and the
    /// seed is saved immediately. A failed seed save is logged and the seed
    /// stays in memory only.
    pub fn open_with_clock(storage: S, clock: C, bootstrap: Bootstrap) -> Result<Self> {
        let mut tasks = storage.load();

        if tasks.is_empty() && bootstrap == Bootstrap::SampleData {
            tasks = sample_tasks(clock.now(), clock.today());
            match storage.save(&tasks) {
                Ok(()) => info!("Seeded {} sample tasks", tasks.len()),
                Err(e) => warn!("Could not persist {} sample tasks: {}", tasks.len(), e),
            }
        }

        let ids = IdGenerator::seeded(tasks.iter().map(|t| t.id));
        debug!("Opened task store with {} tasks", tasks.len());

        Ok(Self {
            storage,
            clock,
            tasks,
            ids,
        })
    }

    /// Read-only view of the collection in insertion order.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Look up one task.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Today's date according to the store's clock.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Query the collection as of today.
    pub fn view(&self, query: &ViewQuery) -> Vec<&Task> {
        query::view(&self.tasks, query, self.today())
    }

    /// Counters for the collection as of today.
    pub fn stats(&self) -> Stats {
        stats::stats(&self.tasks, self.today())
    }

    /// Get the underlying storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Get the store's clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Create a task with default fields.
    ///
    /// Fails with `TaskError::Validation` if `text` trims to empty.
    pub fn create(&mut self, text: &str) -> Result<Task> {
        self.create_with(text, &TaskPatch::default())
    }

    /// Create a task and set any fields given in `fields` in the same write.
    ///
    /// A `fields.text` replaces `text`. The new task has
    /// `updated_at == created_at`.
    pub fn create_with(&mut self, text: &str, fields: &TaskPatch) -> Result<Task> {
        let now = self.clock.now();
        let mut task = Task::new(0, text, now)?;
        task.assign(fields)?;
        task.id = self.ids.next_id(now)?;

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!("Created task {}: {}", task.id, task.text);
        Ok(task)
    }

    /// Apply `patch` to the task with `id` and refresh its `updated_at`.
    pub fn update(&mut self, id: TaskId, patch: &TaskPatch) -> Result<Task> {
        let now = self.clock.now();
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        next[index].apply(patch, now)?;
        let task = next[index].clone();
        self.commit(next)?;

        info!("Updated task {}", id);
        Ok(task)
    }

    /// Flip completion of the task with `id`.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Task> {
        let now = self.clock.now();
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        next[index].toggle(now);
        let task = next[index].clone();
        self.commit(next)?;

        info!(
            "Task {} marked as {}",
            id,
            if task.completed { "completed" } else { "pending" }
        );
        Ok(task)
    }

    /// Remove the task with `id`, returning it.
    pub fn delete(&mut self, id: TaskId) -> Result<Task> {
        let index = self.index_of(id)?;

        let mut next = self.tasks.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!("Deleted task {}", id);
        Ok(removed)
    }

    /// Remove every completed task and return how many went.
    ///
    /// Nothing is written when no task is completed.
    pub fn clear_completed(&mut self, _confirmed: Confirmation) -> Result<usize> {
        let next: Vec<Task> = self.tasks.iter().filter(|t| !t.completed).cloned().collect();
        let removed = self.tasks.len() - next.len();
        if removed == 0 {
            debug!("No completed tasks to clear");
            return Ok(0);
        }

        self.commit(next)?;
        info!("Cleared {} completed tasks", removed);
        Ok(removed)
    }

    /// Remove every task and return how many went.
    pub fn delete_all(&mut self, _confirmed: Confirmation) -> Result<usize> {
        let removed = self.tasks.len();
        self.commit(Vec::new())?;
        info!("Deleted all {} tasks", removed);
        Ok(removed)
    }

    fn index_of(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))
    }

    /// Persist `next`, then make it the live collection.
    fn commit(&mut self, next: Vec<Task>) -> Result<()> {
        if let Err(e) = self.storage.save(&next) {
            warn!("Save failed, keeping previous state: {}", e);
            return Err(e);
        }
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::domain::Priority;
    use crate::storage::MemoryStorage;
    use chrono::{Duration, TimeZone, Utc};

    fn clock() -> FixedClock {
        FixedClock::new(Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap())
    }

    fn empty_store() -> (TaskStore<MemoryStorage, FixedClock>, MemoryStorage) {
        let storage = MemoryStorage::new();
        let store = TaskStore::open_with_clock(storage.clone(), clock(), Bootstrap::Empty).unwrap();
        (store, storage)
    }

    #[test]
    fn test_open_empty_without_seeding() {
        let (store, storage) = empty_store();
        assert!(store.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_open_seeds_sample_data() {
        let storage = MemoryStorage::new();
        let store = TaskStore::open_with_clock(storage.clone(), clock(), Bootstrap::SampleData).unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(storage.writes(), 1);
        assert_eq!(storage.try_load().unwrap(), store.all());
    }

    #[test]
    fn test_open_malformed_seeds_sample_data() {
        let storage = MemoryStorage::with_payload("][");
        let store = TaskStore::open_with_clock(storage, clock(), Bootstrap::SampleData).unwrap();
        assert_eq!(store.len(), 7);
    }

    #[test]
    fn test_open_keeps_seed_when_save_fails() {
        let storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let store = TaskStore::open_with_clock(storage.clone(), clock(), Bootstrap::SampleData).unwrap();
        assert_eq!(store.len(), 7);
        assert_eq!(storage.payload(), None);
    }

    #[test]
    fn test_create_after_highest_possible_id_fails() {
        let payload = format!(
            r#"[{{"id":{},"text":"Last one","completed":false,"priority":"low","category":"personal","dueDate":"","createdAt":"2026-10-01T00:00:00Z","updatedAt":"2026-10-01T00:00:00Z"}}]"#,
            u64::MAX
        );
        let storage = MemoryStorage::with_payload(payload);
        let mut store = TaskStore::open_with_clock(storage.clone(), clock(), Bootstrap::Empty).unwrap();
        assert_eq!(store.len(), 1);

        let writes = storage.writes();
        assert!(matches!(store.create("next"), Err(TaskError::Storage(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes(), writes);
    }

    #[test]
    fn test_create() {
        let (mut store, storage) = empty_store();
        let task = store.create("  Write tests ").unwrap();

        assert_eq!(task.text, "Write tests");
        assert!(!task.completed);
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.updated_at, task.created_at);
        assert_eq!(store.all(), &[task]);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_create_rejects_blank() {
        let (mut store, storage) = empty_store();
        let err = store.create("   ").unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert!(store.is_empty());
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_create_with_fields_single_write() {
        let (mut store, storage) = empty_store();
        let due = store.today() + Duration::days(2);
        let fields = TaskPatch::new().priority(Priority::High).category("work").due_date(Some(due));

        let task = store.create_with("Ship it", &fields).unwrap();

        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.category, "work");
        assert_eq!(task.due_date, Some(due));
        assert_eq!(task.updated_at, task.created_at);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_rapid_creates_get_unique_ids() {
        let (mut store, _) = empty_store();
        let a = store.create("a").unwrap();
        let b = store.create("b").unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ids_do_not_collide_with_loaded_tasks() {
        let storage = MemoryStorage::new();
        let clock = FixedClock::new(Utc.timestamp_millis_opt(5).unwrap());
        let mut store = TaskStore::open_with_clock(storage, clock, Bootstrap::SampleData).unwrap();
        let task = store.create("after samples").unwrap();
        assert!(task.id > 7);
    }

    #[test]
    fn test_update() {
        let (mut store, storage) = empty_store();
        let task = store.create("Draft").unwrap();
        store.clock().advance(Duration::minutes(1));

        let updated = store.update(task.id, &TaskPatch::new().text(" Final ")).unwrap();

        assert_eq!(updated.text, "Final");
        assert!(updated.updated_at > task.updated_at);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(store.get(task.id), Some(&updated));
        assert_eq!(storage.writes(), 2);
    }

    #[test]
    fn test_update_not_found() {
        let (mut store, storage) = empty_store();
        let err = store.update(99, &TaskPatch::new().text("x")).unwrap_err();
        assert!(matches!(err, TaskError::NotFound(99)));
        assert_eq!(storage.writes(), 0);
    }

    #[test]
    fn test_update_blank_text_rejected() {
        let (mut store, storage) = empty_store();
        let task = store.create("Draft").unwrap();
        let err = store.update(task.id, &TaskPatch::new().text(" ")).unwrap_err();
        assert!(matches!(err, TaskError::Validation(_)));
        assert_eq!(store.get(task.id), Some(&task));
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_toggle_twice() {
        let (mut store, storage) = empty_store();
        let task = store.create("Flip").unwrap();

        let once = store.toggle_completion(task.id).unwrap();
        let twice = store.toggle_completion(task.id).unwrap();

        assert!(once.completed);
        assert!(!twice.completed);
        assert!(once.updated_at > task.updated_at);
        assert!(twice.updated_at > once.updated_at);
        assert_eq!(storage.writes(), 3);
    }

    #[test]
    fn test_toggle_not_found() {
        let (mut store, _) = empty_store();
        assert!(matches!(store.toggle_completion(1), Err(TaskError::NotFound(1))));
    }

    #[test]
    fn test_delete() {
        let (mut store, storage) = empty_store();
        let a = store.create("a").unwrap();
        let b = store.create("b").unwrap();

        let removed = store.delete(a.id).unwrap();

        assert_eq!(removed, a);
        assert_eq!(store.all(), &[b]);
        assert_eq!(storage.writes(), 3);
    }

    #[test]
    fn test_delete_not_found_writes_nothing() {
        let (mut store, storage) = empty_store();
        store.create("a").unwrap();
        assert!(matches!(store.delete(12345), Err(TaskError::NotFound(12345))));
        assert_eq!(store.len(), 1);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_clear_completed_keeps_order() {
        let (mut store, storage) = empty_store();
        let a = store.create("a").unwrap();
        let b = store.create("b").unwrap();
        let c = store.create("c").unwrap();
        let d = store.create("d").unwrap();
        store.toggle_completion(b.id).unwrap();
        store.toggle_completion(d.id).unwrap();
        let writes_before = storage.writes();

        let removed = store.clear_completed(Confirmation::granted()).unwrap();

        assert_eq!(removed, 2);
        let remaining: Vec<u64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![a.id, c.id]);
        assert_eq!(storage.writes(), writes_before + 1);
    }

    #[test]
    fn test_clear_completed_none_does_not_write() {
        let (mut store, storage) = empty_store();
        store.create("a").unwrap();
        assert_eq!(store.clear_completed(Confirmation::granted()).unwrap(), 0);
        assert_eq!(storage.writes(), 1);
    }

    #[test]
    fn test_delete_all() {
        let storage = MemoryStorage::new();
        let mut store = TaskStore::open_with_clock(storage.clone(), clock(), Bootstrap::SampleData).unwrap();

        let removed = store.delete_all(Confirmation::granted()).unwrap();

        assert_eq!(removed, 7);
        assert_eq!(store.stats(), Stats::default());
        assert_eq!(storage.payload().as_deref(), Some("[]"));
    }

    #[test]
    fn test_failed_save_leaves_state_unchanged() {
        let (mut store, storage) = empty_store();
        let task = store.create("keep me").unwrap();
        storage.set_fail_writes(true);

        assert!(store.create("lost").is_err());
        assert!(store.toggle_completion(task.id).is_err());
        assert!(store.delete(task.id).is_err());
        assert!(store.delete_all(Confirmation::granted()).is_err());

        assert_eq!(store.all(), &[task.clone()]);
        assert_eq!(storage.try_load().unwrap(), vec![task]);
    }

    #[test]
    fn test_view_and_stats_use_clock_today() {
        let (mut store, _) = empty_store();
        let today = store.today();
        store
            .create_with("due now", &TaskPatch::new().due_date(Some(today)))
            .unwrap();
        store.create("whenever").unwrap();

        let due = store.view(&ViewQuery::new(query::FilterMode::Today, "", query::SortMode::Newest));
        assert_eq!(due.len(), 1);
        assert_eq!(store.stats().due_today, 1);

        store.clock().advance(Duration::days(1));
        assert_eq!(store.stats().due_today, 0);
    }
}
