//! Task store for taskmaster.
//!
//! The store owns the in-memory collection. Every mutation persists the full
//! collection through a storage slot before it becomes visible.
//!
//! # Example
//!
//! ```
//! use taskmaster::storage::MemoryStorage;
//! use taskmaster::store::{Bootstrap, Confirmation, TaskStore};
//!
//! let mut store = TaskStore::open(MemoryStorage::new(), Bootstrap::Empty)?;
//! let task = store.create("Water the plants")?;
//! store.toggle_completion(task.id)?;
//! assert_eq!(store.clear_completed(Confirmation::granted())?, 1);
//! # Ok::<(), taskmaster::TaskError>(())
//! ```

mod sample;
mod task_store;

pub use sample::sample_tasks;
pub use task_store::{Bootstrap, Confirmation, TaskStore};
