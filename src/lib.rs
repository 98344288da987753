//! taskmaster - a local, single-user task list manager
//!
//! The core is an in-memory task collection ([`store::TaskStore`]) that
//! persists itself through a single storage slot, plus pure query and
//! statistics functions over snapshots of that collection.

pub mod clock;
pub mod domain;
pub mod error;
pub mod id;
pub mod query;
pub mod stats;
pub mod storage;
pub mod store;

pub use clock::{Clock, FixedClock, SystemClock};
pub use domain::{DueStatus, Priority, Task, TaskId, TaskPatch, due_status};
pub use error::{Result, TaskError};
pub use query::{FilterMode, SortMode, ViewQuery, view};
pub use stats::{Stats, stats};
pub use storage::{JsonFileStorage, MemoryStorage, TaskStorage};
pub use store::{Bootstrap, Confirmation, TaskStore};
