//! Domain types for taskmaster
//!
//! - Task: the single user-managed to-do item
//! - Priority: high / medium / low
//! - TaskPatch: a partial edit applied by the store
//! - DueStatus: overdue / today / soon classification of a due date

pub mod due;
pub mod task;

pub use due::{DueStatus, SOON_WINDOW_DAYS, due_status};
pub use task::{DEFAULT_CATEGORY, Priority, Task, TaskId, TaskPatch, parse_date};
