//! Aggregate counters over a task snapshot.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// Collection counters shown alongside the list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
    /// Pending tasks due on `today`
    pub due_today: usize,
}

/// Compute counters for `tasks` as of `today`.
pub fn stats(tasks: &[Task], today: NaiveDate) -> Stats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.completed).count();
    let due_today = tasks.iter().filter(|t| !t.completed && t.is_due_on(today)).count();

    Stats {
        total,
        pending: total - completed,
        completed,
        due_today,
    }
}
