//! ID generation utilities for taskmaster
//!
//! Task ids are integers derived from the creation time in milliseconds,
//! bumped past the last issued id so rapid successive creates never collide.

use chrono::{DateTime, Utc};

use crate::domain::TaskId;
use crate::error::{Result, TaskError};

/// Issues unique task ids for one collection.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    /// Create a generator that will never reissue any of `existing`.
    pub fn seeded(existing: impl IntoIterator<Item = TaskId>) -> Self {
        Self {
            last: existing.into_iter().max().unwrap_or(0),
        }
    }

    /// Next id for a task created at `now`.
    ///
    /// Format: milliseconds since Unix epoch, or `last + 1` if that is not
    /// strictly greater than the last id issued. Fails once the id space
    /// above the highest existing id is used up.
    pub fn next_id(&mut self, now: DateTime<Utc>) -> Result<TaskId> {
        let floor = self
            .last
            .checked_add(1)
            .ok_or_else(|| TaskError::Storage(format!("no task id left after {}", self.last)))?;
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        let id = candidate.max(floor);
        self.last = id;
        Ok(id)
    }
}
