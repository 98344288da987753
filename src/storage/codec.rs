//! JSON encoding of the task collection.
//!
//! The payload is a JSON array of task records. Decoding rejects payloads
//! that would break collection invariants (duplicate ids, blank text).

use std::collections::HashSet;

use crate::domain::Task;
use crate::error::{Result, TaskError};

/// Serialize the collection as a compact JSON array.
pub fn encode(tasks: &[Task]) -> Result<String> {
    Ok(serde_json::to_string(tasks)?)
}

/// Parse a JSON array of tasks.
pub fn decode(payload: &str) -> Result<Vec<Task>> {
    if payload.trim().is_empty() {
        return Ok(Vec::new());
    }

    let tasks: Vec<Task> = serde_json::from_str(payload)?;

    let mut seen = HashSet::with_capacity(tasks.len());
    for task in &tasks {
        if !seen.insert(task.id) {
            return Err(TaskError::Storage(format!("duplicate task id {}", task.id)));
        }
        if task.text.trim().is_empty() {
            return Err(TaskError::Storage(format!("task {} has empty text", task.id)));
        }
    }

    Ok(tasks)
}
