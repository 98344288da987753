//! Storage trait definition.

use log::{debug, warn};

use super::codec;
use crate::domain::Task;
use crate::error::Result;

/// A single key-value slot holding the serialized task collection.
///
/// Implementors only move opaque payloads; encoding and the
/// malformed-data policy live in the provided methods.
pub trait TaskStorage: Send + Sync {
    /// Read the raw payload. `Ok(None)` means nothing has been stored yet.
    fn read_slot(&self) -> Result<Option<String>>;

    /// Overwrite the slot with `payload`. Last write wins.
    fn write_slot(&self, payload: &str) -> Result<()>;

    /// Load the stored collection, propagating read and parse failures.
    fn try_load(&self) -> Result<Vec<Task>> {
        match self.read_slot()? {
            Some(payload) => codec::decode(&payload),
            None => Ok(Vec::new()),
        }
    }

    /// Load the stored collection.
    ///
    /// Absent, unreadable and malformed data all yield an empty collection.
    fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => {
                debug!("Loaded {} tasks from storage", tasks.len());
                tasks
            }
            Err(e) => {
                warn!("Stored tasks unreadable, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Write the full collection, replacing whatever was stored.
    fn save(&self, tasks: &[Task]) -> Result<()> {
        let payload = codec::encode(tasks)?;
        self.write_slot(&payload)?;
        debug!("Saved {} tasks to storage", tasks.len());
        Ok(())
    }
}
