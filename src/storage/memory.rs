//! In-memory storage slot.

use std::sync::{Arc, Mutex};

use super::traits::TaskStorage;
use crate::error::{Result, TaskError};

#[derive(Debug, Default)]
struct MemorySlot {
    payload: Option<String>,
    writes: usize,
    fail_writes: bool,
}

/// Holds the serialized collection in memory.
///
/// Clones share one slot, so a test can keep a handle and inspect what the
/// store wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Arc<Mutex<MemorySlot>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `payload` already stored.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        let storage = Self::default();
        if let Ok(mut slot) = storage.slot.lock() {
            slot.payload = Some(payload.into());
        }
        storage
    }

    /// Current raw payload.
    pub fn payload(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.payload.clone())
    }

    /// Number of successful writes so far.
    pub fn writes(&self) -> usize {
        self.slot.lock().map(|slot| slot.writes).unwrap_or(0)
    }

    /// Make subsequent writes fail with a storage error.
    pub fn set_fail_writes(&self, fail: bool) {
        if let Ok(mut slot) = self.slot.lock() {
            slot.fail_writes = fail;
        }
    }
}

impl TaskStorage for MemoryStorage {
    fn read_slot(&self) -> Result<Option<String>> {
        let slot = self.slot.lock().map_err(|e| TaskError::Storage(e.to_string()))?;
        Ok(slot.payload.clone())
    }

    fn write_slot(&self, payload: &str) -> Result<()> {
        let mut slot = self.slot.lock().map_err(|e| TaskError::Storage(e.to_string()))?;
        if slot.fail_writes {
            return Err(TaskError::Storage("memory slot rejected write".to_string()));
        }
        slot.payload = Some(payload.to_string());
        slot.writes += 1;
        Ok(())
    }
}
