//! Persistence boundary around [`AppState`].
//!
//! The session only needs three things from storage: read the snapshot once,
//! overwrite it after each mutation, and drop it on a full reset.

use std::sync::Mutex;

use crate::error::StorageError;

/// Well-known key the whole state is stored under.
pub const STORAGE_KEY: &str = "fibroBalanceDataV1";

/// Load/save contract for the combined state snapshot.
///
/// Payloads are the JSON text of the state; decoding is the session's job
/// so every backend stays a dumb blob store.
pub trait StateGateway: Send {
    /// The stored snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Overwrite the stored snapshot.
    fn save(&self, payload: &str) -> Result<(), StorageError>;

    /// Remove the stored snapshot entirely.
    fn clear(&self) -> Result<(), StorageError>;
}

/// Keeps the snapshot in process memory.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    payload: Mutex<Option<String>>,
}

impl MemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `payload` already stored.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: Mutex::new(Some(payload.into())),
        }
    }

    /// Current snapshot, for inspection.
    pub fn snapshot(&self) -> Option<String> {
        self.payload.lock().ok().and_then(|p| p.clone())
    }
}

impl StateGateway for MemoryGateway {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .payload
            .lock()
            .map_err(|_| StorageError::QueryFailed("memory gateway poisoned".into()))?;
        Ok(guard.clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|_| StorageError::QueryFailed("memory gateway poisoned".into()))?;
        *guard = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        let mut guard = self
            .payload
            .lock()
            .map_err(|_| StorageError::QueryFailed("memory gateway poisoned".into()))?;
        *guard = None;
        Ok(())
    }
}

impl<G: StateGateway + Sync> StateGateway for std::sync::Arc<G> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        (**self).save(payload)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_gateway_lifecycle() {
        let gw = MemoryGateway::new();
        assert!(gw.load().unwrap().is_none());
        gw.save("{}").unwrap();
        assert_eq!(gw.load().unwrap().as_deref(), Some("{}"));
        gw.clear().unwrap();
        assert!(gw.snapshot().is_none());
    }
}
