//! Status update store trait and in-memory implementation

use std::collections::HashMap;
use std::sync::Mutex;

use thiserror::Error;

use super::models::StatusUpdate;

/// Lookup miss for a status update id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("status update {0} not found")]
pub struct StatusUpdateNotFound(pub usize);

/// Trait for fetching status updates by id.
///
/// Production implementations delegate to the content service; absence of
/// the id is the only failure surfaced through this seam.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait StatusUpdateStore: Send + Sync {
    /// Fetches a status update given its id.
    /// Returns Err(StatusUpdateNotFound) if no such status update exists.
    fn get_status_update(
        &self,
        status_update_id: usize,
    ) -> Result<StatusUpdate, StatusUpdateNotFound>;
}

/// A status update store held in memory.
///
/// Backs tests and small single-process deployments.
pub struct InMemoryStatusUpdateStore {
    updates: Mutex<HashMap<usize, StatusUpdate>>,
}

impl InMemoryStatusUpdateStore {
    pub fn new() -> Self {
        Self {
            updates: Mutex::new(HashMap::new()),
        }
    }

    /// Adds a status update, replacing any previous one with the same id.
    pub fn insert(&self, status_update: StatusUpdate) {
        self.updates
            .lock()
            .unwrap()
            .insert(status_update.id, status_update);
    }
}

impl Default for InMemoryStatusUpdateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusUpdateStore for InMemoryStatusUpdateStore {
    fn get_status_update(
        &self,
        status_update_id: usize,
    ) -> Result<StatusUpdate, StatusUpdateNotFound> {
        self.updates
            .lock()
            .unwrap()
            .get(&status_update_id)
            .copied()
            .ok_or(StatusUpdateNotFound(status_update_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_status_update_resolves() {
        let store = InMemoryStatusUpdateStore::new();
        store.insert(StatusUpdate::new(9000, 567));

        assert_eq!(store.get_status_update(9000), Ok(StatusUpdate::new(9000, 567)));
    }

    #[test]
    fn test_missing_status_update_is_not_found() {
        let store = InMemoryStatusUpdateStore::new();

        assert_eq!(store.get_status_update(9000), Err(StatusUpdateNotFound(9000)));
    }
}
