//! Notification record storage trait and in-memory implementation

use std::collections::HashMap;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::NotificationKind;
use super::service::FetchError;

/// Name of the table holding notification records.
pub const NOTIFICATIONS_TABLE: &str = "notifications";

/// A raw stored notification entry.
///
/// `fields[0]` is the kind tag; positions 1..N hold stringified integer ids
/// whose meaning depends on the kind. Records are immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationRecord {
    pub id: usize,
    pub fields: Vec<String>,
}

impl NotificationRecord {
    pub fn new<I, S>(id: usize, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// The record's kind, if the kind tag is recognized.
    pub fn kind(&self) -> Option<NotificationKind> {
        self.fields.first().and_then(|tag| NotificationKind::from_tag(tag))
    }

    /// The raw field at `index`, if present.
    pub fn field(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(String::as_str)
    }

    /// The field at `index` parsed as an id. None if absent or malformed.
    pub fn id_field(&self, index: usize) -> Option<usize> {
        self.fields.get(index).and_then(|field| field.parse().ok())
    }
}

/// Failure of the backing record store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backing store failure: {0}")]
    Backend(#[from] anyhow::Error),
}

/// Predicate applied to each record of a table scan.
///
/// Fallible because relevance checks resolve referenced entities through
/// collaborators that can fail.
pub type RecordPredicate<'a> = dyn FnMut(&NotificationRecord) -> Result<bool, FetchError> + 'a;

/// Trait for notification record storage backends.
pub trait RecordStore: Send + Sync {
    /// Returns the records of `table` for which `predicate` returned true,
    /// in original insertion order.
    ///
    /// An empty result is Ok, never an error. A predicate error aborts the
    /// scan and is returned unchanged; a backend failure surfaces as
    /// [`FetchError::Store`].
    fn query(
        &self,
        table: &str,
        predicate: &mut RecordPredicate<'_>,
    ) -> Result<Vec<NotificationRecord>, FetchError>;
}

/// A record store holding its tables in memory, in insertion order.
///
/// Backs tests and small single-process deployments; production stores
/// delegate to a database.
pub struct InMemoryRecordStore {
    tables: Mutex<HashMap<String, Vec<NotificationRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self {
            tables: Mutex::new(HashMap::new()),
        }
    }

    /// Appends a record to `table`, creating the table if needed.
    pub fn insert(&self, table: &str, record: NotificationRecord) {
        self.tables
            .lock()
            .unwrap()
            .entry(table.to_string())
            .or_default()
            .push(record);
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn query(
        &self,
        table: &str,
        predicate: &mut RecordPredicate<'_>,
    ) -> Result<Vec<NotificationRecord>, FetchError> {
        let tables = self.tables.lock().unwrap();
        let Some(records) = tables.get(table) else {
            return Ok(Vec::new());
        };

        let mut matched = Vec::new();
        for record in records {
            if predicate(record)? {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }
}
