//! User notifications module

mod models;
mod service;
mod store;

pub use models::{Notification, NotificationKind};
pub use service::{FetchError, NotificationService, ResolutionError, FETCH_NOTIFICATIONS_EVENT};
pub use store::{
    InMemoryRecordStore, NotificationRecord, RecordPredicate, RecordStore, StoreError,
    NOTIFICATIONS_TABLE,
};
