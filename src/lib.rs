//! Chirper Notifications Library
//!
//! The notification aggregation core of the Chirper status-update service.
//! It assembles a user's notification feed from the raw notification records
//! and exposes the collaborator seams (record store, user directory, status
//! update store, metrics emitter) so the embedding application can plug in
//! its production backends.

pub mod metrics;
pub mod notifications;
pub mod status_update;
pub mod user;

// Re-export commonly used types for convenience
pub use metrics::{MetricEvent, MetricsEmitter, NoOpMetricsEmitter, PrometheusEmitter};
pub use notifications::{
    FetchError, InMemoryRecordStore, Notification, NotificationKind, NotificationRecord,
    NotificationService, RecordStore,
};
pub use status_update::{InMemoryStatusUpdateStore, StatusUpdate, StatusUpdateStore};
pub use user::{InMemoryUserDirectory, UserDirectory, UserRef};
