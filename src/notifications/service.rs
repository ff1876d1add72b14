//! Notification aggregation service

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::metrics::{MetricEvent, MetricsEmitter};
use crate::status_update::{StatusUpdateNotFound, StatusUpdateStore};
use crate::user::{UserDirectory, UserNotFound};

use super::models::{Notification, NotificationKind};
use super::store::{NotificationRecord, RecordStore, StoreError, NOTIFICATIONS_TABLE};

/// Name of the usage event emitted after each successful fetch.
pub const FETCH_NOTIFICATIONS_EVENT: &str = "fetch_notifications";

/// A referenced entity could not be resolved while aggregating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolutionError {
    #[error(transparent)]
    User(#[from] UserNotFound),

    #[error(transparent)]
    StatusUpdate(#[from] StatusUpdateNotFound),
}

/// Failure of a notifications fetch.
///
/// The fetch is all-or-nothing: no retries, no defaults, no partial results.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("notifications query failed: {0}")]
    Store(#[from] StoreError),

    #[error("failed to resolve notification reference: {0}")]
    Resolution(#[from] ResolutionError),
}

impl From<UserNotFound> for FetchError {
    fn from(err: UserNotFound) -> Self {
        Self::Resolution(err.into())
    }
}

impl From<StatusUpdateNotFound> for FetchError {
    fn from(err: StatusUpdateNotFound) -> Self {
        Self::Resolution(err.into())
    }
}

/// Aggregates a user's notification feed from raw notification records.
///
/// Holds immutable references to its four collaborators, injected at
/// construction; an instance is frozen after creation and can be shared
/// across threads freely.
pub struct NotificationService {
    records: Arc<dyn RecordStore>,
    status_updates: Arc<dyn StatusUpdateStore>,
    users: Arc<dyn UserDirectory>,
    metrics: Arc<dyn MetricsEmitter>,
}

impl NotificationService {
    pub fn new(
        records: Arc<dyn RecordStore>,
        status_updates: Arc<dyn StatusUpdateStore>,
        users: Arc<dyn UserDirectory>,
        metrics: Arc<dyn MetricsEmitter>,
    ) -> Self {
        Self {
            records,
            status_updates,
            users,
            metrics,
        }
    }

    /// Fetches all notifications relevant to `user_id`, in record insertion
    /// order.
    ///
    /// A user is notified when someone follows them, or when one of their
    /// status updates is favorited, replied to, or reposted. Emits the
    /// `fetch_notifications` usage event exactly once per successful call;
    /// any resolution or store failure aborts the whole fetch and skips the
    /// emission.
    pub fn fetch_notifications(&self, user_id: usize) -> Result<Vec<Notification>, FetchError> {
        let user_id_field = user_id.to_string();

        let mut relevant = |record: &NotificationRecord| -> Result<bool, FetchError> {
            let Some(kind) = record.kind() else {
                // Unrecognized kinds are dropped without any lookup.
                return Ok(false);
            };
            match kind {
                // Followed records address the target user directly; the
                // stored field must equal the id string exactly.
                NotificationKind::Followed => Ok(record.field(2) == Some(user_id_field.as_str())),
                // The other kinds are relevant iff the referenced status
                // update belongs to the user. For replies the check is
                // against the parent status update (field 2), not the reply.
                NotificationKind::Favorited
                | NotificationKind::Replied
                | NotificationKind::Reposted => {
                    let Some(status_update_id) = record.id_field(2) else {
                        return Ok(false);
                    };
                    let status_update = self.status_updates.get_status_update(status_update_id)?;
                    Ok(status_update.owner_id == user_id)
                }
            }
        };

        let matched = self.records.query(NOTIFICATIONS_TABLE, &mut relevant)?;

        let mut notifications = Vec::with_capacity(matched.len());
        for record in &matched {
            if let Some(notification) = self.build_notification(record)? {
                notifications.push(notification);
            }
        }

        self.metrics.emit(MetricEvent {
            name: FETCH_NOTIFICATIONS_EVENT,
            count: notifications.len(),
        });
        debug!(
            "Fetched {} notifications for user {}",
            notifications.len(),
            user_id
        );

        Ok(notifications)
    }

    /// Builds the typed notification for a matched record.
    ///
    /// Returns Ok(None) for records that cannot be dispatched (unrecognized
    /// kind, missing or malformed id fields); a matched record must never
    /// panic the fetch.
    fn build_notification(
        &self,
        record: &NotificationRecord,
    ) -> Result<Option<Notification>, FetchError> {
        let Some(kind) = record.kind() else {
            return Ok(None);
        };

        let notification = match kind {
            NotificationKind::Followed => {
                let (Some(follower_id), Some(followed_id)) =
                    (record.id_field(1), record.id_field(2))
                else {
                    return Ok(None);
                };
                Notification::Followed {
                    follower: self.users.get_user_ref(follower_id)?,
                    user: self.users.get_user_ref(followed_id)?,
                }
            }
            NotificationKind::Favorited => {
                let (Some(favoriter_id), Some(status_update_id)) =
                    (record.id_field(1), record.id_field(2))
                else {
                    return Ok(None);
                };
                Notification::Favorited {
                    favoriter: self.users.get_user_ref(favoriter_id)?,
                    status_update: self.status_updates.get_status_update(status_update_id)?,
                }
            }
            NotificationKind::Replied => {
                let (Some(sender_id), Some(status_update_id), Some(reply_id)) = (
                    record.id_field(1),
                    record.id_field(2),
                    record.id_field(3),
                ) else {
                    return Ok(None);
                };
                Notification::Replied {
                    sender: self.users.get_user_ref(sender_id)?,
                    status_update: self.status_updates.get_status_update(status_update_id)?,
                    reply: self.status_updates.get_status_update(reply_id)?,
                }
            }
            NotificationKind::Reposted => {
                let (Some(reposter_id), Some(status_update_id)) =
                    (record.id_field(1), record.id_field(2))
                else {
                    return Ok(None);
                };
                Notification::Reposted {
                    reposter: self.users.get_user_ref(reposter_id)?,
                    status_update: self.status_updates.get_status_update(status_update_id)?,
                }
            }
        };

        Ok(Some(notification))
    }
}
