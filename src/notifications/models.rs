//! Notification data models

use serde::{Deserialize, Serialize};

use crate::status_update::StatusUpdate;
use crate::user::UserRef;

/// Notification kind enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Followed,
    Favorited,
    Replied,
    Reposted,
}

impl NotificationKind {
    /// Parses a stored kind tag.
    ///
    /// Returns None for unrecognized tags: records carrying one are dropped
    /// from aggregation, never treated as an error.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "followed" => Some(Self::Followed),
            "favorited" => Some(Self::Favorited),
            "replied" => Some(Self::Replied),
            "reposted" => Some(Self::Reposted),
            _ => None,
        }
    }

    /// The stored tag string for this kind.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Followed => "followed",
            Self::Favorited => "favorited",
            Self::Replied => "replied",
            Self::Reposted => "reposted",
        }
    }
}

/// A user notification, ready to be shipped to a client as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Followed {
        follower: UserRef,
        user: UserRef,
    },
    Favorited {
        favoriter: UserRef,
        status_update: StatusUpdate,
    },
    Replied {
        sender: UserRef,
        status_update: StatusUpdate,
        reply: StatusUpdate,
    },
    Reposted {
        reposter: UserRef,
        status_update: StatusUpdate,
    },
}

impl Notification {
    pub fn kind(&self) -> NotificationKind {
        match self {
            Self::Followed { .. } => NotificationKind::Followed,
            Self::Favorited { .. } => NotificationKind::Favorited,
            Self::Replied { .. } => NotificationKind::Replied,
            Self::Reposted { .. } => NotificationKind::Reposted,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_round_trip() {
        for kind in [
            NotificationKind::Followed,
            NotificationKind::Favorited,
            NotificationKind::Replied,
            NotificationKind::Reposted,
        ] {
            assert_eq!(NotificationKind::from_tag(kind.tag()), Some(kind));
        }
    }

    #[test]
    fn test_unrecognized_kind_tag_does_not_parse() {
        assert_eq!(NotificationKind::from_tag("invalid"), None);
        assert_eq!(NotificationKind::from_tag(""), None);
        assert_eq!(NotificationKind::from_tag("Followed"), None);
    }

    #[test]
    fn test_notification_serializes_tagged_by_kind() {
        let notification = Notification::Followed {
            follower: UserRef::new(2001),
            user: UserRef::new(567),
        };

        let serialized = serde_json::to_value(&notification).unwrap();
        assert_eq!(serialized["kind"], "followed");
        assert_eq!(serialized["follower"]["id"], 2001);
        assert_eq!(serialized["user"]["id"], 567);
    }

    #[test]
    fn test_replied_notification_serialization() {
        let notification = Notification::Replied {
            sender: UserRef::new(2001),
            status_update: StatusUpdate::new(9000, 567),
            reply: StatusUpdate::new(9001, 2001),
        };

        let serialized = serde_json::to_string(&notification).unwrap();
        let deserialized: Notification = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, notification);
        assert_eq!(deserialized.kind(), NotificationKind::Replied);
    }
}
