use serde::{Deserialize, Serialize};

/// A piece of user-authored content that can be favorited, replied to, or
/// reposted. Replies are themselves status updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub id: usize,
    pub owner_id: usize,
}

impl StatusUpdate {
    pub fn new(id: usize, owner_id: usize) -> Self {
        Self { id, owner_id }
    }
}
