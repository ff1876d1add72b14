use serde::{Deserialize, Serialize};

/// A resolved reference to a user.
///
/// Opaque beyond the id: full profile data (handle, avatar, bio) belongs to
/// the identity service and is joined in by the embedding application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: usize,
}

impl UserRef {
    pub fn new(id: usize) -> Self {
        Self { id }
    }
}
