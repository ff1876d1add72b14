//! User directory trait and in-memory implementation

use std::collections::HashSet;
use std::sync::Mutex;

use thiserror::Error;

use super::models::UserRef;

/// Lookup miss for a user id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("user {0} not found")]
pub struct UserNotFound(pub usize);

/// Trait for resolving user ids to user references.
///
/// Production implementations delegate to the identity service; absence of
/// the id is the only failure surfaced through this seam.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait UserDirectory: Send + Sync {
    /// Resolves a user reference given the user id.
    /// Returns Err(UserNotFound) if no such user exists.
    fn get_user_ref(&self, user_id: usize) -> Result<UserRef, UserNotFound>;
}

/// A directory of known user ids held in memory.
///
/// Backs tests and small single-process deployments.
pub struct InMemoryUserDirectory {
    users: Mutex<HashSet<usize>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashSet::new()),
        }
    }

    /// Registers a user id as known.
    pub fn add_user(&self, user_id: usize) {
        self.users.lock().unwrap().insert(user_id);
    }
}

impl Default for InMemoryUserDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl UserDirectory for InMemoryUserDirectory {
    fn get_user_ref(&self, user_id: usize) -> Result<UserRef, UserNotFound> {
        let users = self.users.lock().unwrap();
        if users.contains(&user_id) {
            Ok(UserRef::new(user_id))
        } else {
            Err(UserNotFound(user_id))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_user_resolves() {
        let directory = InMemoryUserDirectory::new();
        directory.add_user(567);

        assert_eq!(directory.get_user_ref(567), Ok(UserRef::new(567)));
    }

    #[test]
    fn test_unknown_user_is_not_found() {
        let directory = InMemoryUserDirectory::new();

        assert_eq!(directory.get_user_ref(567), Err(UserNotFound(567)));
    }
}
