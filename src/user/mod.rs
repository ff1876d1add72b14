//! User identity module

mod models;
mod store;

pub use models::UserRef;
pub use store::{InMemoryUserDirectory, UserDirectory, UserNotFound};

#[cfg(feature = "mock")]
pub use store::MockUserDirectory;
