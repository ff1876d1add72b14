//! Status update module

mod models;
mod store;

pub use models::StatusUpdate;
pub use store::{InMemoryStatusUpdateStore, StatusUpdateNotFound, StatusUpdateStore};

#[cfg(feature = "mock")]
pub use store::MockStatusUpdateStore;
