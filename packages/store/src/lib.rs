//! Read-only access to the AstroTube catalogue and the paginated feed loader
//! the views are built on.

pub mod config;
pub mod error;
pub mod loader;
pub mod seed;
pub mod state;
pub mod storage;
pub mod types;

#[cfg(test)]
mod test_utils;


#[cfg(test)]
mod loader_tests;

pub use config::{AppConfig, AppMode, FirestoreConfig, StoreConfig};
pub use error::{FetchFailure, StoreError};
pub use loader::{FeedLoader, FeedState, SubscriptionId};
pub use state::AppState;
pub use storage::{firestore::FirestoreClient, memory::InMemoryStore, DocumentStore};
pub use types::{Cursor, MediaKind, MediaRecord, Page, PageQuery};
