use async_trait::async_trait;

use crate::error::StoreError;
use crate::types::{Page, PageQuery};

pub mod firestore;
pub mod memory;

/// Read-only listing over the two media collections.
///
/// Implementations return records ordered by upload time, newest first,
/// starting strictly after `query.after` when a cursor is given.
#[async_trait(?Send)]
pub trait DocumentStore {
    async fn list(&self, query: PageQuery) -> Result<Page, StoreError>;
}
