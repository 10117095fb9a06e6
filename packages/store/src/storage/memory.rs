use super::DocumentStore;
use crate::error::StoreError;
use crate::types::{Cursor, MediaKind, MediaRecord, Page, PageQuery};
use async_trait::async_trait;
use std::cmp::Ordering;
use std::collections::HashMap;
use time::OffsetDateTime;

/// A record together with the timestamp the store orders by.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRecord {
    pub record: MediaRecord,
    pub uploaded_at: OffsetDateTime,
}

/// In-process document store (local mode and tests).
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    collections: HashMap<MediaKind, Vec<StoredRecord>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the local astronomy catalogue.
    pub fn seeded() -> Self {
        Self::from_records(crate::seed::catalogue())
    }

    pub fn from_records(records: impl IntoIterator<Item = StoredRecord>) -> Self {
        let mut store = Self::new();
        for stored in records {
            store.insert(stored);
        }
        store
    }

    pub fn insert(&mut self, stored: StoredRecord) {
        let collection = self.collections.entry(stored.record.kind).or_default();
        collection.push(stored);
        collection.sort_by(newest_first);
    }

    pub fn len(&self, kind: MediaKind) -> usize {
        self.collections.get(&kind).map_or(0, Vec::len)
    }
}

fn newest_first(a: &StoredRecord, b: &StoredRecord) -> Ordering {
    b.uploaded_at
        .cmp(&a.uploaded_at)
        .then_with(|| b.record.id.cmp(&a.record.id))
}

fn marker(stored: &StoredRecord) -> serde_json::Value {
    serde_json::Value::String(stored.uploaded_at.unix_timestamp_nanos().to_string())
}

fn parse_marker(cursor: &Cursor) -> Result<i128, StoreError> {
    cursor
        .marker
        .as_str()
        .and_then(|s| s.parse::<i128>().ok())
        .ok_or_else(|| StoreError::Decode(format!("cursor marker {} is not a timestamp", cursor.marker)))
}

/// Strictly later in newest-first order than the cursor position.
fn is_after(stored: &StoredRecord, nanos: i128, document: &str) -> bool {
    let ts = stored.uploaded_at.unix_timestamp_nanos();
    ts < nanos || (ts == nanos && stored.record.id.as_str() < document)
}

#[async_trait(?Send)]
impl DocumentStore for InMemoryStore {
    async fn list(&self, query: PageQuery) -> Result<Page, StoreError> {
        let items = self
            .collections
            .get(&query.kind)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let start = match &query.after {
            None => 0,
            Some(cursor) => {
                let nanos = parse_marker(cursor)?;
                items
                    .iter()
                    .position(|s| is_after(s, nanos, &cursor.document))
                    .unwrap_or(items.len())
            }
        };

        let page: Vec<&StoredRecord> = items[start..].iter().take(query.limit).collect();
        let cursor = page
            .last()
            .map(|s| Cursor::new(s.record.id.clone(), marker(s)));

        tracing::debug!(
            "store.memory.list: collection={} start={} returned={}",
            query.kind.collection(),
            start,
            page.len()
        );

        Ok(Page {
            records: page.into_iter().map(|s| s.record.clone()).collect(),
            cursor,
        })
    }
}
