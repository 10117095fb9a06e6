use crate::error::StoreError;
use crate::loader::FeedLoader;
use crate::storage::memory::{InMemoryStore, StoredRecord};
use crate::storage::DocumentStore;
use crate::types::{MediaKind, MediaRecord, Page, PageQuery};
use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use time::macros::datetime;
use time::Duration;

pub fn record(kind: MediaKind, id: &str, title: &str, channel: &str) -> MediaRecord {
    MediaRecord {
        id: id.to_string(),
        title: title.to_string(),
        channel_name: channel.to_string(),
        view_count_label: "1K views".to_string(),
        upload_time_label: "1 day ago".to_string(),
        thumbnail_url: format!("https://img.test/{id}.jpg"),
        channel_avatar_url: format!("https://img.test/{channel}.png"),
        duration_label: "10:00".to_string(),
        kind,
    }
}

fn generate(kind: MediaKind, count: usize) -> Vec<StoredRecord> {
    let newest = datetime!(2024-01-31 00:00 UTC);
    (0..count)
        .map(|i| StoredRecord {
            record: record(
                kind,
                &format!("{}-{:03}", kind.as_db(), i),
                &format!("{} #{i}", kind.collection()),
                "Test Channel",
            ),
            uploaded_at: newest - Duration::minutes(i as i64),
        })
        .collect()
}

/// `count` long-form records, `video-000` newest.
pub fn long_form(count: usize) -> Vec<StoredRecord> {
    generate(MediaKind::LongForm, count)
}

/// `count` short-form records, `short-000` newest.
pub fn short_form(count: usize) -> Vec<StoredRecord> {
    generate(MediaKind::ShortForm, count)
}

/// In-memory store that records calls and can be told to fail or to
/// suspend once before answering.
pub struct ScriptedStore {
    inner: InMemoryStore,
    pub calls: RefCell<Vec<PageQuery>>,
    pub fail: Cell<bool>,
    pub suspend: Cell<bool>,
}

impl ScriptedStore {
    pub fn new(videos: usize, shorts: usize) -> Rc<Self> {
        let mut records = long_form(videos);
        records.extend(short_form(shorts));
        Rc::new(Self {
            inner: InMemoryStore::from_records(records),
            calls: RefCell::new(Vec::new()),
            fail: Cell::new(false),
            suspend: Cell::new(false),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

#[async_trait(?Send)]
impl DocumentStore for ScriptedStore {
    async fn list(&self, query: PageQuery) -> Result<Page, StoreError> {
        self.calls.borrow_mut().push(query.clone());
        if self.suspend.get() {
            tokio::task::yield_now().await;
        }
        if self.fail.get() {
            return Err(StoreError::Status {
                status: 503,
                body: "scripted failure".to_string(),
            });
        }
        self.inner.list(query).await
    }
}

pub struct TestContext {
    pub store: Rc<ScriptedStore>,
    pub loader: FeedLoader,
}

impl TestContext {
    pub fn new(videos: usize, shorts: usize) -> Self {
        let store = ScriptedStore::new(videos, shorts);
        let loader = FeedLoader::new(store.clone());
        Self { store, loader }
    }
}
