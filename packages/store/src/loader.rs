//! Paginated loading of the home feed.
//!
//! [`FeedLoader`] owns a [`FeedState`] and mutates it in response to
//! [`FeedLoader::load_initial`] and [`FeedLoader::load_more_long_form`].
//! Views subscribe to it and receive a snapshot after every mutation.

use crate::error::FetchFailure;
use crate::storage::DocumentStore;
use crate::types::{Cursor, MediaKind, MediaRecord, PageQuery};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, error, info};

#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    pub long_form: Vec<MediaRecord>,
    pub short_form: Vec<MediaRecord>,
    pub is_loading: bool,
    pub has_more_long_form: bool,
    pub cursor: Option<Cursor>,
    /// Set once the first `load_initial` has settled, whatever the outcome.
    pub initialized: bool,
    pub last_error: Option<FetchFailure>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self {
            long_form: Vec::new(),
            short_form: Vec::new(),
            is_loading: false,
            has_more_long_form: true,
            cursor: None,
            initialized: false,
            last_error: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Rc<dyn Fn(&FeedState)>;

struct Inner {
    store: Rc<dyn DocumentStore>,
    state: RefCell<FeedState>,
    subscribers: RefCell<Vec<(SubscriptionId, Subscriber)>>,
    next_subscription: Cell<u64>,
    /// Bumped by every `load_initial`; stale `load_more` answers are dropped.
    generation: Cell<u64>,
}

/// Cheap to clone; clones share state and subscribers.
#[derive(Clone)]
pub struct FeedLoader {
    inner: Rc<Inner>,
}

impl std::fmt::Debug for FeedLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedLoader")
            .field("state", &self.inner.state.borrow())
            .finish_non_exhaustive()
    }
}

impl FeedLoader {
    pub fn new(store: Rc<dyn DocumentStore>) -> Self {
        Self {
            inner: Rc::new(Inner {
                store,
                state: RefCell::new(FeedState::default()),
                subscribers: RefCell::new(Vec::new()),
                next_subscription: Cell::new(0),
                generation: Cell::new(0),
            }),
        }
    }

    pub fn snapshot(&self) -> FeedState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self, callback: impl Fn(&FeedState) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.inner.next_subscription.get());
        self.inner.next_subscription.set(id.0 + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .subscribers
            .borrow_mut()
            .retain(|(sub, _)| *sub != id);
    }

    /// Fetch the first page of both collections, replacing what is loaded.
    pub async fn load_initial(&self) {
        let generation = self.inner.generation.get() + 1;
        self.inner.generation.set(generation);
        self.update(|state| state.is_loading = true);
        info!("feed.load_initial: start");

        let result = async {
            let long_form = self.inner.store.list(PageQuery::first(MediaKind::LongForm)).await?;
            let short_form = self.inner.store.list(PageQuery::first(MediaKind::ShortForm)).await?;
            Ok::<_, crate::error::StoreError>((long_form, short_form))
        }
        .await;

        match result {
            Ok((long_form, short_form)) => {
                info!(
                    "feed.load_initial: long_form={} short_form={}",
                    long_form.records.len(),
                    short_form.records.len()
                );
                self.update(|state| {
                    state.has_more_long_form =
                        long_form.records.len() == MediaKind::LongForm.page_size();
                    state.cursor = long_form.cursor;
                    state.long_form = long_form.records;
                    state.short_form = short_form.records;
                    state.is_loading = false;
                    state.initialized = true;
                    state.last_error = None;
                });
            }
            Err(err) => {
                error!("feed.load_initial: {}", err);
                let failure = FetchFailure::new("load_initial", &err);
                self.update(|state| {
                    state.is_loading = false;
                    state.initialized = true;
                    state.last_error = Some(failure);
                });
            }
        }
    }

    /// Append the next long-form page after the cursor.
    ///
    /// Returns immediately when nothing more is known to exist, no cursor is
    /// held yet, or another load is in flight.
    pub async fn load_more_long_form(&self) {
        let cursor = {
            let state = self.inner.state.borrow();
            if !state.has_more_long_form || state.is_loading {
                debug!(
                    "feed.load_more_long_form: skipped has_more={} loading={}",
                    state.has_more_long_form, state.is_loading
                );
                return;
            }
            match &state.cursor {
                Some(cursor) => cursor.clone(),
                None => {
                    debug!("feed.load_more_long_form: skipped, no cursor");
                    return;
                }
            }
        };

        let generation = self.inner.generation.get();
        self.update(|state| state.is_loading = true);
        debug!("feed.load_more_long_form: start");

        let result = self
            .inner
            .store
            .list(PageQuery::after(MediaKind::LongForm, cursor))
            .await;

        if self.inner.generation.get() != generation {
            // The feed was reloaded meanwhile; that reload owns `is_loading`.
            debug!("feed.load_more_long_form: dropped stale page");
            return;
        }

        match result {
            Ok(page) => {
                info!("feed.load_more_long_form: appended={}", page.records.len());
                self.update(|state| {
                    state.has_more_long_form =
                        page.records.len() == MediaKind::LongForm.page_size();
                    if page.cursor.is_some() {
                        state.cursor = page.cursor;
                    }
                    state.long_form.extend(page.records);
                    state.is_loading = false;
                    state.last_error = None;
                });
            }
            Err(err) => {
                error!("feed.load_more_long_form: {}", err);
                let failure = FetchFailure::new("load_more_long_form", &err);
                self.update(|state| {
                    state.is_loading = false;
                    state.last_error = Some(failure);
                });
            }
        }
    }

    /// Apply a mutation, then notify every subscriber with the new state.
    fn update(&self, mutate: impl FnOnce(&mut FeedState)) {
        let snapshot = {
            let mut state = self.inner.state.borrow_mut();
            mutate(&mut state);
            state.clone()
        };
        // Collect first so callbacks may (un)subscribe or call back in.
        let subscribers: Vec<Subscriber> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback(&snapshot);
        }
    }
}
