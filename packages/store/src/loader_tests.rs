#![cfg(test)]

use crate::loader::FeedState;
use crate::test_utils::TestContext;
use crate::types::MediaKind;
use std::cell::RefCell;
use std::rc::Rc;

#[tokio::test]
async fn initial_load_fills_both_pages() {
    let ctx = TestContext::new(30, 15);
    ctx.loader.load_initial().await;

    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 12);
    assert_eq!(state.short_form.len(), 10);
    assert!(state.has_more_long_form);
    assert!(!state.is_loading);
    assert!(state.initialized);
    assert!(state.cursor.is_some());
    assert!(state.last_error.is_none());
    assert_eq!(state.long_form[0].id, "video-000");
    assert_eq!(state.short_form[0].id, "short-000");
}

#[tokio::test]
async fn short_catalogue_has_no_more_pages() {
    let ctx = TestContext::new(5, 3);
    ctx.loader.load_initial().await;

    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 5);
    assert_eq!(state.short_form.len(), 3);
    assert!(!state.has_more_long_form);
}

#[tokio::test]
async fn empty_store_leaves_no_cursor() {
    let ctx = TestContext::new(0, 0);
    ctx.loader.load_initial().await;

    let state = ctx.loader.snapshot();
    assert!(state.long_form.is_empty());
    assert!(state.cursor.is_none());
    assert!(!state.has_more_long_form);
    assert!(state.initialized);
}

#[tokio::test]
async fn load_more_appends_next_page() {
    let ctx = TestContext::new(30, 10);
    ctx.loader.load_initial().await;
    let first_page = ctx.loader.snapshot().long_form;

    ctx.loader.load_more_long_form().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 24);
    assert_eq!(&state.long_form[..12], &first_page[..]);
    assert_eq!(state.long_form[12].id, "video-012");
    assert_eq!(state.long_form[23].id, "video-023");
    assert!(state.has_more_long_form);

    ctx.loader.load_more_long_form().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 30);
    assert_eq!(state.long_form[29].id, "video-029");
    assert!(!state.has_more_long_form);
}

#[tokio::test]
async fn load_more_is_noop_without_more_pages() {
    let ctx = TestContext::new(5, 2);
    ctx.loader.load_initial().await;
    let before = ctx.loader.snapshot();
    let calls = ctx.store.call_count();

    ctx.loader.load_more_long_form().await;
    assert_eq!(ctx.store.call_count(), calls);
    assert_eq!(ctx.loader.snapshot(), before);
}

#[tokio::test]
async fn load_more_is_noop_before_initial_load() {
    let ctx = TestContext::new(30, 10);
    ctx.loader.load_more_long_form().await;
    assert_eq!(ctx.store.call_count(), 0);
    assert_eq!(ctx.loader.snapshot(), FeedState::default());
}

#[tokio::test]
async fn exact_page_multiple_ends_with_empty_page() {
    let ctx = TestContext::new(12, 0);
    ctx.loader.load_initial().await;
    assert!(ctx.loader.snapshot().has_more_long_form);
    let cursor = ctx.loader.snapshot().cursor;

    ctx.loader.load_more_long_form().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 12);
    assert!(!state.has_more_long_form);
    assert_eq!(state.cursor, cursor);
}

#[tokio::test]
async fn failed_initial_load_keeps_prior_state() {
    let ctx = TestContext::new(30, 10);
    ctx.store.fail.set(true);
    ctx.loader.load_initial().await;

    let state = ctx.loader.snapshot();
    assert!(state.long_form.is_empty());
    assert!(state.short_form.is_empty());
    assert!(!state.is_loading);
    assert!(state.initialized);
    assert!(state.cursor.is_none());
    let failure = state.last_error.expect("failure recorded");
    assert_eq!(failure.operation, "load_initial");
}

#[tokio::test]
async fn failed_reload_keeps_loaded_records() {
    let ctx = TestContext::new(30, 10);
    ctx.loader.load_initial().await;
    let loaded = ctx.loader.snapshot();

    ctx.store.fail.set(true);
    ctx.loader.load_initial().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form, loaded.long_form);
    assert_eq!(state.short_form, loaded.short_form);
    assert_eq!(state.cursor, loaded.cursor);
    assert!(!state.is_loading);
    assert!(state.last_error.is_some());
}

#[tokio::test]
async fn failed_load_more_can_be_retried() {
    let ctx = TestContext::new(30, 10);
    ctx.loader.load_initial().await;

    ctx.store.fail.set(true);
    ctx.loader.load_more_long_form().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 12);
    assert!(!state.is_loading);
    assert_eq!(
        state.last_error.map(|f| f.operation),
        Some("load_more_long_form")
    );

    ctx.store.fail.set(false);
    ctx.loader.load_more_long_form().await;
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 24);
    assert!(state.last_error.is_none());
}

#[tokio::test]
async fn overlapping_load_more_fetches_once() {
    let ctx = TestContext::new(40, 10);
    ctx.loader.load_initial().await;
    ctx.store.suspend.set(true);
    let calls = ctx.store.call_count();

    tokio::join!(
        ctx.loader.load_more_long_form(),
        ctx.loader.load_more_long_form()
    );

    assert_eq!(ctx.store.call_count(), calls + 1);
    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 24);
    let mut ids: Vec<&str> = state.long_form.iter().map(|r| r.id.as_str()).collect();
    ids.dedup();
    assert_eq!(ids.len(), 24);
}

#[tokio::test]
async fn reload_discards_stale_page() {
    let ctx = TestContext::new(40, 10);
    ctx.loader.load_initial().await;
    ctx.store.suspend.set(true);

    tokio::join!(ctx.loader.load_more_long_form(), ctx.loader.load_initial());

    let state = ctx.loader.snapshot();
    assert_eq!(state.long_form.len(), 12);
    assert_eq!(state.long_form[0].id, "video-000");
    assert!(!state.is_loading);
}

#[tokio::test]
async fn queries_use_page_sizes() {
    let ctx = TestContext::new(30, 30);
    ctx.loader.load_initial().await;
    ctx.loader.load_more_long_form().await;

    let calls = ctx.store.calls.borrow();
    assert_eq!(calls.len(), 3);
    assert_eq!((calls[0].kind, calls[0].limit), (MediaKind::LongForm, 12));
    assert_eq!((calls[1].kind, calls[1].limit), (MediaKind::ShortForm, 10));
    assert_eq!((calls[2].kind, calls[2].limit), (MediaKind::LongForm, 12));
    assert!(calls[2].after.is_some());
}

#[tokio::test]
async fn subscribers_see_every_mutation() {
    let ctx = TestContext::new(30, 10);
    let seen: Rc<RefCell<Vec<(bool, usize)>>> = Rc::default();
    let sink = seen.clone();
    ctx.loader.subscribe(move |state| {
        sink.borrow_mut()
            .push((state.is_loading, state.long_form.len()))
    });

    ctx.loader.load_initial().await;
    ctx.loader.load_more_long_form().await;

    assert_eq!(
        *seen.borrow(),
        vec![(true, 0), (false, 12), (true, 12), (false, 24)]
    );
}

#[tokio::test]
async fn unsubscribed_callbacks_are_not_called() {
    let ctx = TestContext::new(30, 10);
    let count = Rc::new(RefCell::new(0));
    let sink = count.clone();
    let id = ctx.loader.subscribe(move |_| *sink.borrow_mut() += 1);
    ctx.loader.unsubscribe(id);

    ctx.loader.load_initial().await;
    assert_eq!(*count.borrow(), 0);
}

#[tokio::test]
async fn subscriber_may_read_loader_state() {
    let ctx = TestContext::new(30, 10);
    let loader = ctx.loader.clone();
    let matches = Rc::new(RefCell::new(true));
    let sink = matches.clone();
    ctx.loader.subscribe(move |state| {
        let current = loader.snapshot();
        *sink.borrow_mut() &= current == *state;
    });

    ctx.loader.load_initial().await;
    assert!(*matches.borrow());
}
