use dioxus::prelude::*;
use store::{AppState, FeedLoader, FeedState};

/// Loader handle plus the signal that mirrors its state.
#[derive(Clone)]
pub struct Feed {
    loader: FeedLoader,
    state: Signal<FeedState>,
}

impl Feed {
    /// Current state; reading it re-renders the caller on change.
    pub fn state(&self) -> FeedState {
        (self.state)()
    }

    /// Current state without subscribing the caller.
    pub fn peek(&self) -> FeedState {
        self.state.peek().clone()
    }

    pub fn load_more(&self) {
        let loader = self.loader.clone();
        spawn(async move {
            loader.load_more_long_form().await;
        });
    }

    pub fn reload(&self) {
        let loader = self.loader.clone();
        spawn(async move {
            loader.load_initial().await;
        });
    }
}

/// Create a feed loader for the calling view and start its first load.
///
/// The loader lives as long as the view; its records are dropped with it.
pub fn use_feed() -> Feed {
    let app = use_context::<AppState>();
    let state = use_signal(FeedState::default);

    let (loader, subscription) = use_hook(move || {
        let loader = FeedLoader::new(app.store.clone());
        let subscription = loader.subscribe(move |snapshot| {
            let mut state = state;
            state.set(snapshot.clone());
        });
        (loader, subscription)
    });

    let initial = loader.clone();
    use_effect(move || {
        let loader = initial.clone();
        spawn(async move {
            loader.load_initial().await;
        });
    });

    let detached = loader.clone();
    use_drop(move || detached.unsubscribe(subscription));

    Feed { loader, state }
}
