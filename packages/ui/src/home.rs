use dioxus::prelude::*;
use store::{FetchFailure, MediaRecord};

use crate::feed::use_feed;
use crate::scroll::{should_load_more, use_window_scroll};
use crate::search::{filter_records, results_banner};

const HOME_CSS: Asset = asset!("/assets/styling/home.css");

const CATEGORIES: [&str; 9] = [
    "All",
    "Space",
    "Science",
    "NASA",
    "Astronomy",
    "Physics",
    "Documentaries",
    "Education",
    "Technology",
];

/// Anchor the window scroll listener is tied to.
const GRID_ID: &str = "home-grid";

const SHELF_LEN: usize = 6;

/// Query and hits of the last search trigger.
#[derive(Clone, PartialEq)]
struct SearchResults {
    query: String,
    hits: Vec<MediaRecord>,
}

#[component]
pub fn HomePage() -> Element {
    let feed = use_feed();
    let toasts = crate::use_toasts();

    let mut query = use_signal(String::new);
    let mut results = use_signal(|| None::<SearchResults>);
    let mut shown_error = use_signal(|| None::<FetchFailure>);

    let scroll_feed = feed.clone();
    use_window_scroll(GRID_ID, move |metrics| {
        let state = scroll_feed.peek();
        if should_load_more(&metrics, state.is_loading, state.has_more_long_form) {
            tracing::debug!("home.scroll: loading next page");
            scroll_feed.load_more();
        }
    });

    let error_feed = feed.clone();
    use_effect(move || {
        let failure = error_feed.state().last_error;
        if failure.as_ref() != shown_error.peek().as_ref() {
            if let Some(failure) = &failure {
                toasts.error("Couldn't load videos", Some(failure.to_string()));
            }
            shown_error.set(failure);
        }
    });

    let retry_feed = feed.clone();
    let search_feed = feed.clone();
    let run_search = move || {
        let q = query.peek().clone();
        let loaded = search_feed.peek().long_form;
        results.set(filter_records(&loaded, &q).map(|hits| SearchResults { query: q, hits }));
    };
    let mut search_on_click = run_search.clone();
    let mut search_on_enter = run_search;

    let state = feed.state();
    let active = results();
    let first_load = state.is_loading && state.long_form.is_empty();
    let loading_more = state.is_loading && !state.long_form.is_empty();
    let shown: Vec<MediaRecord> = match &active {
        Some(search) => search.hits.clone(),
        None => state.long_form.clone(),
    };
    let shelf: Vec<MediaRecord> = state.short_form.iter().take(SHELF_LEN).cloned().collect();

    rsx! {
        document::Link { rel: "stylesheet", href: HOME_CSS }

        div { class: "home",
            header { class: "home_header",
                div { class: "header_side",
                    button { class: "icon_btn", "aria-label": "Menu", "☰" }
                    a { class: "brand", href: "/",
                        span { class: "brand_mark", "▶" }
                        span { class: "brand_name", "AstroTube" }
                    }
                }

                div { class: "search_bar",
                    input {
                        r#type: "text",
                        placeholder: "Search",
                        value: "{query}",
                        oninput: move |evt: FormEvent| query.set(evt.value()),
                        onkeydown: move |evt: KeyboardEvent| {
                            if evt.key() == Key::Enter {
                                search_on_enter();
                            }
                        },
                    }
                    button {
                        class: "search_btn",
                        "aria-label": "Search",
                        onclick: move |_| search_on_click(),
                        "🔍"
                    }
                }

                div { class: "header_side",
                    button { class: "icon_btn", "aria-label": "Upload", "⇪" }
                    button { class: "icon_btn", "aria-label": "Notifications", "🔔" }
                    button { class: "icon_btn round", "aria-label": "Account", "👤" }
                }
            }

            div { class: "home_body",
                aside { class: "sidebar",
                    nav {
                        a { class: "side_link active", href: "/", "🏠 Home" }
                        a { class: "side_link", href: "/shorts", "🎬 Shorts" }
                    }
                }

                main { class: "home_main",
                    div { class: "category_bar",
                        for (idx, category) in CATEGORIES.iter().enumerate() {
                            button {
                                key: "{category}",
                                class: if idx == 0 { "pill active" } else { "pill" },
                                "{category}"
                            }
                        }
                    }

                    div { id: GRID_ID, class: "grid_wrap",
                        if let Some(search) = &active {
                            p { class: "results_banner", {results_banner(&search.query, search.hits.len())} }
                        } else if !shelf.is_empty() {
                            ShortsShelf { shorts: shelf }
                        }

                        if first_load {
                            div { class: "video_grid",
                                for i in 0..12 {
                                    SkeletonCard { key: "{i}" }
                                }
                            }
                        } else if state.last_error.is_some() && state.long_form.is_empty() {
                            div { class: "load_failed",
                                p { class: "hint", "Videos couldn't be loaded." }
                                button { class: "pill active", onclick: move |_| retry_feed.reload(), "Retry" }
                            }
                        } else if state.initialized && active.is_none() && shown.is_empty() {
                            p { class: "hint", "No videos yet." }
                        } else {
                            div { class: "video_grid",
                                for (idx, video) in shown.into_iter().enumerate() {
                                    VideoCard { key: "{idx}:{video.id}", video }
                                }
                            }
                        }

                        if loading_more {
                            div { class: "video_grid more",
                                for i in 0..4 {
                                    SkeletonCard { key: "{i}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn VideoCard(video: MediaRecord) -> Element {
    rsx! {
        div { class: "video_card",
            div { class: "thumb",
                img { src: "{video.thumbnail_url}", alt: "{video.title}", loading: "lazy" }
                span { class: "duration", "{video.duration_label}" }
            }
            div { class: "video_info",
                img { class: "avatar", src: "{video.channel_avatar_url}", alt: "{video.channel_name}" }
                div { class: "video_text",
                    h3 { class: "video_title", "{video.title}" }
                    p { class: "meta", "{video.channel_name}" }
                    p { class: "meta", "{video.view_count_label} • {video.upload_time_label}" }
                }
                button { class: "icon_btn more_btn", "aria-label": "More", "⋯" }
            }
        }
    }
}

#[component]
fn SkeletonCard() -> Element {
    rsx! {
        div { class: "video_card skeleton",
            div { class: "thumb shimmer" }
            div { class: "video_info",
                div { class: "avatar shimmer" }
                div { class: "video_text",
                    div { class: "line shimmer" }
                    div { class: "line short shimmer" }
                }
            }
        }
    }
}

#[component]
fn ShortsShelf(shorts: Vec<MediaRecord>) -> Element {
    rsx! {
        section { class: "shorts_shelf",
            h2 { class: "shelf_title", "🎬 Shorts" }
            div { class: "shelf_row",
                for short in shorts {
                    a { key: "{short.id}", class: "shelf_item", href: "/shorts",
                        img { src: "{short.thumbnail_url}", alt: "{short.title}", loading: "lazy" }
                        p { class: "shelf_caption", "{short.title}" }
                        p { class: "meta", "{short.view_count_label}" }
                    }
                }
            }
        }
    }
}
