use dioxus::prelude::*;
use serde::Deserialize;

use crate::clips::{self, format_count, ShortClip};
use crate::scroll::{active_index, js_string, use_element_scroll};
use crate::toast::Toasts;

const SHORTS_CSS: Asset = asset!("/assets/styling/shorts.css");

const FEED_ID: &str = "shorts-feed";

/// What the first share step reported back from the page.
#[derive(Debug, Deserialize)]
struct ShareAttempt {
    shared: bool,
    url: String,
}

#[component]
pub fn ShortsFeed() -> Element {
    let mut clip_list = use_signal(clips::catalogue);
    let mut current = use_signal(|| 0_usize);
    let mut playing = use_signal(|| false);
    let toasts = crate::use_toasts();

    use_element_scroll(FEED_ID, move |scroll| {
        let index = active_index(&scroll, clip_list.peek().len());
        if index != *current.peek() {
            current.set(index);
        }
    });

    let items = clip_list();
    let count = items.len();
    let active = current();

    rsx! {
        document::Link { rel: "stylesheet", href: SHORTS_CSS }

        div { class: "shorts_page",
            div { class: "shorts_header",
                a { class: "shorts_title", href: "/", "Astro Shorts" }
                div { class: "shorts_tabs",
                    button { class: "tab", "Following" }
                    button { class: "tab active", "For You" }
                }
            }

            div { id: FEED_ID, class: "shorts_feed",
                for clip in items {
                    ShortSlide {
                        key: "{clip.id}",
                        clip: clip.clone(),
                        playing: playing(),
                        on_like: move |id: String| clip_list.with_mut(|all| clips::toggle_like(all, &id)),
                        on_share: move |clip: ShortClip| share(clip, toasts),
                        on_toggle_play: move |_| playing.toggle(),
                    }
                }
            }

            div { class: "progress",
                for idx in 0..count {
                    div {
                        key: "{idx}",
                        class: if idx == active { "progress_bar active" } else { "progress_bar" },
                    }
                }
            }
        }
    }
}

#[component]
fn ShortSlide(
    clip: ShortClip,
    playing: bool,
    on_like: EventHandler<String>,
    on_share: EventHandler<ShortClip>,
    on_toggle_play: EventHandler<()>,
) -> Element {
    let like_id = clip.id.clone();
    let share_clip = clip.clone();
    let play_label = if playing { "Pause" } else { "Play" };

    rsx! {
        div { class: "short_slide",
            div { class: "backdrop",
                img { src: "{clip.image_url}", alt: "{clip.title}" }
                div { class: "shade" }
            }

            div { class: "play_layer",
                button {
                    class: "play_btn",
                    "aria-label": play_label,
                    onclick: move |_| on_toggle_play.call(()),
                    if playing { "❚❚" } else { "▶" }
                }
            }

            div { class: "slide_overlay",
                div { class: "slide_text",
                    h2 { class: "slide_title", "{clip.title}" }
                    p { class: "slide_description", "{clip.description}" }
                    div { class: "hashtags",
                        for tag in clip.hashtags.iter() {
                            span { key: "{tag}", class: "hashtag", "{tag}" }
                        }
                    }
                }

                div { class: "slide_actions",
                    div { class: "action",
                        button {
                            class: if clip.is_liked { "action_btn liked" } else { "action_btn" },
                            "aria-label": "Like",
                            onclick: move |_| on_like.call(like_id.clone()),
                            if clip.is_liked { "♥" } else { "♡" }
                        }
                        span { class: "action_count", {format_count(clip.likes)} }
                    }
                    div { class: "action",
                        button { class: "action_btn", "aria-label": "Comments", "💬" }
                        span { class: "action_count", {format_count(clip.comments)} }
                    }
                    div { class: "action",
                        button {
                            class: "action_btn",
                            "aria-label": "Share",
                            onclick: move |_| on_share.call(share_clip.clone()),
                            "↗"
                        }
                        span { class: "action_count", {format_count(clip.shares)} }
                    }
                }
            }
        }
    }
}

/// Share through the platform sheet when there is one, else copy a link
/// text to the clipboard.
fn share(clip: ShortClip, toasts: Toasts) {
    spawn(async move {
        let js = format!(
            r#"
            const url = window.location.href;
            if (navigator.share) {{
                try {{
                    await navigator.share({{ title: {title}, text: {text}, url }});
                }} catch (e) {{}}
                return {{ shared: true, url }};
            }}
            return {{ shared: false, url }};
            "#,
            title = js_string(&clip.title),
            text = js_string(&clip.description),
        );

        let attempt = match document::eval(&js).await {
            Ok(value) => serde_json::from_value::<ShareAttempt>(value),
            Err(e) => {
                tracing::warn!("shorts.share: eval failed: {}", e);
                toasts.error("Couldn't share this short", None);
                return;
            }
        };
        let attempt = match attempt {
            Ok(attempt) => attempt,
            Err(e) => {
                tracing::warn!("shorts.share: unexpected answer: {}", e);
                toasts.error("Couldn't share this short", None);
                return;
            }
        };
        if attempt.shared {
            tracing::debug!("shorts.share: id={} via platform", clip.id);
            return;
        }

        let copy = format!(
            r#"
            try {{
                await navigator.clipboard.writeText({text});
                return true;
            }} catch (e) {{
                return false;
            }}
            "#,
            text = js_string(&clip.share_text(&attempt.url)),
        );
        let copied = document::eval(&copy)
            .await
            .ok()
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        if copied {
            tracing::debug!("shorts.share: id={} copied to clipboard", clip.id);
            toasts.info("Link copied to clipboard", Some(clip.title.clone()));
        } else {
            toasts.error("Couldn't copy the link", None);
        }
    });
}
