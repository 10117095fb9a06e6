use dioxus::prelude::*;
use serde::Deserialize;

/// Slack allowed between the viewport bottom and the document bottom, so
/// fractional-pixel and zoomed layouts still count as "at the bottom".
pub const BOTTOM_TOLERANCE_PX: f64 = 2.0;

/// Window geometry reported on every scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollMetrics {
    pub viewport_height: f64,
    pub scroll_top: f64,
    pub document_height: f64,
}

impl ScrollMetrics {
    pub fn at_bottom(&self) -> bool {
        self.viewport_height + self.scroll_top >= self.document_height - BOTTOM_TOLERANCE_PX
    }
}

/// Gate for infinite scroll: at the bottom, idle, and more pages exist.
pub fn should_load_more(metrics: &ScrollMetrics, is_loading: bool, has_more: bool) -> bool {
    metrics.at_bottom() && !is_loading && has_more
}

/// Position of a scrollable element.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementScroll {
    pub scroll_top: f64,
    pub client_height: f64,
}

/// Index of the full-height item currently in view, clamped to the list.
pub fn active_index(scroll: &ElementScroll, len: usize) -> usize {
    if len == 0 || !(scroll.client_height > 0.0) {
        return 0;
    }
    let index = (scroll.scroll_top.max(0.0) / scroll.client_height).round() as usize;
    index.min(len - 1)
}

/// Call `on_scroll` with window metrics on every scroll while the element
/// `anchor_id` is on the page.
pub fn use_window_scroll(anchor_id: &'static str, on_scroll: impl FnMut(ScrollMetrics) + 'static) {
    let mut handler = Some(on_scroll);
    use_effect(move || {
        let Some(mut on_scroll) = handler.take() else {
            return;
        };
        spawn(async move {
            let js = format!(
                r#"
                const anchor = {anchor};
                const report = () => {{
                    if (!document.getElementById(anchor)) {{
                        window.removeEventListener("scroll", report);
                        return;
                    }}
                    const doc = document.documentElement;
                    dioxus.send({{
                        viewportHeight: window.innerHeight,
                        scrollTop: doc.scrollTop,
                        documentHeight: doc.offsetHeight,
                    }});
                }};
                window.addEventListener("scroll", report, {{ passive: true }});
                await new Promise(() => {{}});
                "#,
                anchor = js_string(anchor_id),
            );
            let mut eval = document::eval(&js);
            while let Ok(metrics) = eval.recv::<ScrollMetrics>().await {
                on_scroll(metrics);
            }
            tracing::debug!("scroll.window: listener closed anchor={}", anchor_id);
        });
    });
}

/// Call `on_scroll` whenever the element `element_id` scrolls.
pub fn use_element_scroll(element_id: &'static str, on_scroll: impl FnMut(ElementScroll) + 'static) {
    let mut handler = Some(on_scroll);
    use_effect(move || {
        let Some(mut on_scroll) = handler.take() else {
            return;
        };
        spawn(async move {
            let js = format!(
                r#"
                const el = document.getElementById({id});
                if (el) {{
                    el.addEventListener("scroll", () => {{
                        dioxus.send({{ scrollTop: el.scrollTop, clientHeight: el.clientHeight }});
                    }}, {{ passive: true }});
                    await new Promise(() => {{}});
                }}
                "#,
                id = js_string(element_id),
            );
            let mut eval = document::eval(&js);
            while let Ok(scroll) = eval.recv::<ElementScroll>().await {
                on_scroll(scroll);
            }
            tracing::debug!("scroll.element: listener closed id={}", element_id);
        });
    });
}

/// Quote a value as a JavaScript string literal.
pub(crate) fn js_string(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}
