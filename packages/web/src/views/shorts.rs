use dioxus::prelude::*;

#[component]
pub fn Shorts() -> Element {
    rsx! { ui::ShortsFeed {} }
}
