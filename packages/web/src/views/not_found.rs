use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    tracing::debug!("router.not_found: path=/{}", path);

    rsx! {
        div { class: "not_found",
            h1 { "404" }
            p { class: "hint", "Nothing lives at /{path}." }
            a { href: "/", "Back to AstroTube" }
        }
    }
}
