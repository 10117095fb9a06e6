use dioxus::prelude::*;
use std::time::Duration;

const TOAST_CSS: Asset = asset!("/assets/styling/toast.css");

/// How long a notice stays up before it dismisses itself.
const TOAST_LIFETIME: Duration = Duration::from_secs(5);

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Error,
    Info,
}

#[derive(Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: Option<String>,
    pub kind: ToastKind,
}

#[derive(Clone, Copy)]
pub struct Toasts {
    toasts: Signal<Vec<Toast>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn push(&self, title: String, body: Option<String>, kind: ToastKind) -> u64 {
        let mut next_id = self.next_id;
        let id = (next_id)();
        next_id.set(id + 1);
        let mut toasts = self.toasts;
        toasts.with_mut(|items| {
            items.push(Toast {
                id,
                title,
                body,
                kind,
            })
        });

        let this = *self;
        spawn(async move {
            gloo_timers::future::sleep(TOAST_LIFETIME).await;
            this.dismiss(id);
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        let mut toasts = self.toasts;
        toasts.with_mut(|items| items.retain(|toast| toast.id != id));
    }

    pub fn error(&self, title: impl Into<String>, body: Option<String>) {
        self.push(title.into(), body, ToastKind::Error);
    }

    pub fn info(&self, title: impl Into<String>, body: Option<String>) {
        self.push(title.into(), body, ToastKind::Info);
    }
}

pub fn use_toasts() -> Toasts {
    use_context::<Toasts>()
}

#[component]
pub fn ToastProvider(children: Element) -> Element {
    let toasts = use_signal(Vec::new);
    let next_id = use_signal(|| 1_u64);
    let ctx = use_context_provider(|| Toasts { toasts, next_id });

    rsx! {
        document::Link { rel: "stylesheet", href: TOAST_CSS }
        {children}
        ToastViewport { toasts: ctx }
    }
}

#[component]
fn ToastViewport(toasts: Toasts) -> Element {
    let items = (toasts.toasts)();
    rsx! {
        div { class: "toast_region", role: "status", "aria-live": "polite",
            for toast in items.iter() {
                div {
                    key: "{toast.id}",
                    class: match toast.kind {
                        ToastKind::Error => "toast toast_error",
                        ToastKind::Info => "toast toast_info",
                    },
                    div { class: "toast_content",
                        div { class: "toast_title", "{toast.title}" }
                        if let Some(body) = &toast.body {
                            div { class: "toast_body", "{body}" }
                        }
                    }
                    button {
                        class: "toast_close",
                        onclick: {
                            let id = toast.id;
                            move |_| toasts.dismiss(id)
                        },
                        "×"
                    }
                }
            }
        }
    }
}

impl PartialEq for Toasts {
    fn eq(&self, other: &Self) -> bool {
        self.toasts == other.toasts && self.next_id == other.next_id
    }
}
