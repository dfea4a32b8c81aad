//! Loading, error and confirmation surfaces shared by every page.

use dioxus::prelude::*;

const FEEDBACK_CSS: Asset = asset!("/assets/styling/feedback.css");

/// A full-screen overlay that centers its children in a modal card.
/// Clicking outside the card triggers `on_close`.
#[component]
pub fn ModalOverlay(on_close: EventHandler<()>, children: Element) -> Element {
    rsx! {
        document::Stylesheet { href: FEEDBACK_CSS }
        div {
            class: "modal-backdrop",
            onclick: move |_| on_close.call(()),
            div {
                class: "modal-card",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                {children}
            }
        }
    }
}

#[component]
pub fn Spinner(#[props(default = "Loading...".to_string())] label: String) -> Element {
    rsx! {
        document::Stylesheet { href: FEEDBACK_CSS }
        div {
            class: "spinner-row",
            div { class: "spinner" }
            p { class: "muted", "{label}" }
        }
    }
}

/// Red banner for a rejected slice. `on_retry` adds a Retry button.
#[component]
pub fn ErrorBanner(
    message: String,
    on_retry: Option<EventHandler<()>>,
    on_dismiss: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        document::Stylesheet { href: FEEDBACK_CSS }
        div {
            class: "error-banner",
            role: "alert",
            span { class: "error-banner-text", "{message}" }
            if let Some(retry) = on_retry {
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| retry.call(()),
                    "Retry"
                }
            }
            if let Some(dismiss) = on_dismiss {
                button {
                    class: "error-banner-close",
                    title: "Dismiss",
                    onclick: move |_| dismiss.call(()),
                    "×"
                }
            }
        }
    }
}

/// Blocking success confirmation with a single OK button.
#[component]
pub fn SuccessModal(title: String, message: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_close,
            div {
                class: "modal-body center",
                div { class: "success-icon", "✓" }
                h2 { "{title}" }
                p { class: "muted", "{message}" }
                button {
                    class: "btn btn-primary btn-block",
                    onclick: move |_| on_close.call(()),
                    "OK"
                }
            }
        }
    }
}

#[component]
pub fn ConfirmDialog(
    title: String,
    message: String,
    #[props(default = "Delete".to_string())] confirm_label: String,
    #[props(default)] busy: bool,
    on_confirm: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    rsx! {
        ModalOverlay {
            on_close: on_cancel,
            div {
                class: "modal-body",
                h2 { "{title}" }
                p { class: "muted", "{message}" }
                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        disabled: busy,
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: busy,
                        onclick: move |_| on_confirm.call(()),
                        if busy { "Working..." } else { "{confirm_label}" }
                    }
                }
            }
        }
    }
}
