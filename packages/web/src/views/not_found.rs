use dioxus::prelude::*;

/// Only reachable while the guard is still deciding where to send the viewer.
#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card center",
                h1 { "Page not found" }
                p { class: "muted", "/{path}" }
            }
        }
    }
}
