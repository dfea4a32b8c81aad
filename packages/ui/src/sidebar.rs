use dioxus::prelude::*;
use store::models::initials;
use store::navigation::menu_for;

use crate::{use_app_state, use_services};

const SIDEBAR_CSS: Asset = asset!("/assets/styling/sidebar.css");

/// Role-filtered dashboard navigation with a logout entry at the bottom.
#[component]
pub fn AppSidebar() -> Element {
    let state = use_app_state();
    let role = state.read().auth.role();

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }

        nav {
            class: "sidebar",

            div {
                class: "sidebar-brand",
                span { class: "sidebar-logo", "🐾" }
                span { class: "sidebar-title", "PetPerfect" }
            }

            div {
                class: "sidebar-menu",
                for item in menu_for(role) {
                    Link {
                        key: "{item.path}",
                        class: "sidebar-item",
                        active_class: "active",
                        to: item.path.to_string(),
                        "{item.label}"
                    }
                }
            }

            div {
                class: "sidebar-bottom",
                LogoutItem {}
            }
        }
    }
}

#[component]
fn LogoutItem() -> Element {
    let mut state = use_app_state();
    let services = use_services();

    let onclick = move |_| {
        tracing::info!("Signing out");
        state.write().logout(services.storage().as_ref());
    };

    rsx! {
        button {
            class: "sidebar-item sidebar-logout",
            onclick: onclick,
            "Logout"
        }
    }
}

/// Header bar with the signed-in user's avatar, name and role.
#[component]
pub fn Topbar() -> Element {
    let state = use_app_state();
    let Some((name, role)) = state
        .read()
        .auth
        .user()
        .map(|user| (user.name.clone(), user.role_label().to_string()))
    else {
        return rsx! {};
    };
    let avatar = initials(&name);

    rsx! {
        document::Stylesheet { href: SIDEBAR_CSS }
        header {
            class: "topbar",
            div { class: "topbar-spacer" }
            div {
                class: "topbar-user",
                div { class: "avatar", "{avatar}" }
                div {
                    class: "topbar-user-text",
                    span { class: "topbar-user-name", "{name}" }
                    span { class: "topbar-user-role", "{role}" }
                }
            }
        }
    }
}
