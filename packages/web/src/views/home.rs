use dioxus::prelude::*;
use store::navigation::{APPOINTMENT, MY_APPOINTMENTS, PROFESSIONALS};
use ui::use_app_state;

#[component]
pub fn Home() -> Element {
    let state = use_app_state();
    let name = state
        .read()
        .auth
        .user()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        section {
            class: "hero",
            h1 { "Welcome back, {name}!" }
            p { "Everything your pet needs, from check-ups to grooming, in one place." }
        }

        div {
            class: "card-grid",
            ShortcutCard {
                to: APPOINTMENT.to_string(),
                icon: "📅",
                title: "Book Appointment",
                text: "Schedule a new appointment with a professional",
            }
            ShortcutCard {
                to: MY_APPOINTMENTS.to_string(),
                icon: "🗂️",
                title: "My Appointments",
                text: "View and manage your scheduled appointments",
            }
            ShortcutCard {
                to: PROFESSIONALS.to_string(),
                icon: "🩺",
                title: "Professionals",
                text: "Browse and connect with our pet care experts",
            }
        }
    }
}

#[component]
pub(crate) fn ShortcutCard(to: String, icon: String, title: String, text: String) -> Element {
    rsx! {
        Link {
            class: "shortcut-card",
            to: to,
            div { class: "shortcut-icon", "{icon}" }
            h3 { "{title}" }
            p { class: "muted", "{text}" }
        }
    }
}
