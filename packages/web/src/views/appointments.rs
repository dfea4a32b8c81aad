use dioxus::prelude::*;
use store::navigation::{APPOINTMENT, MY_APPOINTMENTS};
use ui::BookingWizard;

use super::home::ShortcutCard;

/// Landing page of the appointments section.
#[component]
pub fn Appointments() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Appointments" }
            p { class: "muted", "Manage your appointments and schedule new ones" }
        }

        div {
            class: "card-grid two",
            ShortcutCard {
                to: APPOINTMENT.to_string(),
                icon: "➕",
                title: "Create Appointment",
                text: "Schedule a new appointment with a professional veterinarian or groomer",
            }
            ShortcutCard {
                to: MY_APPOINTMENTS.to_string(),
                icon: "📋",
                title: "My Appointments",
                text: "Check upcoming visits, past appointments and cancellations",
            }
        }
    }
}

/// The booking wizard.
#[component]
pub fn Appointment() -> Element {
    rsx! {
        div {
            class: "page-header",
            h1 { "Book an Appointment" }
            p { class: "muted", "Four quick steps and your request is on its way" }
        }
        BookingWizard {}
    }
}
