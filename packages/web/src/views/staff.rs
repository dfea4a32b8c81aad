//! Pages for veterinarians and groomers.
//!
//! The backend has no endpoint listing a professional's own bookings yet, so
//! the appointment pages only show the empty state.

use dioxus::prelude::*;
use store::models::initials;
use store::ProfessionalKind;
use ui::use_app_state;

#[component]
pub fn VetAppointments() -> Element {
    rsx! { StaffAppointments { kind: ProfessionalKind::Vet } }
}

#[component]
pub fn GroomerAppointments() -> Element {
    rsx! { StaffAppointments { kind: ProfessionalKind::Groomer } }
}

#[component]
pub fn VetProfile() -> Element {
    rsx! { StaffProfile { kind: ProfessionalKind::Vet } }
}

#[component]
pub fn GroomerProfile() -> Element {
    rsx! { StaffProfile { kind: ProfessionalKind::Groomer } }
}

#[component]
fn StaffAppointments(kind: ProfessionalKind) -> Element {
    let title = match kind {
        ProfessionalKind::Vet => "Veterinary Appointments",
        ProfessionalKind::Groomer => "Grooming Appointments",
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "{title}" }
            p { class: "muted", "Appointments booked with you" }
        }
        div {
            class: "empty-state",
            p { "No appointments assigned yet" }
            p { class: "muted", "New bookings will show up here once customers schedule them." }
        }
    }
}

#[component]
fn StaffProfile(kind: ProfessionalKind) -> Element {
    let state = use_app_state();
    let app = state.read();
    let Some(user) = app.auth.user().cloned() else {
        return rsx! {};
    };
    drop(app);

    let avatar = initials(&user.name);
    let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());
    let active = user.is_active();

    rsx! {
        div {
            class: "panel profile-header",
            div { class: "avatar large", "{avatar}" }
            div {
                h1 { "{user.name}" }
                p { class: "muted", "{kind.label()}" }
                span {
                    class: if active { "badge badge-green" } else { "badge badge-gray" },
                    if active { "Active" } else { "Inactive" }
                }
            }
        }

        div {
            class: "panel",
            h2 { "Contact Information" }
            dl {
                class: "details",
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Phone" }
                dd { "{phone}" }
            }
        }
    }
}
