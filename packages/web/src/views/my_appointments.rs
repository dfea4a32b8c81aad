//! The customer's appointments split into upcoming, past and cancelled tabs.

use dioxus::prelude::*;
use store::models::{Appointment, AppointmentBucket, AppointmentStatus};
use store::navigation::APPOINTMENT;
use ui::{dispatch_for_user, use_app_state, use_services, ErrorBanner, Services, Spinner};

fn load(state: Signal<store::AppState>, services: Services, bucket: AppointmentBucket) {
    let client = services.client(&state.peek().auth);
    spawn(async move {
        dispatch_for_user(state, move |s| s.appointments_mut(bucket), move |user_id| async move {
            api::fetch_appointments(&client, user_id, bucket).await
        })
        .await;
    });
}

fn status_badge(status: Option<AppointmentStatus>) -> &'static str {
    match status {
        Some(AppointmentStatus::Confirmed) => "badge badge-green",
        Some(AppointmentStatus::Pending) => "badge badge-yellow",
        Some(AppointmentStatus::Completed) => "badge badge-blue",
        Some(AppointmentStatus::Cancelled) => "badge badge-red",
        _ => "badge badge-gray",
    }
}

#[component]
pub fn MyAppointments() -> Element {
    let state = use_app_state();
    let services = use_services();
    let mut selected = use_signal(|| AppointmentBucket::Upcoming);
    let mut search = use_signal(String::new);

    use_hook(move || {
        for bucket in AppointmentBucket::ALL {
            load(state, services, bucket);
        }
    });

    let app = state.read();
    let counts: Vec<(AppointmentBucket, usize)> = AppointmentBucket::ALL
        .iter()
        .map(|&bucket| (bucket, app.appointments(bucket).data.len()))
        .collect();
    let bucket = selected();
    let slice = app.appointments(bucket);
    let loading = slice.loading;
    let error = slice.error.clone();
    let term = search();
    let visible: Vec<Appointment> = slice
        .data
        .iter()
        .filter(|appointment| appointment.matches(term.trim()))
        .cloned()
        .collect();
    drop(app);

    rsx! {
        div {
            class: "page-header",
            h1 { "My Appointments" }
            p { class: "muted", "Keep track of every visit" }
        }

        div {
            class: "tabs",
            for (tab, count) in counts {
                button {
                    key: "{tab.path_segment()}",
                    class: if tab == bucket { "tab active" } else { "tab" },
                    onclick: move |_| selected.set(tab),
                    "{tab.tab_label()}"
                    span { class: "tab-count", "{count}" }
                }
            }
        }

        input {
            class: "search wide",
            r#type: "search",
            placeholder: "Search by professional, type or pet",
            value: "{term}",
            oninput: move |evt: FormEvent| search.set(evt.value()),
        }

        if let Some(message) = error {
            ErrorBanner {
                message: message,
                on_retry: move |_| load(state, services, bucket),
            }
        }

        if loading {
            Spinner { label: "Loading appointments..." }
        } else if visible.is_empty() {
            div {
                class: "empty-state",
                p { "No {bucket.tab_label().to_lowercase()} appointments" }
                if bucket == AppointmentBucket::Upcoming {
                    Link { class: "btn btn-primary", to: APPOINTMENT.to_string(), "Book an appointment" }
                }
            }
        } else {
            div {
                class: "list",
                for appointment in visible {
                    AppointmentCard { key: "{appointment.id}", appointment: appointment }
                }
            }
        }
    }
}

#[component]
fn AppointmentCard(appointment: Appointment) -> Element {
    let status = appointment.status;
    let status_label = status.map(|s| s.label()).unwrap_or("Unknown");
    let time = appointment.time.clone().unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div {
            class: "list-card",
            div { class: "avatar", "{appointment.professional_avatar()}" }
            div {
                class: "list-card-body",
                h3 { "{appointment.display_type()}" }
                p { class: "muted", "with {appointment.professional_name()} · {appointment.professional_specialty()}" }
                p { "🐾 {appointment.pet_name()}" }
                p { class: "muted", "📅 {appointment.formatted_date()} · 🕒 {time}" }
                if let Some(notes) = appointment.description.as_deref().filter(|d| !d.is_empty()) {
                    p { class: "muted", "“{notes}”" }
                }
            }
            span { class: status_badge(status), "{status_label}" }
        }
    }
}
