//! Directory of veterinarians and groomers.

use dioxus::prelude::*;
use store::{Practitioner, Professional, ProfessionalKind};
use ui::{dispatch, use_app_state, use_services, ErrorBanner, Services, Spinner};

fn load(state: Signal<store::AppState>, services: Services, kind: ProfessionalKind) {
    let client = services.client(&state.peek().auth);
    spawn(async move {
        match kind {
            ProfessionalKind::Vet => {
                dispatch(state, |s| &mut s.vets, api::fetch_vets(&client)).await;
            }
            ProfessionalKind::Groomer => {
                dispatch(state, |s| &mut s.groomers, api::fetch_groomers(&client)).await;
            }
        }
    });
}

#[component]
pub fn Professionals() -> Element {
    let state = use_app_state();
    let services = use_services();
    let mut kind = use_signal(|| ProfessionalKind::Vet);
    let mut search = use_signal(String::new);

    use_hook(move || {
        load(state, services, ProfessionalKind::Vet);
        load(state, services, ProfessionalKind::Groomer);
    });

    let current = kind();
    let app = state.read();
    let slice = match current {
        ProfessionalKind::Vet => &app.vets,
        ProfessionalKind::Groomer => &app.groomers,
    };
    let loading = slice.loading;
    let error = slice.error.clone();
    let term = search().trim().to_lowercase();
    let visible: Vec<Professional> = slice
        .data
        .iter()
        .filter(|p| {
            term.is_empty()
                || p.name().to_lowercase().contains(&term)
                || p.specialty().to_lowercase().contains(&term)
        })
        .cloned()
        .collect();
    drop(app);

    rsx! {
        div {
            class: "page-header",
            h1 { "Available Professionals" }
            p { class: "muted", "Browse and connect with our pet care experts" }
        }

        div {
            class: "toolbar",
            div {
                class: "tabs",
                for tab_kind in [ProfessionalKind::Vet, ProfessionalKind::Groomer] {
                    button {
                        key: "{tab_kind.label()}",
                        class: if tab_kind == current { "tab active" } else { "tab" },
                        onclick: move |_| kind.set(tab_kind),
                        "{tab_kind.label()}s"
                    }
                }
            }
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search by name or specialty",
                value: "{search}",
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
        }

        if let Some(message) = error {
            ErrorBanner {
                message: message,
                on_retry: move |_| load(state, services, current),
            }
        }

        if loading {
            Spinner { label: "Loading professionals..." }
        } else if visible.is_empty() {
            div {
                class: "empty-state",
                p { "No professionals found" }
                p { class: "muted", "Try adjusting your search criteria" }
            }
        } else {
            div {
                class: "card-grid",
                for professional in visible {
                    ProfessionalTile { key: "{professional.id()}", professional: professional }
                }
            }
        }
    }
}

#[component]
fn ProfessionalTile(professional: Professional) -> Element {
    let available = professional.is_available();
    let rating = format!("{:.1}", professional.rating());

    rsx! {
        div {
            class: "profile-tile",
            div { class: "avatar large", "{professional.avatar()}" }
            h3 { "{professional.name()}" }
            p { class: "muted", "{professional.specialty()}" }
            p { "{professional.experience()} · ★ {rating}" }
            span {
                class: if available { "badge badge-green" } else { "badge badge-gray" },
                if available { "Available" } else { "Unavailable" }
            }
        }
    }
}
