//! Four-step appointment booking form.
//!
//! The step logic lives in [`store::wizard::AppointmentWizard`]; this component
//! only renders the current step and feeds input back into it. Vets, groomers
//! and the account's pets are loaded on mount, and the candidate list is
//! recomputed whenever either professional slice changes.

use dioxus::prelude::*;
use store::wizard::{pet_choices, AppointmentWizard, ProfessionalCard, Step, APPOINTMENT_TYPES, TIME_SLOTS};
use store::Pet;

use crate::{dispatch, dispatch_for_user, use_app_state, use_services, ErrorBanner, Spinner, SuccessModal};

const WIZARD_CSS: Asset = asset!("/assets/styling/wizard.css");

#[component]
pub fn BookingWizard() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut wizard = use_signal(AppointmentWizard::new);
    let mut notice = use_signal(|| None::<String>);

    use_hook(move || {
        let client = services.client(&state.peek().auth);
        let pet_id = state
            .peek()
            .auth
            .session
            .as_ref()
            .and_then(|s| s.account.pet.as_ref())
            .map(|pet| pet.id);

        let vets = client.clone();
        spawn(async move {
            dispatch(state, |s| &mut s.vets, api::fetch_vets(&vets)).await;
        });
        let groomers = client.clone();
        spawn(async move {
            dispatch(state, |s| &mut s.groomers, api::fetch_groomers(&groomers)).await;
        });
        if let Some(pet_id) = pet_id {
            spawn(async move {
                dispatch(state, |s| &mut s.user_details, api::fetch_user_details(&client, pet_id)).await;
            });
        }
    });

    use_effect(move || {
        let app = state.read();
        let vets = app.vets.data.clone();
        let groomers = app.groomers.data.clone();
        drop(app);
        wizard.write().refresh_candidates(vets, groomers);
    });

    let app = state.read();
    let pets = pet_choices(
        app.user_details.data.as_ref(),
        app.auth.session.as_ref().and_then(|s| s.account.pet.as_ref()),
    );
    let professionals_loading = app.vets.loading || app.groomers.loading;
    let submitting = app.create_appointment.loading;
    let submit_error = app.create_appointment.error.clone();
    let submitted = app.create_appointment.success;
    drop(app);

    let current = wizard.read().step();
    let step_valid = wizard.read().is_step_valid();
    let last_step = wizard.read().is_last_step();

    let submit = move |_| {
        let request = match wizard.read().build_request() {
            Ok(request) => request,
            Err(e) => {
                notice.set(Some(e.to_string()));
                return;
            }
        };
        notice.set(None);
        let client = services.client(&state.peek().auth);
        spawn(async move {
            dispatch_for_user(state, |s| &mut s.create_appointment, move |user_id| async move {
                api::create_appointment(&client, user_id, &request).await
            })
            .await;
        });
    };

    let close_success = move |_| {
        wizard.write().reset();
        state.write().create_appointment.reset();
    };

    rsx! {
        document::Stylesheet { href: WIZARD_CSS }

        div {
            class: "wizard",

            ol {
                class: "wizard-steps",
                for step in Step::ALL {
                    li {
                        key: "{step.number()}",
                        class: step_class(step, current),
                        span { class: "wizard-step-number", "{step.number()}" }
                        span { class: "wizard-step-title", "{step.title()}" }
                    }
                }
            }

            if let Some(message) = notice() {
                ErrorBanner {
                    message: message,
                    on_dismiss: move |_| notice.set(None),
                }
            }
            if let Some(message) = submit_error {
                ErrorBanner {
                    message: message,
                    on_dismiss: move |_| state.write().create_appointment.clear_error(),
                }
            }

            div {
                class: "wizard-panel",
                match current {
                    Step::SelectPet => rsx! { PetStep { wizard, pets } },
                    Step::SelectType => rsx! { TypeStep { wizard } },
                    Step::DateTime => rsx! { DateTimeStep { wizard } },
                    Step::SelectProfessional => rsx! {
                        ProfessionalStep { wizard, loading: professionals_loading }
                    },
                }
            }

            div {
                class: "wizard-actions",
                button {
                    class: "btn btn-secondary",
                    disabled: current == Step::SelectPet,
                    onclick: move |_| {
                        wizard.write().previous();
                    },
                    "Previous"
                }
                if last_step {
                    button {
                        class: "btn btn-primary",
                        disabled: !step_valid || submitting,
                        onclick: submit,
                        if submitting { "Booking..." } else { "Book Appointment" }
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        disabled: !step_valid,
                        onclick: move |_| {
                            wizard.write().next();
                        },
                        "Next"
                    }
                }
            }
        }

        if submitted {
            SuccessModal {
                title: "Appointment Request Successful!",
                message: "Your appointment request has been sent. Please wait for the confirmation.",
                on_close: close_success,
            }
        }
    }
}

fn step_class(step: Step, current: Step) -> &'static str {
    if step == current {
        "wizard-step current"
    } else if step < current {
        "wizard-step done"
    } else {
        "wizard-step"
    }
}

#[component]
fn PetStep(wizard: Signal<AppointmentWizard>, pets: Vec<Pet>) -> Element {
    let mut wizard = wizard;
    let selected = wizard.read().draft().pet_id;

    rsx! {
        h2 { class: "wizard-heading", "Which pet is this appointment for?" }
        if pets.is_empty() {
            div {
                class: "wizard-blocking",
                p { "Please select a pet" }
                p { class: "muted", "Add a pet to your account before booking an appointment." }
            }
        }
        div {
            class: "choice-grid",
            for pet in pets {
                button {
                    key: "{pet.id}",
                    class: if selected == Some(pet.id) { "choice-card selected" } else { "choice-card" },
                    onclick: move |_| wizard.write().set_pet(Some(pet.id)),
                    span { class: "choice-icon", "🐾" }
                    span { class: "choice-title", "{pet.display_name()}" }
                    span { class: "muted", "{pet.species_name()} · {pet.breed_name()}" }
                }
            }
        }
    }
}

#[component]
fn TypeStep(wizard: Signal<AppointmentWizard>) -> Element {
    let mut wizard = wizard;
    let selected = wizard.read().draft().appointment_type.clone();

    rsx! {
        h2 { class: "wizard-heading", "What kind of appointment?" }
        div {
            class: "choice-grid",
            for kind in APPOINTMENT_TYPES {
                button {
                    key: "{kind.value}",
                    class: if selected == kind.value { "choice-card selected" } else { "choice-card" },
                    onclick: move |_| wizard.write().set_appointment_type(kind.value),
                    span { class: "choice-icon", "{kind.icon}" }
                    span { class: "choice-title", "{kind.label}" }
                }
            }
        }
    }
}

#[component]
fn DateTimeStep(wizard: Signal<AppointmentWizard>) -> Element {
    let mut wizard = wizard;
    let draft = wizard.read().draft().clone();

    rsx! {
        h2 { class: "wizard-heading", "When works for you?" }
        label {
            class: "field",
            span { "Date" }
            input {
                r#type: "date",
                value: "{draft.date}",
                oninput: move |evt| wizard.write().set_date(evt.value()),
            }
        }
        div {
            class: "slot-grid",
            for slot in TIME_SLOTS.iter().copied() {
                button {
                    key: "{slot}",
                    class: if draft.time == slot { "slot selected" } else { "slot" },
                    onclick: move |_| wizard.write().set_time(slot),
                    "{slot}"
                }
            }
        }
        label {
            class: "field",
            span { "Notes (optional)" }
            textarea {
                rows: "3",
                value: "{draft.description}",
                oninput: move |evt| wizard.write().set_description(evt.value()),
            }
        }
    }
}

#[component]
fn ProfessionalStep(wizard: Signal<AppointmentWizard>, loading: bool) -> Element {
    let mut wizard = wizard;
    let selected = wizard.read().draft().professional_id;
    let term = wizard.read().search_term().to_string();
    let cards: Vec<(ProfessionalCard, String)> = wizard
        .read()
        .searched()
        .into_iter()
        .map(|card| (card.clone(), format!("{:.1}", card.rating)))
        .collect();

    rsx! {
        h2 { class: "wizard-heading", "Choose a professional" }
        input {
            class: "search",
            r#type: "search",
            placeholder: "Search by name or specialty",
            value: "{term}",
            oninput: move |evt| wizard.write().set_search_term(evt.value()),
        }
        if loading {
            Spinner { label: "Loading professionals..." }
        } else if cards.is_empty() {
            p { class: "muted", "No professionals match your search." }
        }
        div {
            class: "choice-grid",
            for (card, rating) in cards {
                button {
                    key: "{card.id()}",
                    class: if selected == Some(card.id()) { "choice-card selected" } else { "choice-card" },
                    onclick: {
                        let id = card.id();
                        move |_| wizard.write().set_professional(Some(id))
                    },
                    div { class: "avatar", "{card.avatar}" }
                    span { class: "choice-title", "{card.name()}" }
                    span { class: "muted", "{card.specialty()}" }
                    span { class: "muted", "{card.experience} · ★ {rating}" }
                    span {
                        class: if card.available { "badge badge-green" } else { "badge badge-gray" },
                        if card.available { "Available" } else { "Unavailable" }
                    }
                }
            }
        }
    }
}
