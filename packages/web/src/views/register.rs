//! Registration page: account details plus the first pet.

use dioxus::prelude::*;
use store::navigation::LOGIN;
use store::validation::RegistrationForm;
use ui::{dispatch, use_app_state, use_services, ErrorBanner, SuccessModal};

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let nav = use_navigator();
    let mut form = use_signal(RegistrationForm::default);
    let values = form.read().clone();
    let mut invalid = use_signal(|| Option::<String>::None);

    // Breed lookup for the species/breed selects
    use_hook(move || {
        let client = services.client(&state.peek().auth);
        spawn(async move {
            dispatch(state, |s| &mut s.breeds, api::fetch_breeds(&client)).await;
        });
    });

    let app = state.read();
    let species = app.breeds.data.species.clone();
    let breeds = app.breeds.data.breeds_for(&form.read().species).to_vec();
    let breeds_error = app.breeds.error.clone();
    let loading = app.register.loading;
    let server_error = app.register.error.clone();
    let registered = app.register.success;
    drop(app);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                invalid.set(Some(e.to_string()));
                return;
            }
        };
        invalid.set(None);

        let client = services.client(&state.peek().auth);
        spawn(async move {
            dispatch(state, |s| &mut s.register, api::register(&client, &request)).await;
        });
    };

    let close_success = move |_| {
        state.write().register.reset();
        form.set(RegistrationForm::default());
        nav.replace(Route::Login {});
    };

    rsx! {
        div {
            class: "auth-page",

            form {
                class: "auth-card wide",
                onsubmit: handle_register,

                h1 { "Create Account" }
                p { class: "muted", "Join PetPerfect and register your first pet" }

                if let Some(message) = invalid() {
                    ErrorBanner { message: message }
                }
                if let Some(message) = server_error {
                    ErrorBanner {
                        message: message,
                        on_dismiss: move |_| state.write().register.clear_error(),
                    }
                }
                if let Some(message) = breeds_error {
                    ErrorBanner { message: message }
                }

                h3 { class: "form-section", "Your details" }
                div {
                    class: "form-grid",
                    label {
                        class: "field",
                        span { "Full name" }
                        input {
                            value: "{values.name}",
                            oninput: move |evt: FormEvent| form.write().name = evt.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Email" }
                        input {
                            r#type: "email",
                            value: "{values.email}",
                            oninput: move |evt: FormEvent| form.write().email = evt.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Phone" }
                        input {
                            r#type: "tel",
                            value: "{values.phone}",
                            oninput: move |evt: FormEvent| form.write().phone = evt.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Password" }
                        input {
                            r#type: "password",
                            value: "{values.password}",
                            oninput: move |evt: FormEvent| form.write().password = evt.value(),
                        }
                    }
                }

                h3 { class: "form-section", "Your pet" }
                div {
                    class: "form-grid",
                    label {
                        class: "field",
                        span { "Species" }
                        select {
                            value: "{values.species}",
                            onchange: move |evt: FormEvent| form.write().set_species(evt.value()),
                            option { value: "", "Select species" }
                            for name in species {
                                option { key: "{name}", value: "{name}", "{name}" }
                            }
                        }
                    }
                    label {
                        class: "field",
                        span { "Breed" }
                        select {
                            value: "{values.breed}",
                            disabled: values.species.is_empty(),
                            onchange: move |evt: FormEvent| form.write().breed = evt.value(),
                            option { value: "", "Select breed" }
                            for breed in breeds {
                                option { key: "{breed.id}", value: "{breed.id}", "{breed.name}" }
                            }
                        }
                    }
                    label {
                        class: "field",
                        span { "Age (years)" }
                        input {
                            r#type: "number",
                            min: "0",
                            max: "50",
                            step: "0.1",
                            value: "{values.age}",
                            oninput: move |evt: FormEvent| form.write().age = evt.value(),
                        }
                    }
                }

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Creating account..." } else { "Create Account" }
                }

                p {
                    class: "auth-switch muted",
                    "Already registered? "
                    Link { to: LOGIN.to_string(), "Sign in" }
                }
            }
        }

        if registered {
            SuccessModal {
                title: "Registration Successful!",
                message: "Your account has been created. Please sign in to continue.",
                on_close: close_success,
            }
        }
    }
}
