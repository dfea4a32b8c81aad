use dioxus::prelude::*;
use store::validation::PetForm;
use ui::{dispatch, dispatch_for_user, use_app_state, use_services, ErrorBanner, SuccessModal};

#[component]
pub fn AddPets() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut form = use_signal(PetForm::default);
    let values = form.read().clone();
    let mut invalid = use_signal(|| Option::<String>::None);

    use_hook(move || {
        if !state.peek().breeds.data.breeds.is_empty() {
            return;
        }
        let client = services.client(&state.peek().auth);
        spawn(async move {
            dispatch(state, |s| &mut s.breeds, api::fetch_breeds(&client)).await;
        });
    });

    let app = state.read();
    let species = app.breeds.data.species.clone();
    let breeds = app.breeds.data.breeds_for(&form.read().species).to_vec();
    let saving = app.add_pet.loading;
    let server_error = app.add_pet.error.clone();
    let added = app.add_pet.success;
    drop(app);

    let handle_submit = move |evt: FormEvent| {
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
            dispatch_for_user(state, |s| &mut s.add_pet, move |user_id| async move {
                api::add_pet(&client, user_id, &request).await
            })
            .await;
        });
    };

    let close_success = move |_| {
        state.write().add_pet.reset();
        form.set(PetForm::default());
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Add a Pet" }
            p { class: "muted", "Register another companion to your account" }
        }

        form {
            class: "panel form-panel",
            onsubmit: handle_submit,

            if let Some(message) = invalid() {
                ErrorBanner { message: message }
            }
            if let Some(message) = server_error {
                ErrorBanner {
                    message: message,
                    on_dismiss: move |_| state.write().add_pet.clear_error(),
                }
            }

            div {
                class: "form-grid",
                label {
                    class: "field",
                    span { "Pet name" }
                    input {
                        value: "{values.name}",
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                }
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
                label {
                    class: "field",
                    span { "Gender" }
                    select {
                        value: "{values.gender}",
                        onchange: move |evt: FormEvent| form.write().gender = evt.value(),
                        option { value: "", "Prefer not to say" }
                        option { value: "male", "Male" }
                        option { value: "female", "Female" }
                    }
                }
                label {
                    class: "field",
                    span { "Weight (kg, optional)" }
                    input {
                        r#type: "number",
                        min: "0",
                        step: "0.1",
                        value: "{values.weight}",
                        oninput: move |evt: FormEvent| form.write().weight = evt.value(),
                    }
                }
            }

            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: saving,
                if saving { "Saving..." } else { "Add Pet" }
            }
        }

        if added {
            SuccessModal {
                title: "Pet Added!",
                message: "Your pet is now part of your PetPerfect family.",
                on_close: close_success,
            }
        }
    }
}
