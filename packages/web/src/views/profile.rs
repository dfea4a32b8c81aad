use dioxus::prelude::*;
use store::models::initials;
use store::wizard::pet_choices;
use store::Pet;
use ui::{dispatch, use_app_state, use_services, ErrorBanner, Spinner};

/// Account page for customers and admins: contact details and, for customers,
/// every registered pet.
#[component]
pub fn Profile() -> Element {
    let state = use_app_state();
    let services = use_services();

    use_hook(move || {
        let pet_id = state
            .peek()
            .auth
            .session
            .as_ref()
            .and_then(|s| s.account.pet.as_ref())
            .map(|pet| pet.id);
        let Some(pet_id) = pet_id else {
            return;
        };
        let client = services.client(&state.peek().auth);
        spawn(async move {
            dispatch(state, |s| &mut s.user_details, api::fetch_user_details(&client, pet_id)).await;
        });
    });

    let app = state.read();
    let Some(user) = app.auth.user().cloned() else {
        return rsx! {};
    };
    let pets = pet_choices(
        app.user_details.data.as_ref(),
        app.auth.session.as_ref().and_then(|s| s.account.pet.as_ref()),
    );
    let loading = app.user_details.loading;
    let error = app.user_details.error.clone();
    drop(app);

    let avatar = initials(&user.name);
    let phone = user.phone.clone().unwrap_or_else(|| "Not provided".to_string());

    rsx! {
        div {
            class: "panel profile-header",
            div { class: "avatar large", "{avatar}" }
            div {
                h1 { "{user.name}" }
                p { class: "muted", "{user.email}" }
                span { class: "badge badge-blue", "{user.role_label()}" }
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

        if let Some(message) = error {
            ErrorBanner { message: message }
        }

        if loading {
            Spinner { label: "Loading profile..." }
        } else if !pets.is_empty() {
            div {
                class: "panel",
                h2 { "Pet Information" }
                div {
                    class: "card-grid",
                    for pet in pets {
                        PetTile { key: "{pet.id}", pet: pet }
                    }
                }
            }
        }
    }
}

#[component]
fn PetTile(pet: Pet) -> Element {
    let age = pet
        .age
        .map(|a| format!("{a} years"))
        .unwrap_or_else(|| "N/A".to_string());
    let weight = pet
        .weight
        .map(|w| format!("{w} kg"))
        .unwrap_or_else(|| "N/A".to_string());
    let gender = pet.gender.clone().unwrap_or_else(|| "N/A".to_string());

    rsx! {
        div {
            class: "profile-tile",
            div { class: "shortcut-icon", "🐾" }
            h3 { "{pet.display_name()}" }
            p { class: "muted", "{pet.species_name()} · {pet.breed_name()}" }
            dl {
                class: "details",
                dt { "Age" }
                dd { "{age}" }
                dt { "Gender" }
                dd { "{gender}" }
                dt { "Weight" }
                dd { "{weight}" }
            }
        }
    }
}
