//! Login page view with email/password form.

use dioxus::prelude::*;
use store::navigation::REGISTER;
use store::validation::LoginForm;
use ui::{use_app_state, use_services, ErrorBanner};

/// Login page component. The guard moves a signed-in user to their landing
/// page as soon as the session is installed.
#[component]
pub fn Login() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut form = use_signal(LoginForm::default);
    let values = form.read().clone();
    let mut invalid = use_signal(|| Option::<String>::None);

    let loading = state.read().auth.loading;
    let server_error = state.read().auth.error.clone();

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate() {
            Ok(request) => request,
            Err(e) => {
                invalid.set(Some(e.to_string()));
                return;
            }
        };
        invalid.set(None);

        spawn(async move {
            let client = services.client(&state.peek().auth);
            state.write().auth.login_pending();
            match api::login(&client, &request).await {
                Ok(session) => {
                    let storage = services.storage();
                    state.write().auth.login_fulfilled(session, storage.as_ref());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Login failed");
                    state.write().auth.login_rejected(e.reason());
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",

            form {
                class: "auth-card",
                onsubmit: handle_login,

                h1 { "Welcome back" }
                p { class: "muted", "Sign in to manage your pet's care" }

                if let Some(message) = invalid() {
                    ErrorBanner { message: message }
                }
                if let Some(message) = server_error {
                    ErrorBanner {
                        message: message,
                        on_dismiss: move |_| state.write().auth.clear_error(),
                    }
                }

                label {
                    class: "field",
                    span { "Email" }
                    input {
                        r#type: "email",
                        placeholder: "you@example.com",
                        value: "{values.email}",
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
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

                button {
                    class: "btn btn-primary btn-block",
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Signing in..." } else { "Sign In" }
                }

                p {
                    class: "auth-switch muted",
                    "Don't have an account? "
                    Link { to: REGISTER.to_string(), "Create one" }
                }
            }
        }
    }
}
