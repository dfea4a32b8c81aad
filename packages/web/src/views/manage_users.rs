//! Admin: customer accounts.

use dioxus::prelude::*;
use store::validation::UserForm;
use store::{AppState, User};
use ui::{
    dispatch, use_app_state, use_debounced, use_services, ConfirmDialog, ErrorBanner, ModalOverlay,
    Services, Spinner,
};

fn load(state: Signal<AppState>, services: Services, name: String) {
    let client = services.client(&state.peek().auth);
    spawn(async move {
        dispatch(state, |s| &mut s.users, api::list_users(&client, &name)).await;
    });
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum StatusFilter {
    All,
    Active,
    Inactive,
}

impl StatusFilter {
    fn parse(value: &str) -> Self {
        match value {
            "active" => StatusFilter::Active,
            "inactive" => StatusFilter::Inactive,
            _ => StatusFilter::All,
        }
    }

    fn keeps(self, user: &User) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Active => user.is_active(),
            StatusFilter::Inactive => !user.is_active(),
        }
    }
}

#[component]
pub fn ManageUsers() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut search = use_signal(String::new);
    let term = use_debounced(search, services.debounce());
    let mut filter = use_signal(|| StatusFilter::All);
    let mut editing = use_signal(|| Option::<User>::None);
    let mut deleting = use_signal(|| Option::<User>::None);

    // Runs on mount and whenever the debounced search settles
    use_effect(move || load(state, services, term()));

    let app = state.read();
    let loading = app.users.loading;
    let error = app.users.error.clone();
    let delete_busy = app.delete_user.loading;
    let delete_error = app.delete_user.error.clone();
    let status = filter();
    let rows: Vec<User> = app
        .users
        .data
        .iter()
        .filter(|user| status.keeps(user))
        .cloned()
        .collect();
    drop(app);

    let confirm_delete = move |_| {
        let Some(user) = deleting() else {
            return;
        };
        let client = services.client(&state.peek().auth);
        spawn(async move {
            if dispatch(state, |s| &mut s.delete_user, api::delete_user(&client, user.id)).await {
                tracing::info!(user_id = user.id, "Deleted user");
                deleting.set(None);
                state.write().delete_user.reset();
                load(state, services, term.peek().clone());
            }
        });
    };

    rsx! {
        div {
            class: "page-header",
            h1 { "Manage Users" }
            p { class: "muted", "View, edit and remove customer accounts" }
        }

        div {
            class: "toolbar",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search customers by name",
                value: "{search}",
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
            select {
                onchange: move |evt: FormEvent| filter.set(StatusFilter::parse(&evt.value())),
                option { value: "all", "All" }
                option { value: "active", "Active" }
                option { value: "inactive", "Inactive" }
            }
        }

        if let Some(message) = error {
            ErrorBanner {
                message: message,
                on_retry: move |_| load(state, services, term.peek().clone()),
            }
        }

        if loading {
            Spinner { label: "Loading users..." }
        } else if rows.is_empty() {
            div { class: "empty-state", p { "No users found" } }
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Customer Name" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Status" }
                        th { class: "center", "Actions" }
                    }
                }
                tbody {
                    for (index, user) in rows.into_iter().enumerate() {
                        tr {
                            key: "{user.id}",
                            td { "{index + 1}" }
                            td { "{user.name}" }
                            td { "{user.email}" }
                            td { "{user.phone.clone().unwrap_or_default()}" }
                            td {
                                span {
                                    class: if user.is_active() { "badge badge-green" } else { "badge badge-gray" },
                                    if user.is_active() { "Active" } else { "Inactive" }
                                }
                            }
                            td {
                                class: "center actions",
                                button {
                                    class: "btn btn-small btn-secondary",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| editing.set(Some(user.clone()))
                                    },
                                    "Edit"
                                }
                                button {
                                    class: "btn btn-small btn-danger",
                                    onclick: {
                                        let user = user.clone();
                                        move |_| deleting.set(Some(user.clone()))
                                    },
                                    "Delete"
                                }
                            }
                        }
                    }
                }
            }
        }

        if let Some(user) = editing() {
            EditUserDialog {
                user: user,
                on_close: move |saved: bool| {
                    editing.set(None);
                    if saved {
                        load(state, services, term.peek().clone());
                    }
                },
            }
        }

        if let Some(user) = deleting() {
            ConfirmDialog {
                title: "Delete user",
                message: format!("Delete {}? This cannot be undone.", user.name),
                busy: delete_busy,
                on_confirm: confirm_delete,
                on_cancel: move |_| {
                    deleting.set(None);
                    state.write().delete_user.reset();
                },
            }
            if let Some(message) = delete_error {
                ErrorBanner { message: message }
            }
        }
    }
}

#[component]
fn EditUserDialog(user: User, on_close: EventHandler<bool>) -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut form = use_signal(|| UserForm::from_user(&user));
    let values = form.read().clone();
    let mut invalid = use_signal(|| Option::<String>::None);

    let saving = state.read().edit_user.loading;
    let server_error = state.read().edit_user.error.clone();
    let user_id = user.id;

    let handle_save = move |evt: FormEvent| {
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
            if dispatch(state, |s| &mut s.edit_user, api::edit_user(&client, user_id, &request)).await {
                state.write().edit_user.reset();
                on_close.call(true);
            }
        });
    };

    let cancel = move |_| {
        state.write().edit_user.reset();
        on_close.call(false);
    };

    rsx! {
        ModalOverlay {
            on_close: cancel,
            form {
                class: "modal-body",
                onsubmit: handle_save,

                h2 { "Edit User" }

                if let Some(message) = invalid() {
                    ErrorBanner { message: message }
                }
                if let Some(message) = server_error {
                    ErrorBanner { message: message }
                }

                label {
                    class: "field",
                    span { "Name" }
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
                    span { "Status" }
                    select {
                        value: "{values.status}",
                        onchange: move |evt: FormEvent| form.write().status = evt.value(),
                        option { value: "active", "Active" }
                        option { value: "inactive", "Inactive" }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            state.write().edit_user.reset();
                            on_close.call(false);
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}
