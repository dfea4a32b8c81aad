//! Admin: veterinarians and groomers.

use dioxus::prelude::*;
use store::models::{ProfessionalKind, StaffMember};
use store::validation::ProfessionalForm;
use store::AppState;
use ui::{
    dispatch, use_app_state, use_debounced, use_services, ConfirmDialog, ErrorBanner, ModalOverlay,
    Services, Spinner,
};

fn load(state: Signal<AppState>, services: Services, filter: api::ProfessionalFilter) {
    let client = services.client(&state.peek().auth);
    spawn(async move {
        dispatch(state, |s| &mut s.professionals, api::list_professionals(&client, &filter)).await;
    });
}

#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    Create,
    Edit(StaffMember),
}

#[component]
pub fn ManageProfessionals() -> Element {
    let mut state = use_app_state();
    let services = use_services();
    let mut search = use_signal(String::new);
    let term = use_debounced(search, services.debounce());
    let mut role_id = use_signal(|| Option::<u8>::None);
    let mut dialog = use_signal(|| Option::<Dialog>::None);
    let mut deleting = use_signal(|| Option::<StaffMember>::None);

    let current_filter = move || api::ProfessionalFilter {
        role_id: *role_id.peek(),
        search: term.peek().clone(),
    };

    // Runs on mount and whenever the debounced search or the role filter changes
    use_effect(move || {
        let filter = api::ProfessionalFilter {
            role_id: role_id(),
            search: term(),
        };
        load(state, services, filter);
    });

    let app = state.read();
    let loading = app.professionals.loading;
    let error = app.professionals.error.clone();
    let rows = app.professionals.data.clone();
    let delete_busy = app.delete_professional.loading;
    let delete_error = app.delete_professional.error.clone();
    drop(app);

    let confirm_delete = move |_| {
        let Some(member) = deleting() else {
            return;
        };
        let client = services.client(&state.peek().auth);
        spawn(async move {
            let deleted = dispatch(
                state,
                |s| &mut s.delete_professional,
                api::delete_professional(&client, member.id),
            )
            .await;
            if deleted {
                tracing::info!(professional_id = member.id, "Deleted professional");
                deleting.set(None);
                state.write().delete_professional.reset();
                load(state, services, current_filter());
            }
        });
    };

    rsx! {
        div {
            class: "page-header split",
            div {
                h1 { "Manage Professionals" }
                p { class: "muted", "Add, edit and remove veterinarians and groomers" }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| dialog.set(Some(Dialog::Create)),
                "+ Add Professional"
            }
        }

        div {
            class: "toolbar",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search by name, email or specialization",
                value: "{search}",
                oninput: move |evt: FormEvent| search.set(evt.value()),
            }
            select {
                onchange: move |evt: FormEvent| role_id.set(evt.value().parse().ok()),
                option { value: "all", "All" }
                option { value: "3", "Veterinarian" }
                option { value: "4", "Groomer" }
            }
        }

        if let Some(message) = error {
            ErrorBanner {
                message: message,
                on_retry: move |_| load(state, services, current_filter()),
            }
        }

        if loading {
            Spinner { label: "Loading professionals..." }
        } else if rows.is_empty() {
            div { class: "empty-state", p { "No professionals found" } }
        } else {
            table {
                class: "data-table",
                thead {
                    tr {
                        th { "#" }
                        th { "Professional" }
                        th { "Role" }
                        th { "Specialization" }
                        th { "Experience" }
                        th { "Email" }
                        th { "Phone" }
                        th { "Status" }
                        th { class: "center", "Actions" }
                    }
                }
                tbody {
                    for (index, member) in rows.into_iter().enumerate() {
                        StaffRow {
                            key: "{member.id}",
                            index: index + 1,
                            member: member.clone(),
                            on_edit: move |member: StaffMember| dialog.set(Some(Dialog::Edit(member))),
                            on_delete: move |member: StaffMember| deleting.set(Some(member)),
                        }
                    }
                }
            }
        }

        if let Some(open) = dialog() {
            ProfessionalDialog {
                dialog: open,
                on_close: move |saved: bool| {
                    dialog.set(None);
                    if saved {
                        load(state, services, current_filter());
                    }
                },
            }
        }

        if let Some(member) = deleting() {
            ConfirmDialog {
                title: "Delete professional",
                message: format!(
                    "Delete {}? This cannot be undone.",
                    member.name.as_deref().unwrap_or("this professional")
                ),
                busy: delete_busy,
                on_confirm: confirm_delete,
                on_cancel: move |_| {
                    deleting.set(None);
                    state.write().delete_professional.reset();
                },
            }
            if let Some(message) = delete_error {
                ErrorBanner { message: message }
            }
        }
    }
}

#[component]
fn StaffRow(
    index: usize,
    member: StaffMember,
    on_edit: EventHandler<StaffMember>,
    on_delete: EventHandler<StaffMember>,
) -> Element {
    let profile = member.staff_profile().cloned().unwrap_or_default();
    let name = member.name.clone().unwrap_or_default();
    let specialization = profile.specialization.unwrap_or_else(|| "-".to_string());
    let experience = profile
        .experience_years
        .map(|y| format!("{y} yrs"))
        .unwrap_or_else(|| "-".to_string());
    let available = profile.status.as_deref() == Some("available");
    let email = member.email.clone().unwrap_or_default();
    let phone = member.phone.clone().unwrap_or_default();
    let role = member.role_label().to_string();
    let edited = member.clone();
    let deleted = member.clone();

    rsx! {
        tr {
            td { "{index}" }
            td { "{name}" }
            td { "{role}" }
            td { "{specialization}" }
            td { "{experience}" }
            td { "{email}" }
            td { "{phone}" }
            td {
                span {
                    class: if available { "badge badge-green" } else { "badge badge-gray" },
                    if available { "Available" } else { "Unavailable" }
                }
            }
            td {
                class: "center actions",
                button {
                    class: "btn btn-small btn-secondary",
                    onclick: move |_| on_edit.call(edited.clone()),
                    "Edit"
                }
                button {
                    class: "btn btn-small btn-danger",
                    onclick: move |_| on_delete.call(deleted.clone()),
                    "Delete"
                }
            }
        }
    }
}

fn reset_dialog_slices(mut state: Signal<AppState>) {
    let mut app = state.write();
    app.create_professional.reset();
    app.edit_professional.reset();
}

#[component]
fn ProfessionalDialog(dialog: Dialog, on_close: EventHandler<bool>) -> Element {
    let mut state = use_app_state();
    let services = use_services();

    let (creating, target_id) = match &dialog {
        Dialog::Create => (true, None),
        Dialog::Edit(member) => (false, Some(member.id)),
    };
    let mut form = use_signal(|| match &dialog {
        Dialog::Create => ProfessionalForm::default(),
        Dialog::Edit(member) => member
            .to_professional()
            .map(|p| ProfessionalForm::from_professional(&p))
            .unwrap_or_default(),
    });
    let values = form.read().clone();
    let mut invalid = use_signal(|| Option::<String>::None);

    let app = state.read();
    let slice = if creating {
        &app.create_professional
    } else {
        &app.edit_professional
    };
    let saving = slice.loading;
    let server_error = slice.error.clone();
    drop(app);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match form.read().validate(creating) {
            Ok(request) => request,
            Err(e) => {
                invalid.set(Some(e.to_string()));
                return;
            }
        };
        invalid.set(None);

        let client = services.client(&state.peek().auth);
        spawn(async move {
            let saved = match target_id {
                None => {
                    dispatch(state, |s| &mut s.create_professional, api::create_professional(&client, &request))
                        .await
                }
                Some(id) => {
                    dispatch(state, |s| &mut s.edit_professional, api::edit_professional(&client, id, &request))
                        .await
                }
            };
            if saved {
                reset_dialog_slices(state);
                on_close.call(true);
            }
        });
    };

    let title = if creating { "Add Professional" } else { "Edit Professional" };

    rsx! {
        ModalOverlay {
            on_close: move |_| {
                reset_dialog_slices(state);
                on_close.call(false);
            },
            form {
                class: "modal-body",
                onsubmit: handle_save,

                h2 { "{title}" }

                if let Some(message) = invalid() {
                    ErrorBanner { message: message }
                }
                if let Some(message) = server_error {
                    ErrorBanner { message: message }
                }

                div {
                    class: "form-grid",
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
                    if creating {
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
                    label {
                        class: "field",
                        span { "Role" }
                        select {
                            value: "{values.role_id}",
                            onchange: move |evt: FormEvent| {
                                if let Ok(id) = evt.value().parse() {
                                    form.write().role_id = id;
                                }
                            },
                            for kind in [ProfessionalKind::Vet, ProfessionalKind::Groomer] {
                                option {
                                    key: "{kind.role().id()}",
                                    value: "{kind.role().id()}",
                                    "{kind.label()}"
                                }
                            }
                        }
                    }
                    label {
                        class: "field",
                        span { "Specialization" }
                        input {
                            value: "{values.specialization}",
                            oninput: move |evt: FormEvent| form.write().specialization = evt.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Experience (years)" }
                        input {
                            r#type: "number",
                            min: "0",
                            value: "{values.experience_years}",
                            oninput: move |evt: FormEvent| form.write().experience_years = evt.value(),
                        }
                    }
                    label {
                        class: "field",
                        span { "Status" }
                        select {
                            value: "{values.status}",
                            onchange: move |evt: FormEvent| form.write().status = evt.value(),
                            option { value: "available", "Available" }
                            option { value: "unavailable", "Unavailable" }
                        }
                    }
                }

                div {
                    class: "modal-actions",
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| {
                            reset_dialog_slices(state);
                            on_close.call(false);
                        },
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: saving,
                        if saving { "Saving..." } else { "Save" }
                    }
                }
            }
        }
    }
}
