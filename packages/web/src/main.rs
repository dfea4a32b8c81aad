use dioxus::prelude::*;

use store::navigation::{self, Decision};
use ui::{use_app_state, use_services, AppSidebar, AppStateProvider, Topbar};
use views::{
    AddPets, Appointment, Appointments, GroomerAppointments, GroomerProfile, Home, Login,
    ManageProfessionals, ManageUsers, MyAppointments, NotFound, Professionals, Profile, Register,
    VetAppointments, VetProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guard)]
        #[route("/")]
        Root {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[nest("/dashboard")]
            #[layout(DashboardLayout)]
                #[route("/home")]
                Home {},
                #[route("/appointments")]
                Appointments {},
                #[route("/appointment")]
                Appointment {},
                #[route("/my-appointments")]
                MyAppointments {},
                #[route("/add-pets")]
                AddPets {},
                #[route("/professionals")]
                Professionals {},
                #[route("/profile")]
                Profile {},
                #[route("/vet-appointments")]
                VetAppointments {},
                #[route("/vet-profile")]
                VetProfile {},
                #[route("/groomer-appointments")]
                GroomerAppointments {},
                #[route("/groomer-profile")]
                GroomerProfile {},
                #[route("/manage-users")]
                ManageUsers {},
                #[route("/manage-professionals")]
                ManageProfessionals {},
            #[end_layout]
        #[end_nest]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::THEME_CSS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppStateProvider {
            Router::<Route> {}
        }
    }
}

/// Runs the role check on every navigation and on every session change.
#[component]
fn Guard() -> Element {
    let state = use_app_state();
    let route = use_route::<Route>();
    let nav = use_navigator();

    let viewer = state.read().auth.viewer();
    let path = route.to_string();

    match navigation::decide(viewer, &path) {
        Decision::Render => rsx! { Outlet::<Route> {} },
        // Unknown roles land on a page they are not allowed to see either
        Decision::RedirectTo(destination) if destination == path => rsx! { NoAccess {} },
        Decision::RedirectTo(destination) => {
            match destination.parse::<Route>() {
                Ok(next) => {
                    tracing::debug!(from = %path, to = destination, "Redirecting");
                    nav.replace(next);
                }
                Err(_) => tracing::error!(to = destination, "Redirect target is not a route"),
            }
            rsx! {}
        }
    }
}

#[component]
fn DashboardLayout() -> Element {
    rsx! {
        div {
            class: "dashboard",
            AppSidebar {}
            div {
                class: "dashboard-main",
                Topbar {}
                main {
                    class: "dashboard-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NoAccess() -> Element {
    let mut state = use_app_state();
    let services = use_services();

    rsx! {
        div {
            class: "auth-page",
            div {
                class: "auth-card center",
                h1 { "No access" }
                p { class: "muted", "Your account does not have a role that can use this application." }
                button {
                    class: "btn btn-secondary",
                    onclick: move |_| state.write().logout(services.storage().as_ref()),
                    "Logout"
                }
            }
        }
    }
}

/// `/` only ever redirects; the guard sends it to login or the role's landing page.
#[component]
fn Root() -> Element {
    rsx! {}
}
