//! # Role-based navigation guard
//!
//! Which pages a signed-in user may open depends only on their role. The table
//! below is static; [`decide`] is a pure function of the viewer and the
//! requested path, evaluated on every navigation.
//!
//! | Role | Allowed | Landing |
//! |------|---------|---------|
//! | Admin (1) | manage-users, manage-professionals, profile | manage-users |
//! | Customer (2) | home, appointments, add-pets, professionals, appointment, my-appointments, profile | home |
//! | Vet (3) | vet-appointments, vet-profile | vet-appointments |
//! | Groomer (4) | groomer-appointments, groomer-profile | groomer-appointments |
//! | unknown | none | home |
//!
//! Anonymous viewers may only see the login and register pages.

use crate::models::Role;

pub const ROOT: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";

pub const HOME: &str = "/dashboard/home";
pub const APPOINTMENTS: &str = "/dashboard/appointments";
pub const APPOINTMENT: &str = "/dashboard/appointment";
pub const MY_APPOINTMENTS: &str = "/dashboard/my-appointments";
pub const ADD_PETS: &str = "/dashboard/add-pets";
pub const PROFESSIONALS: &str = "/dashboard/professionals";
pub const PROFILE: &str = "/dashboard/profile";
pub const VET_APPOINTMENTS: &str = "/dashboard/vet-appointments";
pub const VET_PROFILE: &str = "/dashboard/vet-profile";
pub const GROOMER_APPOINTMENTS: &str = "/dashboard/groomer-appointments";
pub const GROOMER_PROFILE: &str = "/dashboard/groomer-profile";
pub const MANAGE_USERS: &str = "/dashboard/manage-users";
pub const MANAGE_PROFESSIONALS: &str = "/dashboard/manage-professionals";

const ADMIN_PATHS: &[&str] = &[MANAGE_USERS, MANAGE_PROFESSIONALS, PROFILE];
const CUSTOMER_PATHS: &[&str] = &[
    HOME,
    APPOINTMENTS,
    ADD_PETS,
    PROFESSIONALS,
    APPOINTMENT,
    MY_APPOINTMENTS,
    PROFILE,
];
const VET_PATHS: &[&str] = &[VET_APPOINTMENTS, VET_PROFILE];
const GROOMER_PATHS: &[&str] = &[GROOMER_APPOINTMENTS, GROOMER_PROFILE];

/// Who is asking. An authenticated viewer may carry a role id the client
/// does not know.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Viewer {
    Anonymous,
    Authenticated(Option<Role>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    Render,
    RedirectTo(&'static str),
}

pub fn allowed_paths(role: Option<Role>) -> &'static [&'static str] {
    match role {
        Some(Role::Admin) => ADMIN_PATHS,
        Some(Role::Customer) => CUSTOMER_PATHS,
        Some(Role::Vet) => VET_PATHS,
        Some(Role::Groomer) => GROOMER_PATHS,
        None => &[],
    }
}

pub fn default_path(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin) => MANAGE_USERS,
        Some(Role::Customer) | None => HOME,
        Some(Role::Vet) => VET_APPOINTMENTS,
        Some(Role::Groomer) => GROOMER_APPOINTMENTS,
    }
}

pub fn is_allowed(role: Option<Role>, path: &str) -> bool {
    allowed_paths(role).contains(&normalize(path))
}

/// Strip query, fragment, and trailing slash.
fn normalize(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    match path.trim_end_matches('/') {
        "" => ROOT,
        trimmed => trimmed,
    }
}

fn is_public(path: &str) -> bool {
    path == LOGIN || path == REGISTER
}

/// Render the requested page or redirect somewhere the viewer may go.
pub fn decide(viewer: Viewer, path: &str) -> Decision {
    let path = normalize(path);
    match viewer {
        Viewer::Anonymous if is_public(path) => Decision::Render,
        Viewer::Anonymous => Decision::RedirectTo(LOGIN),
        Viewer::Authenticated(role) => {
            if allowed_paths(role).contains(&path) {
                Decision::Render
            } else {
                Decision::RedirectTo(default_path(role))
            }
        }
    }
}

/// A sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

pub const MENU: &[MenuItem] = &[
    MenuItem { label: "Home", path: HOME, roles: &[Role::Customer] },
    MenuItem { label: "Appointments", path: APPOINTMENTS, roles: &[Role::Customer] },
    MenuItem { label: "My Appointments", path: MY_APPOINTMENTS, roles: &[Role::Customer] },
    MenuItem { label: "Professionals", path: PROFESSIONALS, roles: &[Role::Customer] },
    MenuItem { label: "Add Pets", path: ADD_PETS, roles: &[Role::Customer] },
    MenuItem { label: "Groomer Appointments", path: GROOMER_APPOINTMENTS, roles: &[Role::Groomer] },
    MenuItem { label: "Vet Appointments", path: VET_APPOINTMENTS, roles: &[Role::Vet] },
    MenuItem { label: "Manage Users", path: MANAGE_USERS, roles: &[Role::Admin] },
    MenuItem { label: "Manage Professionals", path: MANAGE_PROFESSIONALS, roles: &[Role::Admin] },
    MenuItem { label: "Profile", path: PROFILE, roles: &[Role::Admin, Role::Customer] },
    MenuItem { label: "Profile", path: VET_PROFILE, roles: &[Role::Vet] },
    MenuItem { label: "Profile", path: GROOMER_PROFILE, roles: &[Role::Groomer] },
];

pub fn menu_for(role: Option<Role>) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter()
        .filter(move |item| role.is_some_and(|r| item.roles.contains(&r)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_DASHBOARD: &[&str] = &[
        HOME,
        APPOINTMENTS,
        APPOINTMENT,
        MY_APPOINTMENTS,
        ADD_PETS,
        PROFESSIONALS,
        PROFILE,
        VET_APPOINTMENTS,
        VET_PROFILE,
        GROOMER_APPOINTMENTS,
        GROOMER_PROFILE,
        MANAGE_USERS,
        MANAGE_PROFESSIONALS,
    ];

    #[test]
    fn test_render_iff_allowed_for_every_role() {
        for role in Role::ALL {
            let viewer = Viewer::Authenticated(Some(role));
            for path in ALL_DASHBOARD {
                let expected = if allowed_paths(Some(role)).contains(path) {
                    Decision::Render
                } else {
                    Decision::RedirectTo(default_path(Some(role)))
                };
                assert_eq!(decide(viewer, path), expected, "{role:?} {path}");
            }
        }
    }

    #[test]
    fn test_each_role_has_in_and_out_of_set_paths() {
        let cases = [
            (Role::Admin, MANAGE_PROFESSIONALS, HOME, MANAGE_USERS),
            (Role::Customer, MY_APPOINTMENTS, MANAGE_USERS, HOME),
            (Role::Vet, VET_PROFILE, GROOMER_APPOINTMENTS, VET_APPOINTMENTS),
            (Role::Groomer, GROOMER_PROFILE, VET_APPOINTMENTS, GROOMER_APPOINTMENTS),
        ];
        for (role, inside, outside, landing) in cases {
            let viewer = Viewer::Authenticated(Some(role));
            assert_eq!(decide(viewer, inside), Decision::Render);
            assert_eq!(decide(viewer, outside), Decision::RedirectTo(landing));
            // The landing page itself is always allowed
            assert_eq!(decide(viewer, landing), Decision::Render);
        }
    }

    #[test]
    fn test_anonymous_only_sees_public_pages() {
        assert_eq!(decide(Viewer::Anonymous, LOGIN), Decision::Render);
        assert_eq!(decide(Viewer::Anonymous, REGISTER), Decision::Render);
        assert_eq!(decide(Viewer::Anonymous, ROOT), Decision::RedirectTo(LOGIN));
        for path in ALL_DASHBOARD {
            assert_eq!(decide(Viewer::Anonymous, path), Decision::RedirectTo(LOGIN));
        }
    }

    #[test]
    fn test_signed_in_viewer_leaves_public_pages() {
        let vet = Viewer::Authenticated(Some(Role::Vet));
        assert_eq!(decide(vet, LOGIN), Decision::RedirectTo(VET_APPOINTMENTS));
        assert_eq!(decide(vet, REGISTER), Decision::RedirectTo(VET_APPOINTMENTS));
        assert_eq!(decide(vet, ROOT), Decision::RedirectTo(VET_APPOINTMENTS));
        assert_eq!(decide(vet, "/dashboard/nope"), Decision::RedirectTo(VET_APPOINTMENTS));
    }

    #[test]
    fn test_unknown_role_lands_on_home() {
        let viewer = Viewer::Authenticated(None);
        assert_eq!(decide(viewer, HOME), Decision::RedirectTo(HOME));
        assert!(menu_for(None).next().is_none());
    }

    #[test]
    fn test_query_and_trailing_slash_ignored() {
        let admin = Viewer::Authenticated(Some(Role::Admin));
        assert_eq!(decide(admin, "/dashboard/manage-users/"), Decision::Render);
        assert_eq!(decide(admin, "/dashboard/manage-users?q=ann"), Decision::Render);
        assert_eq!(decide(Viewer::Anonymous, "/login#top"), Decision::Render);
    }

    #[test]
    fn test_menu_only_links_allowed_pages() {
        for role in Role::ALL {
            let items: Vec<_> = menu_for(Some(role)).collect();
            assert!(!items.is_empty());
            for item in items {
                assert!(is_allowed(Some(role), item.path), "{role:?} {}", item.path);
            }
        }
    }
}
