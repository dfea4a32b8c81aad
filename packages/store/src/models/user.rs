//! Users, roles, and the account snapshot cached alongside the access token.

use serde::{Deserialize, Serialize};

use super::pet::Pet;

/// The four account roles the backend knows about.
///
/// The backend sends the numeric `roleId`; anything outside `1..=4` is an
/// unknown role and gets no pages of its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    Customer,
    Vet,
    Groomer,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Customer, Role::Vet, Role::Groomer];

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Role::Admin),
            2 => Some(Role::Customer),
            3 => Some(Role::Vet),
            4 => Some(Role::Groomer),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Customer => 2,
            Role::Vet => 3,
            Role::Groomer => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Customer => "User",
            Role::Vet => "Vet",
            Role::Groomer => "Groomer",
        }
    }
}

/// A platform account as the backend returns it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role_id: u8,
    pub role_name: Option<String>,
    pub status: Option<String>,
}

impl User {
    pub fn role(&self) -> Option<Role> {
        Role::from_id(self.role_id)
    }

    /// Role label for tables, preferring the backend's own name.
    pub fn role_label(&self) -> &str {
        match (&self.role_name, self.role()) {
            (Some(name), _) if !name.is_empty() => name,
            (_, Some(role)) => role.label(),
            _ => "Unknown",
        }
    }

    pub fn is_active(&self) -> bool {
        self.status.as_deref() != Some("inactive")
    }
}

/// What login hands back next to the token: the user and their first pet.
///
/// Serialized verbatim under the `user` storage key.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub user: User,
    #[serde(default)]
    pub pet: Option<Pet>,
}

impl AccountSnapshot {
    pub fn role(&self) -> Option<Role> {
        self.user.role()
    }
}

/// Response of the pet-profile endpoint: the owner plus every pet they own.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserDetails {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub pets: Vec<Pet>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_ids_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_id(role.id()), Some(role));
        }
        assert_eq!(Role::from_id(0), None);
        assert_eq!(Role::from_id(9), None);
    }

    #[test]
    fn test_user_deserializes_partial_record() {
        let user: User =
            serde_json::from_str(r#"{"id": 12, "name": "Ann", "email": "a@b.co", "roleId": 2}"#)
                .unwrap();
        assert_eq!(user.role(), Some(Role::Customer));
        assert_eq!(user.role_label(), "User");
        assert!(user.phone.is_none());
        assert!(user.is_active());
    }

    #[test]
    fn test_snapshot_without_pet() {
        let snapshot: AccountSnapshot =
            serde_json::from_str(r#"{"user": {"id": 1, "roleId": 1}}"#).unwrap();
        assert_eq!(snapshot.role(), Some(Role::Admin));
        assert!(snapshot.pet.is_none());
    }
}
