//! The aggregate client state.
//!
//! One [`Slice`] per backend resource, plus the [`AuthSlice`]. The UI crate
//! keeps a single `AppState` in a signal and hands it to pages through
//! context; every mutation goes through a slice transition.

use crate::models::{
    Appointment, AppointmentBucket, BreedCatalog, Pet, Professional, StaffMember, User,
    UserDetails,
};
use crate::session::{AuthSlice, KeyValueStore};
use crate::slice::Slice;

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub auth: AuthSlice,
    pub register: Slice<()>,
    pub breeds: Slice<BreedCatalog>,
    pub vets: Slice<Vec<Professional>>,
    pub groomers: Slice<Vec<Professional>>,
    pub user_details: Slice<Option<UserDetails>>,
    pub add_pet: Slice<Option<Pet>>,
    pub create_appointment: Slice<Option<Appointment>>,
    pub upcoming: Slice<Vec<Appointment>>,
    pub completed: Slice<Vec<Appointment>>,
    pub cancelled: Slice<Vec<Appointment>>,
    pub users: Slice<Vec<User>>,
    pub edit_user: Slice<()>,
    pub delete_user: Slice<()>,
    pub professionals: Slice<Vec<StaffMember>>,
    pub create_professional: Slice<()>,
    pub edit_professional: Slice<()>,
    pub delete_professional: Slice<()>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_auth(AuthSlice::default())
    }
}

impl AppState {
    fn with_auth(auth: AuthSlice) -> Self {
        Self {
            auth,
            register: Slice::new("Registration failed. Please try again."),
            breeds: Slice::new("Failed to fetch breeds"),
            vets: Slice::new("Failed to fetch veterinarians"),
            groomers: Slice::new("Failed to fetch groomers"),
            user_details: Slice::new("Failed to fetch user details"),
            add_pet: Slice::new("Failed to add pet"),
            create_appointment: Slice::new("Failed to create appointment"),
            upcoming: Slice::new(AppointmentBucket::Upcoming.default_error()),
            completed: Slice::new(AppointmentBucket::Completed.default_error()),
            cancelled: Slice::new(AppointmentBucket::Cancelled.default_error()),
            users: Slice::new("Failed to fetch users"),
            edit_user: Slice::new("Failed to update user"),
            delete_user: Slice::new("Failed to delete user"),
            professionals: Slice::new("Failed to fetch professionals"),
            create_professional: Slice::new("Failed to create professional"),
            edit_professional: Slice::new("Failed to update professional"),
            delete_professional: Slice::new("Failed to delete professional"),
        }
    }

    /// Boot state: every slice idle, the session restored from `store`.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        Self::with_auth(AuthSlice::restore(store))
    }

    pub fn appointments(&self, bucket: AppointmentBucket) -> &Slice<Vec<Appointment>> {
        match bucket {
            AppointmentBucket::Upcoming => &self.upcoming,
            AppointmentBucket::Completed => &self.completed,
            AppointmentBucket::Cancelled => &self.cancelled,
        }
    }

    pub fn appointments_mut(&mut self, bucket: AppointmentBucket) -> &mut Slice<Vec<Appointment>> {
        match bucket {
            AppointmentBucket::Upcoming => &mut self.upcoming,
            AppointmentBucket::Completed => &mut self.completed,
            AppointmentBucket::Cancelled => &mut self.cancelled,
        }
    }

    /// Log out and drop everything fetched on behalf of the previous user.
    pub fn logout(&mut self, store: &dyn KeyValueStore) {
        self.auth.logout(store);
        let auth = std::mem::take(&mut self.auth);
        *self = Self::with_auth(auth);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountSnapshot, Role};
    use crate::session::Session;
    use crate::MemoryStore;

    #[test]
    fn test_default_error_per_slice() {
        let mut state = AppState::default();
        state.vets.rejected(None);
        state.appointments_mut(AppointmentBucket::Completed).rejected(None);

        assert_eq!(state.vets.error.as_deref(), Some("Failed to fetch veterinarians"));
        assert_eq!(
            state.appointments(AppointmentBucket::Completed).error.as_deref(),
            Some("Failed to fetch completed appointments")
        );
        assert!(state.appointments(AppointmentBucket::Upcoming).error.is_none());
    }

    #[test]
    fn test_logout_drops_fetched_data() {
        let store = MemoryStore::new();
        let mut state = AppState::default();
        state.auth.set_credentials(
            Session {
                access_token: "tok".into(),
                account: AccountSnapshot {
                    user: User {
                        id: 1,
                        role_id: 2,
                        ..Default::default()
                    },
                    pet: None,
                },
            },
            &store,
        );
        assert_eq!(AppState::restore(&store).auth.role(), Some(Role::Customer));

        state.upcoming.fulfilled(vec![Appointment::default()]);
        state.logout(&store);

        assert_eq!(state, AppState::default());
        assert!(!AppState::restore(&store).auth.is_authenticated());
    }
}
