//! # Store crate: client-side state for the PetPerfect web client
//!
//! Everything the pages read and mutate lives here, free of any UI or HTTP
//! dependency so it can be unit-tested natively.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire/domain types: users, pets, breeds, professionals, appointments. |
//! | [`slice`] | The generic `{data, loading, error, success}` resource slice. |
//! | [`session`] | Authentication slice and its persistence in a [`KeyValueStore`]. |
//! | [`state`] | [`AppState`], the aggregate of every slice. |
//! | [`wizard`] | The four-step appointment wizard state machine. |
//! | [`navigation`] | Role route table, navigation guard and sidebar menu. |
//! | [`validation`] | Client-side form validation (registration, login, pets, staff). |
//! | [`config`] | [`ClientConfig`] loaded from TOML or the environment. |

pub mod config;
pub mod models;
pub mod navigation;
pub mod session;
pub mod slice;
pub mod state;
pub mod validation;
pub mod wizard;

mod memory;
pub use memory::MemoryStore;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use config::ClientConfig;
pub use models::{
    AccountSnapshot, Appointment, AppointmentStatus, Breed, Pet, Practitioner, Professional,
    ProfessionalKind, Role, ServiceType, User,
};
pub use navigation::{decide, Decision, Viewer};
pub use session::{AuthSlice, KeyValueStore, Session, StorageError};
pub use slice::Slice;
pub use state::AppState;
pub use wizard::AppointmentWizard;
