//! # API crate: REST calls for the PetPerfect client
//!
//! Every backend action the pages trigger is one async function here, generic
//! over the [`HttpBackend`] that performs the call. Each function makes exactly
//! one HTTP request and returns the decoded payload or an [`ApiError`]; the UI
//! turns the error into a slice message with [`ApiError::reason`].
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiRequest`], the [`HttpBackend`] trait, and the reqwest-backed [`RestClient`] |
//! | [`error`] | [`ApiError`] and server message extraction |
//! | [`wire`] | Unwrapping of `{data: ...}` envelopes and bare list responses |
//! | [`account`] | `login`, `register` |
//! | [`catalog`] | `fetch_breeds`, `fetch_vets`, `fetch_groomers` |
//! | [`pets`] | `fetch_user_details`, `add_pet` |
//! | [`appointments`] | `create_appointment`, `fetch_appointments` |
//! | [`admin`] | Staff and user management |
//!
//! Cancelling or rescheduling an appointment has no endpoint yet, so there is no
//! call for it here.

pub mod account;
pub mod admin;
pub mod appointments;
pub mod catalog;
pub mod client;
pub mod error;
pub mod pets;
pub mod wire;

#[cfg(test)]
mod testing;

pub use account::{login, register, user_id};
pub use admin::{
    create_professional, delete_professional, delete_user, edit_professional, edit_user,
    list_professionals, list_users, ProfessionalFilter,
};
pub use appointments::{create_appointment, fetch_appointments};
pub use catalog::{fetch_breeds, fetch_groomers, fetch_vets};
pub use client::{ApiRequest, HttpBackend, Method, RestClient};
pub use error::ApiError;
pub use pets::{add_pet, fetch_user_details};
