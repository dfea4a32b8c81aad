//! Request bodies sent to the backend.
//!
//! Built by [`crate::validation`] and [`crate::wizard`] after local checks pass,
//! then serialized by the api crate.

use serde::{Deserialize, Serialize};

use super::appointment::ServiceType;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub breed_id: i64,
    pub age: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPetRequest {
    pub name: String,
    pub breed_id: i64,
    pub age: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Body of the create-appointment call.
///
/// Exactly one of `vet_id`/`groomer_id` is set; the other key is omitted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub pet_id: i64,
    pub service_type: ServiceType,
    pub appointment_type: String,
    pub appointment_date: String,
    pub time: String,
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vet_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groomer_id: Option<i64>,
}

/// Admin create/edit body for a vet or groomer account.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role_id: u8,
    pub specialization: String,
    pub experience_years: Option<u32>,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserUpdateRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}
