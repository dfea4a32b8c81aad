//! Booking and listing a customer's appointments.

use store::models::{Appointment, AppointmentBucket, CreateAppointmentRequest};

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;
use crate::wire;

/// `POST /user/appointment/{userId}/create`
pub async fn create_appointment<B: HttpBackend>(
    backend: &B,
    user_id: i64,
    request: &CreateAppointmentRequest,
) -> Result<Option<Appointment>, ApiError> {
    let value = backend
        .send(ApiRequest::post(
            format!("/user/appointment/{user_id}/create"),
            request,
        )?)
        .await?;
    Ok(wire::optional_payload(value))
}

/// `GET /user/appointment/{userId}/{upcoming|completed|cancelled}`
pub async fn fetch_appointments<B: HttpBackend>(
    backend: &B,
    user_id: i64,
    bucket: AppointmentBucket,
) -> Result<Vec<Appointment>, ApiError> {
    let path = format!("/user/appointment/{user_id}/{}", bucket.path_segment());
    wire::list(backend.send(ApiRequest::get(path)).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use serde_json::json;
    use store::models::{Professional, ProfessionalProfile};
    use store::wizard::AppointmentWizard;
    use store::AppState;

    #[tokio::test]
    async fn test_wizard_submission_reaches_backend() {
        let mut wizard = AppointmentWizard::new();
        wizard.refresh_candidates(
            vec![],
            vec![Professional::Groomer(ProfessionalProfile {
                id: 3,
                name: "Amy Lee".into(),
                status: Some("available".into()),
                ..Default::default()
            })],
        );
        wizard.set_pet(Some(7));
        wizard.set_appointment_type("grooming");
        wizard.set_date("2026-03-01");
        wizard.set_time("10:30 AM");
        wizard.set_professional(Some(3));

        let backend = MockBackend::new().respond(Ok(json!({"message": "created"})));
        let mut state = AppState::default();
        state.create_appointment.pending();
        let outcome = create_appointment(&backend, 5, &wizard.build_request().unwrap()).await;
        state.create_appointment.settle(outcome.map_err(|e| e.reason()));
        assert!(state.create_appointment.success);

        let sent = backend.last_request();
        assert_eq!(sent.path, "/user/appointment/5/create");
        let body = sent.body.unwrap();
        assert_eq!(body["serviceType"], "grooming");
        assert_eq!(body["groomerId"], 3);
        assert!(body.get("vetId").is_none());
        assert_eq!(body["appointmentType"], "grooming service");
    }

    #[tokio::test]
    async fn test_fetch_by_bucket() {
        let backend = MockBackend::new().respond(Ok(json!({
            "data": [{"id": 1, "status": "cancelled", "serviceType": "vet"}]
        })));
        let list = fetch_appointments(&backend, 5, AppointmentBucket::Cancelled)
            .await
            .unwrap();
        assert_eq!(backend.last_request().path, "/user/appointment/5/cancelled");
        assert_eq!(list.len(), 1);
    }

    #[tokio::test]
    async fn test_create_failure_uses_slice_default() {
        let backend = MockBackend::new().respond(Err(ApiError::from_status(500, "")));
        let mut state = AppState::default();
        let request = store::models::CreateAppointmentRequest {
            pet_id: 1,
            service_type: store::ServiceType::Vet,
            appointment_type: "vaccination".into(),
            appointment_date: "2026-03-01".into(),
            time: "09:00".into(),
            description: None,
            vet_id: Some(1),
            groomer_id: None,
        };
        let outcome = create_appointment(&backend, 5, &request).await;
        state.create_appointment.settle(outcome.map_err(|e| e.reason()));
        assert_eq!(
            state.create_appointment.error.as_deref(),
            Some("Failed to create appointment")
        );
    }
}
