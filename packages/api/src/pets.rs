//! Pet profile and pet registration.

use store::models::{NewPetRequest, Pet, UserDetails};

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;
use crate::wire;

/// `GET /user/pet/{petId}/petProfile/get`: the owner's profile with all their pets.
pub async fn fetch_user_details<B: HttpBackend>(
    backend: &B,
    pet_id: i64,
) -> Result<Option<UserDetails>, ApiError> {
    let value = backend
        .send(ApiRequest::get(format!("/user/pet/{pet_id}/petProfile/get")))
        .await?;
    wire::payload(value)
}

/// `POST /user/pet/{userId}/create`
pub async fn add_pet<B: HttpBackend>(
    backend: &B,
    user_id: i64,
    request: &NewPetRequest,
) -> Result<Option<Pet>, ApiError> {
    let value = backend
        .send(ApiRequest::post(format!("/user/pet/{user_id}/create"), request)?)
        .await?;
    Ok(wire::optional_payload(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBackend;
    use serde_json::json;

    #[tokio::test]
    async fn test_user_details() {
        let backend = MockBackend::new().respond(Ok(json!({
            "data": {
                "id": 5, "name": "Ann Ray", "email": "ann@example.com",
                "pets": [{"id": 7, "name": "Rex", "breeds": {"id": 2, "name": "Beagle", "species": "Dog"}}]
            }
        })));
        let details = fetch_user_details(&backend, 7).await.unwrap().unwrap();
        assert_eq!(backend.last_request().path, "/user/pet/7/petProfile/get");
        assert_eq!(details.pets[0].breed_name(), "Beagle");
    }

    #[tokio::test]
    async fn test_add_pet_path_and_body() {
        let backend = MockBackend::new().respond(Ok(json!({"message": "Pet created", "data": {"id": 9, "name": "Tom"}})));
        let request = NewPetRequest {
            name: "Tom".into(),
            breed_id: 1,
            age: 2.0,
            gender: Some("male".into()),
            weight: None,
        };
        let created = add_pet(&backend, 5, &request).await.unwrap();
        assert_eq!(created.map(|p| p.id), Some(9));

        let sent = backend.last_request();
        assert_eq!(sent.path, "/user/pet/5/create");
        let body = sent.body.unwrap();
        assert_eq!(body["breedId"], 1);
        assert!(body.get("weight").is_none());
    }
}
