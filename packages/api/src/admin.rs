//! Admin management of staff (vets, groomers) and customer accounts.
//!
//! | Call | Endpoint |
//! |------|----------|
//! | [`list_professionals`] | `GET /Admin/manage/list?roleId=&search=` |
//! | [`create_professional`] | `POST /Admin/manage/create` |
//! | [`edit_professional`] | `PATCH /Admin/manage/{id}` |
//! | [`delete_professional`] | `DELETE /Admin/manage/{id}` |
//! | [`list_users`] | `GET /Admin/manage/users?name=` |
//! | [`edit_user`] | `PATCH /Admin/manage/users/{id}` |
//! | [`delete_user`] | `DELETE /Admin/manage/{id}` |

use store::models::{ProfessionalKind, ProfessionalRequest, StaffMember, User, UserUpdateRequest};

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;
use crate::wire;

/// Server-side filters for the staff listing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfessionalFilter {
    /// Only 3 (vet) and 4 (groomer) are sent; anything else means "all".
    pub role_id: Option<u8>,
    pub search: String,
}

impl ProfessionalFilter {
    fn apply(&self, mut request: ApiRequest) -> ApiRequest {
        if let Some(role_id) = self
            .role_id
            .filter(|id| ProfessionalKind::from_role_id(*id).is_some())
        {
            request = request.with_query("roleId", role_id);
        }
        let search = self.search.trim();
        if !search.is_empty() {
            request = request.with_query("search", search);
        }
        request
    }
}

pub async fn list_professionals<B: HttpBackend>(
    backend: &B,
    filter: &ProfessionalFilter,
) -> Result<Vec<StaffMember>, ApiError> {
    let request = filter.apply(ApiRequest::get("/Admin/manage/list"));
    wire::list(backend.send(request).await?)
}

pub async fn create_professional<B: HttpBackend>(
    backend: &B,
    request: &ProfessionalRequest,
) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::post("/Admin/manage/create", request)?)
        .await?;
    Ok(())
}

pub async fn edit_professional<B: HttpBackend>(
    backend: &B,
    id: i64,
    request: &ProfessionalRequest,
) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::patch(format!("/Admin/manage/{id}"), request)?)
        .await?;
    Ok(())
}

pub async fn delete_professional<B: HttpBackend>(backend: &B, id: i64) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::delete(format!("/Admin/manage/{id}")))
        .await?;
    Ok(())
}

/// Customer accounts, optionally filtered by name.
pub async fn list_users<B: HttpBackend>(backend: &B, name: &str) -> Result<Vec<User>, ApiError> {
    let mut request = ApiRequest::get("/Admin/manage/users");
    let name = name.trim();
    if !name.is_empty() {
        request = request.with_query("name", name);
    }
    wire::list(backend.send(request).await?)
}

pub async fn edit_user<B: HttpBackend>(
    backend: &B,
    id: i64,
    request: &UserUpdateRequest,
) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::patch(format!("/Admin/manage/users/{id}"), request)?)
        .await?;
    Ok(())
}

/// Users share the staff delete endpoint.
pub async fn delete_user<B: HttpBackend>(backend: &B, id: i64) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::delete(format!("/Admin/manage/{id}")))
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::MockBackend;
    use serde_json::json;

    fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_professional_filter_query() {
        let backend = MockBackend::new();
        let filter = ProfessionalFilter {
            role_id: Some(4),
            search: " amy ".into(),
        };
        list_professionals(&backend, &filter).await.unwrap();
        assert_eq!(
            backend.last_request().query,
            query(&[("roleId", "4"), ("search", "amy")])
        );

        // Admin role id is not a staff filter
        let filter = ProfessionalFilter {
            role_id: Some(1),
            search: String::new(),
        };
        list_professionals(&backend, &filter).await.unwrap();
        assert!(backend.last_request().query.is_empty());
    }

    #[tokio::test]
    async fn test_list_professionals_unwraps_envelope() {
        let backend = MockBackend::new().respond(Ok(json!({
            "data": [
                {"id": 9, "name": "Amy Lee", "roleId": 4, "groomers": [{"status": "available"}]},
                {"id": 2, "name": "Dr. John Smith", "roleId": 3, "vets": [{"specialization": "Surgery"}]}
            ]
        })));
        let rows = list_professionals(&backend, &ProfessionalFilter::default())
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].staff_profile().unwrap().specialization.as_deref(), Some("Surgery"));
    }

    #[tokio::test]
    async fn test_user_calls() {
        let backend = MockBackend::new().respond(Ok(json!([{"id": 4, "name": "Ann Ray"}])));
        let users = list_users(&backend, "ann").await.unwrap();
        assert_eq!(users[0].name, "Ann Ray");
        assert_eq!(backend.last_request().query, query(&[("name", "ann")]));

        let update = UserUpdateRequest {
            name: "Ann Ray".into(),
            email: "ann@example.com".into(),
            phone: String::new(),
            status: "inactive".into(),
        };
        edit_user(&backend, 4, &update).await.unwrap();
        let sent = backend.last_request();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Patch, "/Admin/manage/users/4"));

        delete_user(&backend, 4).await.unwrap();
        let sent = backend.last_request();
        assert_eq!((sent.method, sent.path.as_str()), (Method::Delete, "/Admin/manage/4"));
    }

    #[tokio::test]
    async fn test_professional_mutations() {
        let backend = MockBackend::new();
        let request = ProfessionalRequest {
            name: "Amy Lee".into(),
            email: "amy@petperfect.test".into(),
            phone: "5551234".into(),
            password: Some("secret1".into()),
            role_id: 4,
            specialization: "Poodles".into(),
            experience_years: Some(6),
            status: "available".into(),
        };
        create_professional(&backend, &request).await.unwrap();
        assert_eq!(backend.last_request().path, "/Admin/manage/create");
        assert_eq!(backend.last_request().body.unwrap()["roleId"], 4);

        edit_professional(&backend, 9, &request).await.unwrap();
        assert_eq!(backend.last_request().method, Method::Patch);

        delete_professional(&backend, 9).await.unwrap();
        assert_eq!(backend.last_request().path, "/Admin/manage/9");
        assert_eq!(backend.requests().len(), 3);
    }
}
