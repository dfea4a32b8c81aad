//! Sign-in and sign-up.

use serde::Deserialize;
use store::models::{AccountSnapshot, LoginRequest, Pet, RegisterRequest, User};
use store::{AuthSlice, Session};

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;
use crate::wire;

#[derive(Deserialize)]
struct LoginPayload {
    token: String,
    user: User,
    #[serde(default)]
    pet: Option<Pet>,
}

/// `POST /user/auth/login`. The caller installs the session in the auth slice,
/// which persists it.
pub async fn login<B: HttpBackend>(backend: &B, request: &LoginRequest) -> Result<Session, ApiError> {
    let value = backend
        .send(ApiRequest::post("/user/auth/login", request)?)
        .await?;
    let LoginPayload { token, user, pet } = wire::payload(value)?;
    tracing::info!(user_id = user.id, role_id = user.role_id, "Signed in");
    Ok(Session {
        access_token: token,
        account: AccountSnapshot { user, pet },
    })
}

/// `POST /user/auth/register`. The new account still has to sign in.
pub async fn register<B: HttpBackend>(backend: &B, request: &RegisterRequest) -> Result<(), ApiError> {
    backend
        .send(ApiRequest::post("/user/auth/register", request)?)
        .await?;
    Ok(())
}

/// Id of the signed-in user, needed by the per-user endpoints.
pub fn user_id(auth: &AuthSlice) -> Result<i64, ApiError> {
    auth.user().map(|u| u.id).ok_or(ApiError::NotSignedIn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::Method;
    use crate::testing::MockBackend;
    use serde_json::json;
    use store::{KeyValueStore, MemoryStore, Role};

    fn login_response() -> serde_json::Value {
        json!({
            "message": "success",
            "data": {
                "token": "jwt-abc",
                "user": {"id": 5, "name": "Ann Ray", "email": "ann@example.com", "roleId": 2},
                "pet": {"id": 7, "name": "Rex"}
            }
        })
    }

    #[tokio::test]
    async fn test_login_persists_and_survives_reload() {
        let backend = MockBackend::new().respond(Ok(login_response()));
        let store = MemoryStore::new();
        let request = LoginRequest {
            email: "ann@example.com".into(),
            password: "secret1".into(),
        };

        let mut auth = AuthSlice::default();
        auth.login_pending();
        let session = login(&backend, &request).await.unwrap();
        auth.login_fulfilled(session, &store);

        assert!(auth.is_authenticated());
        assert_eq!(store.get("accessToken").as_deref(), Some("jwt-abc"));
        assert!(store.get("user").is_some());

        // Reload: a fresh slice comes back from storage alone
        let reloaded = AuthSlice::restore(&store);
        assert_eq!(reloaded, auth);
        assert_eq!(reloaded.role(), Some(Role::Customer));
        assert_eq!(reloaded.session.unwrap().account.pet.unwrap().id, 7);
        assert_eq!(backend.requests().len(), 1);

        let sent = backend.last_request();
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.path, "/user/auth/login");
    }

    #[tokio::test]
    async fn test_login_rejection_carries_server_message() {
        let backend = MockBackend::new().respond(Err(ApiError::from_status(
            401,
            r#"{"message": "Invalid credentials"}"#,
        )));
        let err = login(
            &backend,
            &LoginRequest {
                email: "a@b.co".into(),
                password: "nope".into(),
            },
        )
        .await
        .unwrap_err();

        let mut auth = AuthSlice::default();
        auth.login_rejected(err.reason());
        assert_eq!(auth.error.as_deref(), Some("Invalid credentials"));
    }

    #[tokio::test]
    async fn test_register_body() {
        let backend = MockBackend::new();
        let request = RegisterRequest {
            name: "Ann Ray".into(),
            email: "ann@example.com".into(),
            phone: "5551234".into(),
            password: "secret1".into(),
            breed_id: 12,
            age: 3.0,
        };
        register(&backend, &request).await.unwrap();

        let body = backend.last_request().body.unwrap();
        assert_eq!(body["breedId"], 12);
        assert_eq!(body["email"], "ann@example.com");
    }

    #[test]
    fn test_user_id_requires_session() {
        assert_eq!(user_id(&AuthSlice::default()), Err(ApiError::NotSignedIn));
    }
}
