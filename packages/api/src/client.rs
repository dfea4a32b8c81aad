//! # HTTP transport
//!
//! Dispatchers build an [`ApiRequest`] and hand it to an [`HttpBackend`]. The
//! production backend is [`RestClient`]; tests substitute an in-memory one.
//!
//! [`RestClient`] joins the request path onto the configured base URL, sends
//! JSON bodies, and attaches `Authorization: Bearer <token>` when it carries a
//! token. Timeouts are reqwest's defaults.

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use store::ClientConfig;

use crate::error::ApiError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// One REST call, independent of the transport.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    pub fn post(path: impl Into<String>, body: &impl Serialize) -> Result<Self, ApiError> {
        Self::new(Method::Post, path).with_body(body)
    }

    pub fn patch(path: impl Into<String>, body: &impl Serialize) -> Result<Self, ApiError> {
        Self::new(Method::Patch, path).with_body(body)
    }

    fn with_body(mut self, body: &impl Serialize) -> Result<Self, ApiError> {
        self.body = Some(serde_json::to_value(body)?);
        Ok(self)
    }

    pub fn with_query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }
}

/// Something that can execute an [`ApiRequest`] and return the decoded JSON body.
///
/// A 2xx response with an empty body yields `Value::Null`; a non-2xx response
/// yields [`ApiError::Status`].
pub trait HttpBackend {
    fn send(&self, request: ApiRequest) -> impl Future<Output = Result<Value, ApiError>>;
}

/// reqwest-backed [`HttpBackend`].
#[derive(Clone, Debug)]
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    /// A client sharing this one's connection pool that authenticates as `token`.
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            token: token.map(str::to_string),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl HttpBackend for RestClient {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        let url = self.url(&request.path);
        tracing::debug!(method = request.method.as_str(), path = %request.path, "Sending request");

        let mut builder = self.http.request(request.method.into(), &url);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %request.path, error = %e, "Request failed");
            ApiError::from(e)
        })?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            tracing::warn!(path = %request.path, status = status.as_u16(), "Backend rejected request");
            return Err(ApiError::from_status(status.as_u16(), &text));
        }
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_join() {
        let client = RestClient::new("http://localhost:5000/api/");
        assert_eq!(client.base_url(), "http://localhost:5000/api");
        assert_eq!(client.url("/user/vet/get"), "http://localhost:5000/api/user/vet/get");
        assert_eq!(client.url("Admin/manage/list"), "http://localhost:5000/api/Admin/manage/list");
    }

    #[test]
    fn test_with_token_keeps_base_url() {
        let client = RestClient::from_config(&ClientConfig::default().with_base_url("https://api.test"));
        let authed = client.with_token(Some("tok"));
        assert_eq!(authed.base_url(), "https://api.test");
        assert_eq!(authed.token.as_deref(), Some("tok"));
        assert!(client.token.is_none());
    }

    #[test]
    fn test_request_builders() {
        #[derive(Serialize)]
        struct Body {
            name: &'static str,
        }

        let request = ApiRequest::patch("/Admin/manage/users/4", &Body { name: "Ann" })
            .unwrap()
            .with_query("roleId", 3);
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.body, Some(serde_json::json!({"name": "Ann"})));
        assert_eq!(request.query, vec![("roleId".to_string(), "3".to_string())]);
        assert!(ApiRequest::get("/user/vet/get").body.is_none());
    }
}
