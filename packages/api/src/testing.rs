use std::cell::RefCell;
use std::collections::VecDeque;

use serde_json::Value;

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;

/// Replays queued responses and records every request it was sent.
#[derive(Default)]
pub struct MockBackend {
    responses: RefCell<VecDeque<Result<Value, ApiError>>>,
    requests: RefCell<Vec<ApiRequest>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, response: Result<Value, ApiError>) -> Self {
        self.responses.borrow_mut().push_back(response);
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }
}

impl HttpBackend for MockBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or(Ok(Value::Null))
    }
}
