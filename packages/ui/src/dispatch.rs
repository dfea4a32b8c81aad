//! Drive a resource slice through one backend call.

use std::future::Future;

use api::ApiError;
use dioxus::prelude::*;
use store::{AppState, Slice};

/// Mark the selected slice pending, await `operation`, then fulfil or reject
/// the slice with its outcome. Returns whether the call succeeded.
///
/// The state is never borrowed across the await, so other handlers can read it
/// while the request is in flight.
pub async fn dispatch<T, S, F>(mut state: Signal<AppState>, select: S, operation: F) -> bool
where
    S: Fn(&mut AppState) -> &mut Slice<T>,
    F: Future<Output = Result<T, ApiError>>,
{
    select(&mut *state.write()).pending();
    let outcome = operation.await;
    if let Err(e) = &outcome {
        tracing::warn!(error = %e, "Request failed");
    }
    let succeeded = outcome.is_ok();
    select(&mut *state.write()).settle(outcome.map_err(|e| e.reason()));
    succeeded
}

/// [`dispatch`] for per-user endpoints. Without a signed-in user the slice is
/// rejected straight away and no request is made.
pub async fn dispatch_for_user<T, S, C, F>(state: Signal<AppState>, select: S, call: C) -> bool
where
    S: Fn(&mut AppState) -> &mut Slice<T>,
    C: FnOnce(i64) -> F,
    F: Future<Output = Result<T, ApiError>>,
{
    let user_id = api::user_id(&state.peek().auth);
    match user_id {
        Ok(user_id) => dispatch(state, select, call(user_id)).await,
        Err(e) => {
            let mut state = state;
            tracing::warn!(error = %e, "Skipping request");
            select(&mut *state.write()).rejected(e.reason());
            false
        }
    }
}
