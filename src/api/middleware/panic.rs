use axum::response::{IntoResponse, Response};
use std::any::Any;

use crate::errors::ErrorCondition;

/// Response builder for `tower_http::catch_panic::CatchPanicLayer::custom`.
///
/// A panicking handler becomes an unclassified error carrying the panic
/// message, when the payload is a string.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        Some(s.clone())
    } else {
        payload.downcast_ref::<&str>().map(|s| s.to_string())
    };

    ErrorCondition::Unclassified(message).into_response()
}
