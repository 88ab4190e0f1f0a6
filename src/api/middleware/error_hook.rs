use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::errors::{ErrorCondition, ErrorResponder};
use crate::metrics::ERROR_RESPONSES_TOTAL;

/// Render error conditions raised by handlers, extractors or the panic
/// catcher with the configured responder.
///
/// Register with `axum::middleware::from_fn_with_state(responder, error_hook)`.
/// Responses that carry no condition pass through untouched.
pub async fn error_hook(
    State(responder): State<ErrorResponder>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().to_string();
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;

    let Some(condition) = response.extensions_mut().remove::<ErrorCondition>() else {
        return response;
    };

    let body = responder.respond(&condition);

    if body.status >= 500 {
        error!(
            method = %method,
            path = %path,
            status = body.status,
            title = %body.title,
            details = %condition,
            "Request raised an internal error"
        );
    } else {
        warn!(
            method = %method,
            path = %path,
            status = body.status,
            title = %body.title,
            details = %condition,
            "Request raised an error condition"
        );
    }

    ERROR_RESPONSES_TOTAL
        .with_label_values(&[&body.status.to_string(), &body.title])
        .inc();

    body.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, http::StatusCode, middleware, routing::get, Router};
    use serde_json::Value;
    use tower::Service;

    async fn call(mut app: Router, uri: &str) -> (StatusCode, Value) {
        let request = http::Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.call(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    fn app(responder: ErrorResponder) -> Router {
        Router::new()
            .route("/ok", get(|| async { "fine" }))
            .route(
                "/secret",
                get(|| async {
                    Err::<(), _>(ErrorCondition::unclassified("db password is hunter2"))
                }),
            )
            .layer(middleware::from_fn_with_state(responder, error_hook))
    }

    #[tokio::test]
    async fn test_passes_through_success() {
        let (status, _) = call(app(ErrorResponder::default()), "/ok").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_rerenders_with_configured_responder() {
        let (status, body) = call(app(ErrorResponder::new(true)), "/secret").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Internal Server Error");
        assert!(body["details"].is_null());

        let (_, body) = call(app(ErrorResponder::new(false)), "/secret").await;
        assert_eq!(body["details"], "db password is hunter2");
    }
}
