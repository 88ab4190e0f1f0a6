use axum::{middleware, routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{
    create_product, delete_product, get_product, health, list_products, method_not_allowed,
    route_not_found, update_product, AppState,
};
use super::middleware::{error_hook, logging_middleware, panic_response};
use super::openapi::ApiDoc;
use crate::errors::ErrorResponder;
use crate::metrics;

pub fn create_router(state: AppState, responder: ErrorResponder) -> Router {
    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        // Health check
        .route("/health", get(health))
        // Product endpoints
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        // Metrics endpoint (Prometheus)
        .route("/metrics", get(metrics::metrics_handler))
        // OpenAPI documentation
        .merge(SwaggerUi::new("/api-docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Unknown paths and methods still get a JSON error body
        .fallback(route_not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state);

    with_error_handling(router, responder)
        // Outer middleware (order matters: logging -> metrics -> cors -> trace)
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(metrics::middleware::track_metrics))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Install the panic catcher and the error hook on a router.
///
/// Panics become unclassified conditions first, so the hook sees every
/// failure the same way a handler-raised condition is seen.
pub fn with_error_handling(router: Router, responder: ErrorResponder) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn_with_state(responder, error_hook))
}
