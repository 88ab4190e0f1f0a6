use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Json},
};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use super::extract::ValidatedJson;
use crate::catalog::ProductCatalog;
use crate::errors::ErrorCondition;
use crate::models::product::{Product, ProductInput};

lazy_static::lazy_static! {
    static ref START_TIME: Instant = Instant::now();
}

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub catalog: ProductCatalog,
    pub instance_id: String,
}

type ProductPath = Result<Path<u64>, PathRejection>;

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = serde_json::Value)
    )
)]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "shopkart",
        "version": env!("CARGO_PKG_VERSION"),
        "instance_id": state.instance_id,
        "uptime_seconds": START_TIME.elapsed().as_secs(),
    }))
}

/// List all products
#[utoipa::path(
    get,
    path = "/products",
    tag = "products",
    responses(
        (status = 200, description = "All products ordered by id", body = [Product])
    )
)]
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.list().await)
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 400, description = "Malformed id", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    path: ProductPath,
) -> Result<Json<Product>, ErrorCondition> {
    let Path(id) = path?;
    info!("Get product request: id={}", id);

    Ok(Json(state.catalog.get(id).await?))
}

/// Create a product
#[utoipa::path(
    post,
    path = "/products",
    tag = "products",
    request_body = ProductInput,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Invalid body or duplicate name", body = crate::errors::ErrorResponse)
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<impl IntoResponse, ErrorCondition> {
    let product = state.catalog.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Replace a product
#[utoipa::path(
    put,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    request_body = ProductInput,
    responses(
        (status = 200, description = "Product replaced", body = Product),
        (status = 400, description = "Invalid body or duplicate name", body = crate::errors::ErrorResponse),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    path: ProductPath,
    ValidatedJson(input): ValidatedJson<ProductInput>,
) -> Result<Json<Product>, ErrorCondition> {
    let Path(id) = path?;
    Ok(Json(state.catalog.update(id, input).await?))
}

/// Delete a product
#[utoipa::path(
    delete,
    path = "/products/{id}",
    tag = "products",
    params(
        ("id" = u64, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "Product not found", body = crate::errors::ErrorResponse)
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    path: ProductPath,
) -> Result<StatusCode, ErrorCondition> {
    let Path(id) = path?;
    state.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Fallback for paths no route matches
pub async fn route_not_found(method: Method, uri: Uri) -> ErrorCondition {
    ErrorCondition::not_found(format!("No route for {} {}", method, uri.path()))
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed(method: Method, uri: Uri) -> ErrorCondition {
    ErrorCondition::validation_failure(format!(
        "Method {} is not allowed on {}",
        method,
        uri.path()
    ))
}
