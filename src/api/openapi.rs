use utoipa::OpenApi;

use crate::errors::ErrorResponse;
use crate::models::product::{Product, ProductInput};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shopkart Product Service",
        version = "0.1.0",
        description = "Product catalog API. Every failure is returned as a JSON error body with `status`, `timestamp`, `message` and `details`, and the HTTP status matches `status`.",
    ),
    paths(
        crate::api::handlers::health,
        crate::api::handlers::list_products,
        crate::api::handlers::get_product,
        crate::api::handlers::create_product,
        crate::api::handlers::update_product,
        crate::api::handlers::delete_product,
    ),
    components(
        schemas(
            Product,
            ProductInput,
            ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "products", description = "Product catalog endpoints"),
    )
)]
pub struct ApiDoc;
