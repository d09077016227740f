mod health;
mod products;

use axum::{Router, routing::get};

use crate::AppState;

/// Health probes live at the root; product routes are nested under `base_path`.
pub fn create_router(base_path: &str) -> Router<AppState> {
    let product_routes = Router::new()
        .route(
            "/products",
            get(products::list_products).post(products::create_product),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        );

    let router = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    if base_path.is_empty() {
        router.merge(product_routes)
    } else {
        router.nest(base_path, product_routes)
    }
}
