use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{AppConfig, StorageConfig},
    database,
    error::{AppError, Result},
    repository::{InMemoryProductRepository, PgProductRepository, ProductRepository},
    routes,
    services::ProductService,
};

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: ProductService::new(repository),
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let repository: Arc<dyn ProductRepository> = match &config.storage {
        StorageConfig::Postgres(db) => {
            let pool = database::create_pool(db).await?;
            Arc::new(PgProductRepository::new(pool))
        }
        StorageConfig::Memory => {
            tracing::warn!("Using in-memory product storage, data will not survive a restart");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    router(AppState::new(repository), config)
}

/// Assembles routes and layers around an already wired state.
pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let allowed_origins: Vec<HeaderValue> = config
        .cors
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE])
        .allow_origin(allowed_origins);

    let app = routes::create_router(&config.server.base_path)
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state);

    Ok(app)
}
