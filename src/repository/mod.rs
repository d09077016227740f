//! Storage behind the product service.
//!
//! The service only needs keyed access to whole products, so any backend that
//! can answer `exists`/`get`/`get_all`/`put`/`delete` by id can sit behind
//! [`ProductRepository`].

mod memory;
mod postgres;

use async_trait::async_trait;

use crate::{error::Result, models::Product};

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

/// Keyed product storage. Each call is atomic on its own; sequences of calls are not.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn exists(&self, id: &str) -> Result<bool>;

    async fn get(&self, id: &str) -> Result<Option<Product>>;

    /// Every stored product, in the backend's enumeration order.
    async fn get_all(&self) -> Result<Vec<Product>>;

    /// Stores the product under its id, replacing any previous value.
    async fn put(&self, product: Product) -> Result<Product>;

    async fn delete(&self, product: &Product) -> Result<()>;

    /// Readiness probe for the backing store.
    async fn ping(&self) -> Result<()> {
        Ok(())
    }
}
