use async_trait::async_trait;
use dashmap::DashMap;

use super::ProductRepository;
use crate::{error::Result, models::Product};

/// Process-local store. Contents are lost when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: DashMap<String, Product>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn exists(&self, id: &str) -> Result<bool> {
        Ok(self.products.contains_key(id))
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        Ok(self.products.get(id).map(|entry| entry.value().clone()))
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn put(&self, product: Product) -> Result<Product> {
        self.products.insert(product.id.clone(), product.clone());
        Ok(product)
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        self.products.remove(&product.id);
        Ok(())
    }
}
