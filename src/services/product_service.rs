use std::sync::Arc;

use crate::{
    error::{AppError, Result},
    models::{Product, ProductRequest},
    repository::ProductRepository,
};

pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required. Please provide values for id, name, description, price, image, and category.";
pub const INVALID_PRICE_MESSAGE: &str = "Price must be greater than 0";

/// Validates product requests and hands them to the repository.
///
/// Existence checks and writes are separate repository calls, so two requests
/// racing on the same id can both pass the check.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    pub async fn create(&self, request: ProductRequest) -> Result<Product> {
        let product = match request.into_product() {
            Some(product) if product.price > 0.0 => product,
            _ => {
                tracing::warn!("Rejected product create with missing fields");
                return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
            }
        };

        if self.repository.exists(&product.id).await? {
            tracing::warn!("Rejected duplicate product id {}", product.id);
            return Err(AppError::Conflict(format!(
                "Product with ID {} already exists",
                product.id
            )));
        }

        ensure_positive_price(product.price)?;

        let saved = self.repository.put(product).await?;
        tracing::info!("Created product {}", saved.id);

        Ok(saved)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Product> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn list_all(&self) -> Result<Vec<Product>> {
        self.repository.get_all().await
    }

    /// Merges the present fields of `request` into the stored product.
    /// The stored id always wins over any id in the request.
    pub async fn update(&self, id: &str, request: ProductRequest) -> Result<Product> {
        let mut product = self.get_by_id(id).await?;

        if let Some(price) = request.price {
            ensure_positive_price(price)?;
        }

        request.apply_to(&mut product);

        let saved = self.repository.put(product).await?;
        tracing::info!("Updated product {}", saved.id);

        Ok(saved)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let product = self.get_by_id(id).await?;

        self.repository.delete(&product).await?;
        tracing::info!("Deleted product {}", product.id);

        Ok(())
    }

    pub async fn check_storage(&self) -> Result<()> {
        self.repository.ping().await
    }
}

fn ensure_positive_price(price: f64) -> Result<()> {
    if price > 0.0 {
        Ok(())
    } else {
        tracing::warn!("Rejected non-positive price {}", price);
        Err(AppError::Validation(INVALID_PRICE_MESSAGE.to_string()))
    }
}

fn not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Product not found with id {}", id))
}
