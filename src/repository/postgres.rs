use async_trait::async_trait;
use sqlx::PgPool;

use super::ProductRepository;
use crate::{database, error::Result, models::Product, queries::product_queries};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Postgres text cannot hold NUL, so such an id can never have been stored.
fn storable(id: &str) -> bool {
    !id.contains('\0')
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn exists(&self, id: &str) -> Result<bool> {
        if !storable(id) {
            return Ok(false);
        }
        product_queries::exists_by_id(&self.pool, id).await
    }

    async fn get(&self, id: &str) -> Result<Option<Product>> {
        if !storable(id) {
            return Ok(None);
        }
        product_queries::find_by_id(&self.pool, id).await
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        product_queries::find_all(&self.pool).await
    }

    async fn put(&self, product: Product) -> Result<Product> {
        product_queries::save(&self.pool, &product).await
    }

    async fn delete(&self, product: &Product) -> Result<()> {
        let removed = product_queries::delete_by_id(&self.pool, &product.id).await?;
        if removed == 0 {
            tracing::debug!("Product {} was already gone", product.id);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        database::ping(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use sqlx::postgres::PgPoolOptions;

    use super::*;
    use crate::error::AppError;

    fn product(id: &str, price: f64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("name-{}", id),
            description: "desc".to_string(),
            price,
            image: "img.png".to_string(),
            category: "tools".to_string(),
        }
    }

    #[tokio::test]
    async fn nul_ids_are_absent_without_querying() {
        // lazy pool pointing nowhere; any real query would fail
        let pool = PgPoolOptions::new()
            .connect_lazy("postgres://nobody@127.0.0.1:1/none")
            .unwrap();
        let repo = PgProductRepository::new(pool);

        assert!(!repo.exists("\0").await.unwrap());
        assert_eq!(repo.get("a\0b").await.unwrap(), None);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn put_then_get(pool: PgPool) {
        let repo = PgProductRepository::new(pool);
        assert!(!repo.exists("a").await.unwrap());

        let saved = repo.put(product("a", 1.5)).await.unwrap();

        assert_eq!(saved, product("a", 1.5));
        assert!(repo.exists("a").await.unwrap());
        assert_eq!(repo.get("a").await.unwrap(), Some(product("a", 1.5)));
        assert_eq!(repo.get("b").await.unwrap(), None);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn put_overwrites_existing_row(pool: PgPool) {
        let repo = PgProductRepository::new(pool);
        repo.put(product("a", 1.0)).await.unwrap();

        let mut changed = product("a", 2.0);
        changed.name = "renamed".to_string();
        let saved = repo.put(changed.clone()).await.unwrap();

        assert_eq!(saved, changed);
        assert_eq!(repo.get_all().await.unwrap(), vec![changed]);
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn get_all_and_delete(pool: PgPool) {
        let repo = PgProductRepository::new(pool);
        assert!(repo.get_all().await.unwrap().is_empty());

        repo.put(product("a", 1.0)).await.unwrap();
        repo.put(product("b", 2.0)).await.unwrap();

        let mut ids: Vec<String> = repo
            .get_all()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        ids.sort();
        assert_eq!(ids, vec!["a", "b"]);

        repo.delete(&product("a", 1.0)).await.unwrap();
        assert!(!repo.exists("a").await.unwrap());
        assert_eq!(repo.get_all().await.unwrap(), vec![product("b", 2.0)]);

        // deleting a missing row is not an error at this layer
        repo.delete(&product("a", 1.0)).await.unwrap();
        assert!(repo.ping().await.is_ok());
    }

    #[sqlx::test(migrations = "./migrations")]
    #[ignore = "needs DATABASE_URL pointing at a Postgres server"]
    async fn table_refuses_non_positive_price(pool: PgPool) {
        let repo = PgProductRepository::new(pool);

        let err = repo.put(product("a", 0.0)).await.unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
        assert!(!repo.exists("a").await.unwrap());
    }
}
