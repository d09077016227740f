use sqlx::PgPool;

use crate::{error::Result, models::Product};

pub async fn exists_by_id(pool: &PgPool, id: &str) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image, category FROM products WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

/// Rows come back in whatever order the table scan yields them.
pub async fn find_all(pool: &PgPool) -> Result<Vec<Product>> {
    let products = sqlx::query_as::<_, Product>(
        "SELECT id, name, description, price, image, category FROM products",
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

/// Inserts the product or overwrites the row with the same id.
pub async fn save(pool: &PgPool, product: &Product) -> Result<Product> {
    let saved = sqlx::query_as::<_, Product>(
        r#"
        INSERT INTO products (id, name, description, price, image, category)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO UPDATE
        SET
            name = EXCLUDED.name,
            description = EXCLUDED.description,
            price = EXCLUDED.price,
            image = EXCLUDED.image,
            category = EXCLUDED.category
        RETURNING id, name, description, price, image, category
        "#,
    )
    .bind(&product.id)
    .bind(&product.name)
    .bind(&product.description)
    .bind(product.price)
    .bind(&product.image)
    .bind(&product.category)
    .fetch_one(pool)
    .await?;

    Ok(saved)
}

pub async fn delete_by_id(pool: &PgPool, id: &str) -> Result<u64> {
    let result = sqlx::query("DELETE FROM products WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
