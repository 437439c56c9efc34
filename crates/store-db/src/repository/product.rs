//! # Product Repository
//!
//! Database operations for products (`produtos` table).
//!
//! Prices are stored as integer cents. Stock is an absolute quantity:
//! a stock update overwrites it rather than applying a delta.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use store_core::text::compare_names;
use store_core::{EntityId, NewProduct, Product};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Inserts a new product.
    ///
    /// Product names are not unique.
    ///
    /// ## Returns
    /// * `Ok(Product)` - Inserted product with its generated id
    /// * `Err(DbError::CheckViolation)` - Non-positive price or negative stock
    pub async fn insert(&self, product: &NewProduct) -> DbResult<Product> {
        debug!(name = %product.name, "Inserting product");

        let id: EntityId = sqlx::query_scalar(
            r#"
            INSERT INTO produtos (nome, preco, estoque)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&product.name)
        .bind(product.price.cents())
        .bind(product.stock)
        .fetch_one(&self.pool)
        .await?;

        Ok(Product {
            id,
            name: product.name.clone(),
            price_cents: product.price.cents(),
            stock: product.stock,
        })
    }

    /// Lists all products ordered by name, ignoring case and accents.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let mut products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, nome AS name, preco AS price_cents, estoque AS stock
            FROM produtos
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        products.sort_by(|a, b| compare_names(&a.name, &b.name));

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by ID.
    pub async fn get_by_id(&self, id: EntityId) -> DbResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, nome AS name, preco AS price_cents, estoque AS stock
            FROM produtos
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Sets the stock level of a product.
    ///
    /// ## Returns
    /// * `Ok(Product)` - The product after the update
    /// * `Err(DbError::NotFound)` - Product doesn't exist
    /// * `Err(DbError::CheckViolation)` - Negative quantity reached the table
    pub async fn set_stock(&self, id: EntityId, quantity: i64) -> DbResult<Product> {
        debug!(id = %id, quantity = %quantity, "Updating stock");

        sqlx::query_as::<_, Product>(
            r#"
            UPDATE produtos
            SET estoque = ?2
            WHERE id = ?1
            RETURNING id, nome AS name, preco AS price_cents, estoque AS stock
            "#,
        )
        .bind(id)
        .bind(quantity)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Product", id))
    }

    /// Counts total products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM produtos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use store_core::Money;

    #[tokio::test]
    async fn test_insert_and_list() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();

        repo.insert(&NewProduct::new("Notebook Dell", Money::from_major_minor(3500, 0), 5))
            .await
            .unwrap();
        let mouse = repo
            .insert(&NewProduct::new("Mouse Logitech", Money::from_major_minor(80, 0), 25))
            .await
            .unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert_eq!(products[0], mouse);
        assert_eq!(products[1].price_cents, 350_000);
    }

    #[tokio::test]
    async fn test_set_stock() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        let monitor = repo
            .insert(&NewProduct::new("Monitor LG 24\"", Money::from_major_minor(800, 0), 8))
            .await
            .unwrap();

        let updated = repo.set_stock(monitor.id, 12).await.unwrap();

        assert_eq!(updated.stock, 12);
        assert_eq!(updated.name, "Monitor LG 24\"");
    }

    #[tokio::test]
    async fn test_set_stock_unknown_product() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.products().set_stock(42, 3).await.unwrap_err();

        assert_eq!(err.to_string(), "Product not found: 42");
    }

    #[tokio::test]
    async fn test_negative_stock_rejected_by_table() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.products();
        let mouse = repo
            .insert(&NewProduct::new("Mouse Logitech", Money::from_major_minor(80, 0), 25))
            .await
            .unwrap();

        assert!(repo.set_stock(mouse.id, -1).await.is_err());
        assert_eq!(repo.get_by_id(mouse.id).await.unwrap().unwrap().stock, 25);
    }
}
