//! # Order Repository
//!
//! Database operations for orders (`pedidos` table).
//!
//! ## Order Creation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    create(customer_id, product_ids)                     │
//! │                                                                         │
//! │  1. acquire one pooled connection                                      │
//! │  2. customer exists?            no → NotFound("Customer")              │
//! │  3. for each product id:        missing → NotFound("Product", id)      │
//! │       total += current price        overflow → Rule(AmountOverflow)    │
//! │  4. INSERT INTO pedidos (cliente_id, valor_total, criado_em)           │
//! │  5. connection returns to the pool when the guard drops                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Orders record only the customer and the total. Product ids are not
//! stored per order and stock is left untouched.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use store_core::{CoreError, EntityId, Money, Order};

/// Repository for order database operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Creates an order for `customer_id` totalling the current prices of
    /// `product_ids`.
    ///
    /// Product ids are priced in the given order; the first missing id
    /// aborts the order before anything is written. A repeated id is
    /// counted once per occurrence.
    ///
    /// ## Returns
    /// * `Ok(Order)` - The stored order
    /// * `Err(DbError::NotFound)` - Unknown customer or product
    /// * `Err(DbError::Rule(CoreError::AmountOverflow))` - Total out of range
    pub async fn create(&self, customer_id: EntityId, product_ids: &[EntityId]) -> DbResult<Order> {
        debug!(customer_id = %customer_id, items = product_ids.len(), "Creating order");

        let mut conn = self.pool.acquire().await?;

        let customer: Option<EntityId> = sqlx::query_scalar("SELECT id FROM clientes WHERE id = ?1")
            .bind(customer_id)
            .fetch_optional(&mut *conn)
            .await?;

        if customer.is_none() {
            return Err(DbError::not_found("Customer", customer_id));
        }

        let mut total = Money::zero();
        for &product_id in product_ids {
            let price: i64 = sqlx::query_scalar("SELECT preco FROM produtos WHERE id = ?1")
                .bind(product_id)
                .fetch_optional(&mut *conn)
                .await?
                .ok_or_else(|| DbError::not_found("Product", product_id))?;

            total = total
                .checked_add(Money::from_cents(price))
                .ok_or(CoreError::AmountOverflow {
                    what: "Order total",
                })?;
        }

        let order = sqlx::query_as::<_, Order>(
            r#"
            INSERT INTO pedidos (cliente_id, valor_total, criado_em)
            VALUES (?1, ?2, ?3)
            RETURNING id, cliente_id AS customer_id, valor_total AS total_cents, criado_em AS created_at
            "#,
        )
        .bind(customer_id)
        .bind(total.cents())
        .bind(Utc::now())
        .fetch_one(&mut *conn)
        .await?;

        debug!(order_id = %order.id, total = %order.total(), "Order created");
        Ok(order)
    }

    /// Counts the orders placed by a customer.
    pub async fn count_for_customer(&self, customer_id: EntityId) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pedidos WHERE cliente_id = ?1")
            .bind(customer_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use store_core::{NewCustomer, NewProduct};

    struct Fixture {
        db: Database,
        customer_id: EntityId,
        notebook_id: EntityId,
        mouse_id: EntityId,
    }

    async fn fixture() -> Fixture {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customer = db
            .customers()
            .insert(&NewCustomer::new("Maria Santos", "maria@email.com", "11988888888"))
            .await
            .unwrap();
        let notebook = db
            .products()
            .insert(&NewProduct::new("Notebook Dell", Money::from_major_minor(3500, 0), 5))
            .await
            .unwrap();
        let mouse = db
            .products()
            .insert(&NewProduct::new("Mouse Logitech", Money::from_major_minor(80, 0), 25))
            .await
            .unwrap();

        Fixture {
            db,
            customer_id: customer.id,
            notebook_id: notebook.id,
            mouse_id: mouse.id,
        }
    }

    #[tokio::test]
    async fn test_order_total_is_sum_of_prices() {
        let f = fixture().await;

        let order = f
            .db
            .orders()
            .create(f.customer_id, &[f.mouse_id, f.notebook_id])
            .await
            .unwrap();

        assert_eq!(order.customer_id, f.customer_id);
        assert_eq!(order.total(), Money::from_major_minor(3580, 0));
        assert_eq!(order.total().to_string(), "R$ 3580.00");
        assert_eq!(f.db.orders().count_for_customer(f.customer_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_order_leaves_stock_untouched() {
        let f = fixture().await;

        f.db.orders().create(f.customer_id, &[f.mouse_id]).await.unwrap();

        let mouse = f.db.products().get_by_id(f.mouse_id).await.unwrap().unwrap();
        assert_eq!(mouse.stock, 25);
    }

    #[tokio::test]
    async fn test_unknown_customer_writes_nothing() {
        let f = fixture().await;

        let err = f.db.orders().create(999, &[f.mouse_id]).await.unwrap_err();

        assert_eq!(err.to_string(), "Customer not found: 999");
        assert_eq!(f.db.orders().count_for_customer(999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_first_missing_product_aborts() {
        let f = fixture().await;

        let err = f
            .db
            .orders()
            .create(f.customer_id, &[f.mouse_id, 77, 78])
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Product not found: 77");
        assert_eq!(f.db.orders().count_for_customer(f.customer_id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_empty_order_has_zero_total() {
        let f = fixture().await;

        let order = f.db.orders().create(f.customer_id, &[]).await.unwrap();

        assert!(order.total().is_zero());
    }

    #[tokio::test]
    async fn test_repeated_product_total_overflow_writes_nothing() {
        let f = fixture().await;
        let server = f
            .db
            .products()
            .insert(&NewProduct::new("Servidor", Money::from_cents(5_000_000_000_000_000_000), 2))
            .await
            .unwrap();

        let err = f
            .db
            .orders()
            .create(f.customer_id, &[server.id, server.id])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            DbError::Rule(CoreError::AmountOverflow { what: "Order total" })
        ));
        assert_eq!(f.db.orders().count_for_customer(f.customer_id).await.unwrap(), 0);
    }
}
