//! # Report Repository
//!
//! Read-only aggregate queries over customers and orders.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use store_core::text::compare_names;
use store_core::SalesSummary;

/// Repository for reporting queries.
#[derive(Debug, Clone)]
pub struct ReportRepository {
    pool: SqlitePool,
}

impl ReportRepository {
    /// Creates a new ReportRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ReportRepository { pool }
    }

    /// Sales per customer, highest total first.
    ///
    /// Every customer appears, including those without orders
    /// (count 0, total 0). Ties are broken by name, ignoring case and
    /// accents.
    pub async fn sales_by_customer(&self) -> DbResult<Vec<SalesSummary>> {
        let mut rows = sqlx::query_as::<_, SalesSummary>(
            r#"
            SELECT
                c.nome AS customer_name,
                COUNT(p.id) AS order_count,
                COALESCE(SUM(p.valor_total), 0) AS total_cents
            FROM clientes c
            LEFT JOIN pedidos p ON p.cliente_id = c.id
            GROUP BY c.id, c.nome
            ORDER BY c.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.sort_by(|a, b| {
            b.total_cents
                .cmp(&a.total_cents)
                .then_with(|| compare_names(&a.customer_name, &b.customer_name))
        });

        debug!(count = rows.len(), "Sales report rows");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use store_core::{Money, NewCustomer, NewProduct};

    #[tokio::test]
    async fn test_sales_by_customer() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let customers = db.customers();
        let maria = customers
            .insert(&NewCustomer::new("Maria Santos", "maria@email.com", ""))
            .await
            .unwrap();
        customers
            .insert(&NewCustomer::new("Pedro Oliveira", "pedro@email.com", ""))
            .await
            .unwrap();
        customers
            .insert(&NewCustomer::new("Ângela Lima", "angela@email.com", ""))
            .await
            .unwrap();
        let mouse = db
            .products()
            .insert(&NewProduct::new("Mouse Logitech", Money::from_major_minor(80, 0), 25))
            .await
            .unwrap();

        db.orders().create(maria.id, &[mouse.id]).await.unwrap();
        db.orders().create(maria.id, &[mouse.id, mouse.id]).await.unwrap();

        let report = db.reports().sales_by_customer().await.unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report[0].customer_name, "Maria Santos");
        assert_eq!(report[0].order_count, 2);
        assert_eq!(report[0].total(), Money::from_major_minor(240, 0));
        // No orders: zero totals, alphabetical
        assert_eq!(report[1].customer_name, "Ângela Lima");
        assert_eq!(report[1].order_count, 0);
        assert!(report[1].total().is_zero());
        assert_eq!(report[2].customer_name, "Pedro Oliveira");
    }

    #[tokio::test]
    async fn test_empty_report() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        assert!(db.reports().sales_by_customer().await.unwrap().is_empty());
    }
}
