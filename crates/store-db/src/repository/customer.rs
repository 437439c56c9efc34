//! # Customer Repository
//!
//! Database operations for customers (`clientes` table).
//!
//! ## Key Operations
//! - Insert with typed duplicate-email detection
//! - Listing and substring search ordered by name
//! - Deletion guarded by the "no orders" rule

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use store_core::text::{compare_names, contains_folded};
use store_core::{CoreError, Customer, EntityId, NewCustomer};

/// Repository for customer database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = CustomerRepository::new(pool);
///
/// let maria = repo.insert(&NewCustomer::new("Maria Santos", "maria@email.com", "")).await?;
/// let found = repo.search("maria").await?;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerRepository {
    pool: SqlitePool,
}

impl CustomerRepository {
    /// Creates a new CustomerRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CustomerRepository { pool }
    }

    /// Inserts a new customer.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - Inserted customer with its generated id
    /// * `Err(DbError::UniqueViolation)` - Email already registered
    pub async fn insert(&self, customer: &NewCustomer) -> DbResult<Customer> {
        debug!(email = %customer.email, "Inserting customer");

        let id: EntityId = sqlx::query_scalar(
            r#"
            INSERT INTO clientes (nome, email, telefone)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match DbError::from(e) {
            // email is the only unique column on clientes
            err if err.is_unique_violation() => DbError::duplicate("email", customer.email.clone()),
            err => err,
        })?;

        Ok(Customer {
            id,
            name: customer.name.clone(),
            email: customer.email.clone(),
            phone: customer.phone.clone(),
        })
    }

    /// Lists all customers ordered by name, ignoring case and accents.
    pub async fn list(&self) -> DbResult<Vec<Customer>> {
        let mut customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome AS name, email, telefone AS phone
            FROM clientes
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        // SQLite's BINARY collation puts "Álvaro" after "Zé"
        customers.sort_by(|a, b| compare_names(&a.name, &b.name));

        debug!(count = customers.len(), "Listed customers");
        Ok(customers)
    }

    /// Gets a customer by ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Customer))` - Customer found
    /// * `Ok(None)` - Customer not found
    pub async fn get_by_id(&self, id: EntityId) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome AS name, email, telefone AS phone
            FROM clientes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(customer)
    }

    /// Finds customers whose name or email contains `term`, ordered like
    /// [`list`](Self::list).
    ///
    /// Case is folded with Unicode rules, so "JOÃO" finds "João". SQLite
    /// `LIKE` only folds ASCII, so the filter runs here rather than in SQL.
    /// Every character of `term` is literal.
    pub async fn search(&self, term: &str) -> DbResult<Vec<Customer>> {
        debug!(term = %term, "Searching customers");

        let customers: Vec<Customer> = self
            .list()
            .await?
            .into_iter()
            .filter(|c| contains_folded(&c.name, term) || contains_folded(&c.email, term))
            .collect();

        debug!(count = customers.len(), "Search returned customers");
        Ok(customers)
    }

    /// Deletes a customer that has no orders.
    ///
    /// All three statements run on one pooled connection.
    ///
    /// ## Returns
    /// * `Ok(Customer)` - The deleted customer
    /// * `Err(DbError::NotFound)` - No customer with this id
    /// * `Err(DbError::Rule(CoreError::CustomerHasOrders))` - Customer kept
    pub async fn delete(&self, id: EntityId) -> DbResult<Customer> {
        debug!(id = %id, "Deleting customer");

        let mut conn = self.pool.acquire().await?;

        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, nome AS name, email, telefone AS phone
            FROM clientes
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?
        .ok_or_else(|| DbError::not_found("Customer", id))?;

        let order_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pedidos WHERE cliente_id = ?1")
            .bind(id)
            .fetch_one(&mut *conn)
            .await?;

        if order_count > 0 {
            return Err(CoreError::CustomerHasOrders {
                name: customer.name,
                order_count,
            }
            .into());
        }

        sqlx::query("DELETE FROM clientes WHERE id = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(customer)
    }

    /// Counts total customers (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM clientes")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
