//! Customer operations.

use tracing::debug;

use store_core::validation::{validate_customer, validate_search_term};
use store_core::{Customer, EntityId, NewCustomer};

use super::{report, Store};
use crate::error::OperationError;
use crate::render;

impl Store {
    /// Registers a customer.
    ///
    /// Invalid input is reported in full and nothing is written. The email
    /// is stored trimmed, so it stays unique regardless of padding.
    /// Returns the new customer id.
    pub async fn add_customer(&self, name: &str, email: &str, phone: &str) -> Option<EntityId> {
        let result = self.try_add_customer(name, email, phone).await;
        report(result, |c| render::customer_added(&c.name, c.id)).map(|c| c.id)
    }

    async fn try_add_customer(
        &self,
        name: &str,
        email: &str,
        phone: &str,
    ) -> Result<Customer, OperationError> {
        let errors = validate_customer(name, email);
        if !errors.is_empty() {
            return Err(OperationError::Validation(errors));
        }

        let customer = self
            .database()
            .customers()
            .insert(&NewCustomer::new(name, email.trim(), phone))
            .await?;

        debug!(id = customer.id, "Customer added");
        Ok(customer)
    }

    /// Lists every customer ordered by name.
    pub async fn list_customers(&self) -> Option<Vec<Customer>> {
        let result = self.database().customers().list().await.map_err(OperationError::from);
        report(result, |customers| render::customer_listing(customers))
    }

    /// Finds customers whose name or email contains `term`.
    ///
    /// A blank term is reported and returns `None`.
    pub async fn search_customers(&self, term: &str) -> Option<Vec<Customer>> {
        let result = self.try_search_customers(term).await;
        report(result, |(term, customers)| render::search_results(term, customers))
            .map(|(_, customers)| customers)
    }

    async fn try_search_customers<'t>(
        &self,
        term: &'t str,
    ) -> Result<(&'t str, Vec<Customer>), OperationError> {
        let term = validate_search_term(term)?;
        let customers = self.database().customers().search(term).await?;
        Ok((term, customers))
    }

    /// Deletes a customer without orders.
    ///
    /// Returns false when the customer is unknown or still has orders.
    pub async fn delete_customer(&self, customer_id: EntityId) -> bool {
        let result = self
            .database()
            .customers()
            .delete(customer_id)
            .await
            .map_err(OperationError::from);

        report(result, |c| render::customer_deleted(&c.name)).is_some()
    }
}

#[cfg(test)]
mod tests {
    use crate::operations::test_support::store;

    #[tokio::test]
    async fn test_add_customer() {
        let store = store().await;

        let id = store
            .add_customer("Maria Santos", "maria@email.com", "11988888888")
            .await
            .unwrap();

        let saved = store.database().customers().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(saved.name, "Maria Santos");
        assert_eq!(saved.phone, "11988888888");
    }

    #[tokio::test]
    async fn test_short_name_rejected_without_insert() {
        let store = store().await;

        assert!(store.add_customer("Jo", "jo@email.com", "").await.is_none());
        assert_eq!(store.database().customers().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_keeps_one_row() {
        let store = store().await;

        assert!(store.add_customer("Maria Santos", "maria@email.com", "").await.is_some());
        assert!(store.add_customer("Maria Souza", "maria@email.com", "").await.is_none());

        assert_eq!(store.database().customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_padded_email_is_stored_trimmed() {
        let store = store().await;

        let id = store
            .add_customer("Maria Santos", " maria@email.com ", "")
            .await
            .unwrap();
        assert!(store.add_customer("Maria Souza", "maria@email.com", "").await.is_none());

        let saved = store.database().customers().get_by_id(id).await.unwrap().unwrap();
        assert_eq!(saved.email, "maria@email.com");
        assert_eq!(store.database().customers().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_search_accented_names_in_capitals() {
        let store = store().await;
        store.add_customer("Déric Martins", "martins@email.com", "").await;
        store.add_customer("João Silva", "joao@email.com", "").await;

        let deric = store.search_customers("DÉRIC").await.unwrap();
        assert_eq!(deric.len(), 1);
        assert_eq!(deric[0].name, "Déric Martins");

        let joao = store.search_customers("JOÃO").await.unwrap();
        assert_eq!(joao.len(), 1);
        assert_eq!(joao[0].email, "joao@email.com");
    }

    #[tokio::test]
    async fn test_list_customers() {
        let store = store().await;
        assert_eq!(store.list_customers().await.unwrap().len(), 0);

        store.add_customer("Pedro Oliveira", "pedro@email.com", "").await;
        store.add_customer("Déric Martins", "martins@email.com", "").await;

        let names: Vec<String> = store
            .list_customers()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["Déric Martins", "Pedro Oliveira"]);
    }

    #[tokio::test]
    async fn test_search_customers() {
        let store = store().await;
        store.add_customer("Maria Santos", "maria@email.com", "").await;
        store.add_customer("Pedro Oliveira", "pedro@email.com", "").await;

        let found = store.search_customers("  santos ").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Maria Santos");

        assert!(store.search_customers("nobody").await.unwrap().is_empty());
        assert!(store.search_customers("   ").await.is_none());
    }

    #[tokio::test]
    async fn test_delete_customer_blocked_by_orders() {
        let store = store().await;
        let id = store.add_customer("Pedro Oliveira", "pedro@email.com", "").await.unwrap();
        store.create_order(id, &[]).await.unwrap();

        assert!(!store.delete_customer(id).await);
        assert!(store.database().customers().get_by_id(id).await.unwrap().is_some());

        sqlx::query("DELETE FROM pedidos")
            .execute(store.database().pool())
            .await
            .unwrap();

        assert!(store.delete_customer(id).await);
        assert!(store.database().customers().get_by_id(id).await.unwrap().is_none());
        assert!(!store.delete_customer(id).await);
    }
}
