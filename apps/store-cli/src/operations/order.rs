//! Order operations.

use store_core::{EntityId, Order};

use super::{report, Store};
use crate::error::OperationError;
use crate::render;

impl Store {
    /// Creates an order totalling the current prices of `product_ids`.
    ///
    /// Stock is not decremented and the product ids are not stored
    /// with the order.
    pub async fn create_order(
        &self,
        customer_id: EntityId,
        product_ids: &[EntityId],
    ) -> Option<Order> {
        let result = self
            .database()
            .orders()
            .create(customer_id, product_ids)
            .await
            .map_err(OperationError::from);

        report(result, render::order_created)
    }
}
