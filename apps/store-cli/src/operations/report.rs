//! Reporting operations.

use store_core::SalesSummary;

use super::{report, Store};
use crate::error::OperationError;
use crate::render;

impl Store {
    /// Order count and total per customer, highest total first.
    pub async fn sales_report(&self) -> Option<Vec<SalesSummary>> {
        let result = self
            .database()
            .reports()
            .sales_by_customer()
            .await
            .map_err(OperationError::from);

        report(result, |rows| render::sales_report(rows))
    }
}
