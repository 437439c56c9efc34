//! Product and inventory operations.

use tracing::debug;

use store_core::validation::{validate_product, validate_stock_quantity};
use store_core::{EntityId, Money, NewProduct, Product, ProductListing};

use super::{report, Store};
use crate::error::OperationError;
use crate::render;

impl Store {
    /// Registers a product with an initial stock.
    ///
    /// Returns the new product id.
    pub async fn add_product(&self, name: &str, price: Money, stock: i64) -> Option<EntityId> {
        let result = self.try_add_product(name, price, stock).await;
        report(result, |p| render::product_added(&p.name, p.id)).map(|p| p.id)
    }

    async fn try_add_product(
        &self,
        name: &str,
        price: Money,
        stock: i64,
    ) -> Result<Product, OperationError> {
        let mut errors = validate_product(name, price);
        if let Err(err) = validate_stock_quantity(stock) {
            errors.push(err);
        }
        if !errors.is_empty() {
            return Err(OperationError::Validation(errors));
        }

        let product = self
            .database()
            .products()
            .insert(&NewProduct::new(name, price, stock))
            .await?;

        debug!(id = product.id, "Product added");
        Ok(product)
    }

    /// Lists every product with its stock valuation.
    ///
    /// A stock value too large to represent is reported instead of listed.
    pub async fn list_products(&self) -> Option<ProductListing> {
        let result = self.try_list_products().await;
        report(result, render::product_listing)
    }

    async fn try_list_products(&self) -> Result<ProductListing, OperationError> {
        let products = self.database().products().list().await?;
        Ok(ProductListing::new(products)?)
    }

    /// Overwrites the stock of a product.
    ///
    /// A negative quantity is rejected before storage is touched.
    pub async fn update_stock(&self, product_id: EntityId, quantity: i64) -> bool {
        let result = self.try_update_stock(product_id, quantity).await;
        report(result, render::stock_updated).is_some()
    }

    async fn try_update_stock(
        &self,
        product_id: EntityId,
        quantity: i64,
    ) -> Result<Product, OperationError> {
        validate_stock_quantity(quantity)?;

        Ok(self.database().products().set_stock(product_id, quantity).await?)
    }
}
