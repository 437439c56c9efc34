//! Demo seed data shared by the runner and the simulation.
//!
//! Prices in `seed/demo.json` are integer cents.

use serde::Deserialize;
use store_core::{CoreResult, Customer, NewCustomer, NewProduct, Product, ProductListing};

const DEMO_SEED: &str = include_str!("../seed/demo.json");

/// Customers and products inserted by the demo run.
#[derive(Debug, Clone, Deserialize)]
pub struct Seed {
    pub customers: Vec<NewCustomer>,
    pub products: Vec<NewProduct>,
}

impl Seed {
    /// Parses the embedded demo seed.
    pub fn demo() -> Result<Self, serde_json::Error> {
        serde_json::from_str(DEMO_SEED)
    }

    /// Customers as they would be stored, ids assigned 1..N in seed order.
    pub fn simulated_customers(&self) -> Vec<Customer> {
        self.customers
            .iter()
            .zip(1..)
            .map(|(c, id)| Customer {
                id,
                name: c.name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
            })
            .collect()
    }

    /// Products as they would be stored, ids assigned 1..N in seed order.
    pub fn simulated_products(&self) -> CoreResult<ProductListing> {
        let products = self
            .products
            .iter()
            .zip(1..)
            .map(|(p, id)| Product {
                id,
                name: p.name.clone(),
                price_cents: p.price.cents(),
                stock: p.stock,
            })
            .collect();

        ProductListing::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store_core::validation::{validate_customer, validate_product};

    #[test]
    fn test_demo_seed_parses() {
        let seed = Seed::demo().unwrap();

        assert_eq!(seed.customers.len(), 3);
        assert_eq!(seed.customers[0].name, "Déric Martins");
        assert_eq!(seed.products.len(), 4);
        assert_eq!(seed.products[3].name, "Monitor LG 24\"");
        assert_eq!(seed.products[0].price.to_string(), "R$ 3500.00");
    }

    #[test]
    fn test_demo_seed_is_valid() {
        let seed = Seed::demo().unwrap();

        for c in &seed.customers {
            assert!(validate_customer(&c.name, &c.email).is_empty(), "{}", c.name);
        }
        for p in &seed.products {
            assert!(validate_product(&p.name, p.price).is_empty(), "{}", p.name);
        }
    }

    #[test]
    fn test_simulated_ids_follow_seed_order() {
        let seed = Seed::demo().unwrap();

        let customers = seed.simulated_customers();
        assert_eq!(customers[0].id, 1);
        assert_eq!(customers[2].name, "Pedro Oliveira");

        let products = seed.simulated_products().unwrap();
        assert_eq!(products.products[1].id, 2);
        assert_eq!(products.total_stock_value.to_string(), "R$ 29400.00");
    }
}
