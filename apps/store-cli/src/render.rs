//! # Console Rendering
//!
//! Pure text renderers for the console contract. Shared by the live runner
//! and the offline simulation, so both print identical listings.
//!
//! ## Listing Layout
//! ```text
//!
//! 📋 REGISTERED CUSTOMERS
//! ================================================================================
//! [2] Maria Santos | maria@email.com | 11988888888
//! [3] Pedro Oliveira | pedro@email.com | -
//!
//! Total: 2 customer(s)
//! ```
//!
//! Nothing here writes to stdout; callers decide the stream.

use store_core::{Customer, Order, Product, ProductListing, SalesSummary};

/// Width of the `=` rule under listing titles.
pub const SEPARATOR_WIDTH: usize = 80;

pub const CUSTOMERS_TITLE: &str = "📋 REGISTERED CUSTOMERS";
pub const PRODUCTS_TITLE: &str = "📦 REGISTERED PRODUCTS";
pub const SALES_TITLE: &str = "📊 SALES REPORT BY CUSTOMER";

// =============================================================================
// Listings
// =============================================================================

/// Blank line, title, separator.
pub fn header(title: &str) -> String {
    format!("\n{}\n{}", title, "=".repeat(SEPARATOR_WIDTH))
}

pub fn customer_line(customer: &Customer) -> String {
    format!(
        "[{}] {} | {} | {}",
        customer.id,
        customer.name,
        customer.email,
        customer.display_phone()
    )
}

pub fn product_line(product: &Product) -> String {
    format!(
        "[{}] {} | {} | Stock: {}",
        product.id,
        product.name,
        product.price(),
        product.stock
    )
}

pub fn sales_line(row: &SalesSummary) -> String {
    format!(
        "{}: {} order(s) | Total: {}",
        row.customer_name,
        row.order_count,
        row.total()
    )
}

/// Customer listing, or "No customers registered".
pub fn customer_listing(customers: &[Customer]) -> String {
    let mut lines = vec![header(CUSTOMERS_TITLE)];

    if customers.is_empty() {
        lines.push("No customers registered".to_string());
    } else {
        lines.extend(customers.iter().map(customer_line));
        lines.push(format!("\nTotal: {} customer(s)", customers.len()));
    }

    lines.join("\n")
}

/// Product listing with stock valuation.
///
/// An empty listing prints no totals.
pub fn product_listing(listing: &ProductListing) -> String {
    let mut lines = vec![header(PRODUCTS_TITLE)];

    if listing.is_empty() {
        lines.push("No products registered".to_string());
    } else {
        lines.extend(listing.products.iter().map(product_line));
        lines.push(format!("\nTotal: {} product(s)", listing.len()));
        lines.push(format!("Total stock value: {}", listing.total_stock_value));
    }

    lines.join("\n")
}

pub fn search_results(term: &str, customers: &[Customer]) -> String {
    let mut lines = vec![header(&format!("🔍 SEARCH RESULTS FOR \"{}\"", term))];

    if customers.is_empty() {
        lines.push("No customers found".to_string());
    } else {
        lines.extend(customers.iter().map(customer_line));
        lines.push(format!("\nFound: {} customer(s)", customers.len()));
    }

    lines.join("\n")
}

pub fn sales_report(rows: &[SalesSummary]) -> String {
    let mut lines = vec![header(SALES_TITLE)];

    if rows.is_empty() {
        lines.push("No data found".to_string());
    } else {
        lines.extend(rows.iter().map(sales_line));
    }

    lines.join("\n")
}

// =============================================================================
// Outcome Lines
// =============================================================================

pub fn customer_added(name: &str, id: i64) -> String {
    format!("✅ Customer \"{}\" added successfully! (ID: {})", name, id)
}

pub fn product_added(name: &str, id: i64) -> String {
    format!("✅ Product \"{}\" added successfully! (ID: {})", name, id)
}

pub fn order_created(order: &Order) -> String {
    format!(
        "✅ Order created successfully! (ID: {}, Total: {})",
        order.id,
        order.total()
    )
}

pub fn stock_updated(product: &Product) -> String {
    format!(
        "✅ Stock for product \"{}\" updated to {}",
        product.name, product.stock
    )
}

pub fn customer_deleted(name: &str) -> String {
    format!("✅ Customer \"{}\" deleted successfully!", name)
}

/// `✅ Valid` or `❌ Errors: a, b` for a validator result.
pub fn validation_outcome<E: ToString>(errors: &[E]) -> String {
    if errors.is_empty() {
        "✅ Valid".to_string()
    } else {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        format!("❌ Errors: {}", messages.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use store_core::ValidationError;

    fn customer(id: i64, name: &str, email: &str, phone: &str) -> Customer {
        Customer {
            id,
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
        }
    }

    fn product(id: i64, name: &str, price_cents: i64, stock: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price_cents,
            stock,
        }
    }

    #[test]
    fn test_header() {
        let header = header(CUSTOMERS_TITLE);
        let lines: Vec<&str> = header.split('\n').collect();

        assert_eq!(lines[0], "");
        assert_eq!(lines[1], "📋 REGISTERED CUSTOMERS");
        assert_eq!(lines[2].len(), 80);
        assert!(lines[2].chars().all(|c| c == '='));
    }

    #[test]
    fn test_customer_listing() {
        let out = customer_listing(&[
            customer(2, "Maria Santos", "maria@email.com", "11988888888"),
            customer(3, "Pedro Oliveira", "pedro@email.com", ""),
        ]);

        assert!(out.contains("[2] Maria Santos | maria@email.com | 11988888888\n"));
        assert!(out.contains("[3] Pedro Oliveira | pedro@email.com | -\n"));
        assert!(out.ends_with("\n\nTotal: 2 customer(s)"));
    }

    #[test]
    fn test_empty_customer_listing() {
        let out = customer_listing(&[]);

        assert!(out.ends_with("=\nNo customers registered"));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn test_product_listing_totals() {
        let listing = ProductListing::new(vec![
            product(2, "Mouse Logitech", 8_000, 25),
            product(1, "Notebook Dell", 350_000, 5),
        ])
        .unwrap();

        let out = product_listing(&listing);

        assert!(out.contains("[2] Mouse Logitech | R$ 80.00 | Stock: 25\n"));
        assert!(out.contains("[1] Notebook Dell | R$ 3500.00 | Stock: 5\n"));
        assert!(out.ends_with("\n\nTotal: 2 product(s)\nTotal stock value: R$ 19500.00"));
    }

    #[test]
    fn test_empty_product_listing_has_no_totals() {
        let out = product_listing(&ProductListing::new(Vec::new()).unwrap());

        assert!(out.ends_with("No products registered"));
        assert!(!out.contains("Total"));
    }

    #[test]
    fn test_search_results() {
        let found = search_results("maria", &[customer(2, "Maria Santos", "maria@email.com", "")]);
        assert!(found.contains("🔍 SEARCH RESULTS FOR \"maria\""));
        assert!(found.ends_with("Found: 1 customer(s)"));

        let none = search_results("zzz", &[]);
        assert!(none.ends_with("No customers found"));
    }

    #[test]
    fn test_sales_report() {
        let out = sales_report(&[
            SalesSummary {
                customer_name: "Maria Santos".to_string(),
                order_count: 2,
                total_cents: 43_000,
            },
            SalesSummary {
                customer_name: "Pedro Oliveira".to_string(),
                order_count: 0,
                total_cents: 0,
            },
        ]);

        assert!(out.contains("Maria Santos: 2 order(s) | Total: R$ 430.00\n"));
        assert!(out.ends_with("Pedro Oliveira: 0 order(s) | Total: R$ 0.00"));
        assert!(sales_report(&[]).ends_with("No data found"));
    }

    #[test]
    fn test_outcome_lines() {
        assert_eq!(
            customer_added("Maria Santos", 2),
            "✅ Customer \"Maria Santos\" added successfully! (ID: 2)"
        );
        assert_eq!(
            stock_updated(&product(3, "Teclado Mecânico", 35_000, 12)),
            "✅ Stock for product \"Teclado Mecânico\" updated to 12"
        );

        let order = Order {
            id: 1,
            customer_id: 2,
            total_cents: 43_000,
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        assert_eq!(
            order_created(&order),
            "✅ Order created successfully! (ID: 1, Total: R$ 430.00)"
        );
    }

    #[test]
    fn test_validation_outcome() {
        assert_eq!(validation_outcome::<ValidationError>(&[]), "✅ Valid");
        assert_eq!(
            validation_outcome(&[
                ValidationError::required("name"),
                ValidationError::MustBePositive {
                    field: "price".to_string()
                },
            ]),
            "❌ Errors: name is required, price must be greater than zero"
        );
    }
}
