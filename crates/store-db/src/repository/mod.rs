//! # Repository Module
//!
//! Database repository implementations for the store.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  Store operation (store-cli)                                           │
//! │       │                                                                 │
//! │       │  db.customers().search("maria")                                │
//! │       ▼                                                                 │
//! │  CustomerRepository                                                    │
//! │  ├── insert(&self, new_customer)                                       │
//! │  ├── list(&self)                                                       │
//! │  ├── search(&self, term)                                               │
//! │  └── delete(&self, id)                                                 │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database (clientes, produtos, pedidos)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CustomerRepository`](customer::CustomerRepository) - Customer CRUD and search
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD and stock updates
//! - [`OrderRepository`](order::OrderRepository) - Order creation
//! - [`ReportRepository`](report::ReportRepository) - Sales aggregation

pub mod customer;
pub mod order;
pub mod product;
pub mod report;

