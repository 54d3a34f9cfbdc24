//! Catalog Domain - Customers, Products and IVA Categories
//!
//! The catalog is the read side the invoice builder draws from: customers to
//! bill and products to sell. It is an explicit repository object owned by
//! the session that created it; nothing here is process-global.
//!
//! # IVA Categories
//!
//! - **Exentas**: exempt from IVA
//! - **IVA 5%**: reduced bracket
//! - **IVA 10%**: general bracket
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_catalog::Catalog;
//!
//! let catalog = Catalog::with_samples();
//! let services = catalog.search_products("servicio");
//! ```

pub mod tax;
pub mod customer;
pub mod product;
pub mod catalog;
pub mod error;

pub use tax::TaxCategory;
pub use customer::{Customer, NewCustomer};
pub use product::{Product, NewProduct};
pub use catalog::Catalog;
pub use error::CatalogError;
