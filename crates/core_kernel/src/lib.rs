//! Core Kernel - Foundational types shared by the invoicing client crates
//!
//! This crate provides the building blocks used across all domain modules:
//! - Money types with precise decimal arithmetic (guaraní-first)
//! - Strongly-typed identifiers for locally created entities
//! - Port infrastructure for collaborators behind traits (remote services, stubs)

pub mod money;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError, Rate};
pub use identifiers::{CustomerId, ProductId, LineItemId, InvoiceId};
pub use ports::{PortError, DomainPort};
pub use error::CoreError;
