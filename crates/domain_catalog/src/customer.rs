//! Customers billed on invoices

use core_kernel::CustomerId;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A customer (receptor) that invoices are issued to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier
    pub id: CustomerId,
    /// Legal or display name
    pub name: String,
    /// Taxpayer registry number (RUC), including check digit
    pub ruc: String,
    /// Fiscal address
    pub address: String,
    /// Contact phone
    pub phone: Option<String>,
    /// Contact email
    pub email: Option<String>,
}

impl Customer {
    /// Creates a customer with a fresh identifier
    pub fn new(
        name: impl Into<String>,
        ruc: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            name: name.into(),
            ruc: ruc.into(),
            address: address.into(),
            phone: None,
            email: None,
        }
    }

    /// Sets the contact phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// Sets the contact email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Returns true if the customer matches a free-text search.
    ///
    /// Name and email compare case-insensitively; the RUC is matched as typed.
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.name.to_lowercase().contains(&lowered)
            || self.ruc.contains(query)
            || self
                .email
                .as_ref()
                .is_some_and(|email| email.to_lowercase().contains(&lowered))
    }
}

/// Request for registering a new customer in a catalog
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewCustomer {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "RUC is required"))]
    pub ruc: String,
    pub address: String,
    pub phone: Option<String>,
    #[validate(email(message = "email is not valid"))]
    pub email: Option<String>,
}

impl NewCustomer {
    pub(crate) fn into_customer(self) -> Customer {
        Customer {
            id: CustomerId::new(),
            name: self.name.trim().to_string(),
            ruc: self.ruc.trim().to_string(),
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}
