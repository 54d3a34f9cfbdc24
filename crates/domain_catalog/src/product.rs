//! Products and services that can be sold

use core_kernel::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::tax::TaxCategory;

/// A catalog product or service
///
/// Products are looked up by the invoice builder, never mutated by it: a
/// line item takes a snapshot and overrides price or category on its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier
    pub id: ProductId,
    /// Internal product code (e.g. PROD001)
    pub code: String,
    /// Description printed on the invoice
    pub description: String,
    /// Unit of measure (UNI, KG, ...)
    pub unit: String,
    /// Default unit price in the catalog currency
    pub unit_price: Decimal,
    /// Default IVA bracket
    pub tax_category: TaxCategory,
    /// Optional grouping label (Productos, Servicios, ...)
    pub category: Option<String>,
}

impl Product {
    /// Creates a product with a fresh identifier
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
        unit_price: Decimal,
        tax_category: TaxCategory,
    ) -> Self {
        Self {
            id: ProductId::new(),
            code: code.into(),
            description: description.into(),
            unit: unit.into(),
            unit_price,
            tax_category,
            category: None,
        }
    }

    /// Sets the grouping label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Returns true if the product matches a free-text search on
    /// description, code or category (case-insensitive).
    pub fn matches(&self, query: &str) -> bool {
        let lowered = query.to_lowercase();
        self.description.to_lowercase().contains(&lowered)
            || self.code.to_lowercase().contains(&lowered)
            || self
                .category
                .as_ref()
                .is_some_and(|category| category.to_lowercase().contains(&lowered))
    }
}

/// Request for registering a new product in a catalog
#[derive(Debug, Clone, Validate, Serialize, Deserialize)]
pub struct NewProduct {
    #[validate(length(min = 1, message = "code is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
    #[validate(length(min = 1, message = "unit is required"))]
    pub unit: String,
    #[validate(custom(function = "non_negative"))]
    pub unit_price: Decimal,
    pub tax_category: TaxCategory,
    pub category: Option<String>,
}

impl NewProduct {
    pub(crate) fn into_product(self) -> Product {
        Product {
            id: ProductId::new(),
            code: self.code.trim().to_string(),
            description: self.description,
            unit: self.unit,
            unit_price: self.unit_price,
            tax_category: self.tax_category,
            category: self.category,
        }
    }
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = ValidationError::new("non_negative");
        error.message = Some("unit price cannot be negative".into());
        return Err(error);
    }
    Ok(())
}
