//! Session-owned catalog repository
//!
//! Holds the customers and products available to one session. Creation
//! appends to this instance only; two sessions never see each other's
//! additions.

use core_kernel::{CustomerId, ProductId};
use rust_decimal_macros::dec;
use tracing::debug;
use validator::Validate;

use crate::customer::{Customer, NewCustomer};
use crate::error::CatalogError;
use crate::product::{NewProduct, Product};
use crate::tax::TaxCategory;

/// In-memory catalog of customers and products
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    customers: Vec<Customer>,
    products: Vec<Product>,
}

impl Catalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog from existing records
    pub fn from_parts(customers: Vec<Customer>, products: Vec<Product>) -> Self {
        Self { customers, products }
    }

    /// Creates a catalog seeded with the demonstration customers and products
    pub fn with_samples() -> Self {
        let customers = vec![
            Customer::new("Cliente Ejemplo 1", "12345678-9", "Av. Principal 123")
                .with_phone("+595 21 123-4567")
                .with_email("cliente1@ejemplo.com"),
            Customer::new("Cliente Ejemplo 2", "87654321-0", "Calle Secundaria 456")
                .with_phone("+595 21 234-5678")
                .with_email("cliente2@ejemplo.com"),
        ];

        let products = vec![
            Product::new("PROD001", "Producto de Ejemplo 1", "UNI", dec!(10000), TaxCategory::Iva10)
                .with_category("Productos"),
            Product::new("PROD002", "Producto de Ejemplo 2", "KG", dec!(5000), TaxCategory::Iva5)
                .with_category("Productos"),
            Product::new("SERV001", "Servicio de Consultoría", "UNI", dec!(50000), TaxCategory::Exempt)
                .with_category("Servicios"),
        ];

        Self::from_parts(customers, products)
    }

    /// All customers in registration order
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// All products in registration order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a customer by id
    pub fn customer(&self, id: CustomerId) -> Result<&Customer, CatalogError> {
        self.customers
            .iter()
            .find(|customer| customer.id == id)
            .ok_or_else(|| CatalogError::CustomerNotFound(id.to_string()))
    }

    /// Looks up a product by id
    pub fn product(&self, id: ProductId) -> Result<&Product, CatalogError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or_else(|| CatalogError::ProductNotFound(id.to_string()))
    }

    /// Looks up a product by its code (case-insensitive)
    pub fn product_by_code(&self, code: &str) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.code.eq_ignore_ascii_case(code))
    }

    /// Customers matching a free-text query; an empty query returns all
    pub fn search_customers(&self, query: &str) -> Vec<&Customer> {
        let query = query.trim();
        self.customers
            .iter()
            .filter(|customer| query.is_empty() || customer.matches(query))
            .collect()
    }

    /// Products matching a free-text query; an empty query returns all
    pub fn search_products(&self, query: &str) -> Vec<&Product> {
        let query = query.trim();
        self.products
            .iter()
            .filter(|product| query.is_empty() || product.matches(query))
            .collect()
    }

    /// Validates and registers a new customer
    pub fn create_customer(&mut self, request: NewCustomer) -> Result<Customer, CatalogError> {
        request.validate()?;

        let customer = request.into_customer();
        debug!(customer_id = %customer.id, ruc = %customer.ruc, "Registering customer");
        self.customers.push(customer.clone());
        Ok(customer)
    }

    /// Validates and registers a new product. Product codes are unique.
    pub fn create_product(&mut self, request: NewProduct) -> Result<Product, CatalogError> {
        request.validate()?;

        if self.product_by_code(request.code.trim()).is_some() {
            return Err(CatalogError::DuplicateProductCode(request.code));
        }

        let product = request.into_product();
        debug!(product_id = %product.id, code = %product.code, "Registering product");
        self.products.push(product.clone());
        Ok(product)
    }
}
