//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_documents::{DocumentError, ListingPage};
use rust_decimal::Decimal;

/// Asserts that a Money value has the expected amount, ignoring scale
pub fn assert_money_amount(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount().normalize(),
        expected.normalize(),
        "Money amount mismatch: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(money.is_zero(), "Expected zero money, got {}", money);
}

/// Asserts that a listing failed with exactly the given message
pub fn assert_listing_failed_with<T: std::fmt::Debug>(
    result: &Result<T, DocumentError>,
    expected: &str,
) {
    match result {
        Err(DocumentError::ListingFailed(message)) => assert_eq!(
            message, expected,
            "Listing failed with an unexpected message"
        ),
        other => panic!("Expected ListingFailed({:?}), got {:?}", expected, other),
    }
}

/// Asserts that a page has no documents and zeroed metadata
pub fn assert_empty_page(page: &ListingPage) {
    assert!(
        page.documents.is_empty(),
        "Expected no documents, got {}",
        page.documents.len()
    );
    assert_eq!(page.pagination, Default::default(), "Expected zeroed pagination");
}

/// Asserts the document numbers of a page, in order
pub fn assert_document_numbers(page: &ListingPage, expected: &[&str]) {
    let numbers: Vec<&str> = page
        .documents
        .iter()
        .map(|record| record.document_number.as_deref().unwrap_or_default())
        .collect();
    assert_eq!(numbers, expected, "Unexpected document numbers");
}
