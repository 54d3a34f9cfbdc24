//! Tests for the invoice builder and invoice lifecycle

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use core_kernel::{Currency, DomainPort, InvoiceId, PortError};
use domain_catalog::{Catalog, Customer, Product, TaxCategory};
use domain_invoicing::services::cancel_invoice;
use domain_invoicing::{
    InvoiceBuilder, InvoiceStatus, InvoicingError, IssuancePort, IssuedDocument, PaymentTerms,
    UnavailableIssuance,
};
use test_utils::{CatalogFixtures, TestProductBuilder};

/// Issuance port that numbers invoices sequentially and records what it saw
#[derive(Default)]
struct RecordingIssuance {
    issued: AtomicUsize,
    cancelled: Mutex<Vec<InvoiceId>>,
    last_total_sale: Mutex<Option<Decimal>>,
}

impl DomainPort for RecordingIssuance {}

#[async_trait]
impl IssuancePort for RecordingIssuance {
    async fn issue(&self, invoice: &domain_invoicing::Invoice) -> Result<IssuedDocument, PortError> {
        let n = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        *self.last_total_sale.lock().unwrap() = Some(invoice.totals().unwrap().total_sale.amount());
        Ok(IssuedDocument {
            number: format!("001-001-{:07}", n),
            cdc: None,
        })
    }

    async fn cancel(&self, invoice_id: InvoiceId) -> Result<(), PortError> {
        self.cancelled.lock().unwrap().push(invoice_id);
        Ok(())
    }
}

/// Issuance port whose remote side is down
struct FailingIssuance;

impl DomainPort for FailingIssuance {}

#[async_trait]
impl IssuancePort for FailingIssuance {
    async fn issue(&self, _invoice: &domain_invoicing::Invoice) -> Result<IssuedDocument, PortError> {
        Err(PortError::connection(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")))
    }

    async fn cancel(&self, _invoice_id: InvoiceId) -> Result<(), PortError> {
        Err(PortError::connection(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused")))
    }
}

fn customer() -> Customer {
    CatalogFixtures::customer()
}

mod editing {
    use super::*;

    #[test]
    fn test_sample_catalog_invoice_totals() {
        let catalog = Catalog::with_samples();
        let mut builder = InvoiceBuilder::new(Currency::PYG);

        for product in catalog.products() {
            builder.add_line_item(product);
        }
        let kg = builder.line_items()[1].id();
        builder.set_quantity(kg, dec!(2)).unwrap();

        let totals = builder.compute_totals().unwrap();
        assert_eq!(totals.quantity_total, dec!(4));
        assert_eq!(totals.subtotal_iva10.amount(), dec!(10000));
        assert_eq!(totals.subtotal_iva5.amount(), dec!(10000));
        assert_eq!(totals.subtotal_exempt.amount(), dec!(50000));
        assert_eq!(totals.total_sale.amount(), dec!(70000));
        assert_eq!(totals.total_tax.amount(), dec!(1500));
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut builder = InvoiceBuilder::default();
        let a = builder.add_line_item(&TestProductBuilder::new().with_code("A").build());
        let b = builder.add_line_item(&TestProductBuilder::new().with_code("B").build());
        let c = builder.add_line_item(&TestProductBuilder::new().with_code("C").build());

        builder.remove_line_item(b).unwrap();

        let ids: Vec<_> = builder.line_items().iter().map(|item| item.id()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_stepper_behaviour() {
        let mut builder = InvoiceBuilder::default();
        let id = builder.add_line_item(&TestProductBuilder::new().with_price(dec!(3000)).build());

        builder.increment_quantity(id).unwrap();
        builder.increment_quantity(id).unwrap();
        assert_eq!(builder.line_item(id).unwrap().subtotal(), dec!(9000));

        for _ in 0..5 {
            builder.decrement_quantity(id).unwrap();
        }
        assert_eq!(builder.line_item(id).unwrap().quantity(), dec!(1));
        assert_eq!(builder.line_item(id).unwrap().subtotal(), dec!(3000));
    }

    #[test]
    fn test_edits_on_unknown_item_fail() {
        let mut builder = InvoiceBuilder::default();
        let missing = core_kernel::LineItemId::new();

        assert!(matches!(builder.set_quantity(missing, dec!(2)), Err(InvoicingError::LineItemNotFound(_))));
        assert!(matches!(builder.set_unit_price(missing, dec!(2)), Err(InvoicingError::LineItemNotFound(_))));
        assert!(matches!(
            builder.set_tax_category(missing, TaxCategory::Exempt),
            Err(InvoicingError::LineItemNotFound(_))
        ));
    }
}

mod submission {
    use super::*;

    #[tokio::test]
    async fn test_submit_without_items_fails() {
        let mut builder = InvoiceBuilder::default();
        let issuer = RecordingIssuance::default();

        let result = builder.submit(Some(&customer()), PaymentTerms::Cash, &issuer).await;

        assert!(matches!(result, Err(InvoicingError::EmptyInvoice)));
        assert_eq!(issuer.issued.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_submit_without_customer_fails() {
        let mut builder = InvoiceBuilder::default();
        builder.add_line_item(&TestProductBuilder::new().build());
        let issuer = RecordingIssuance::default();

        let result = builder.submit(None, PaymentTerms::Cash, &issuer).await;

        assert!(matches!(result, Err(InvoicingError::MissingCustomer)));
        assert_eq!(builder.len(), 1);
    }

    #[tokio::test]
    async fn test_submit_single_iva10_item() {
        let mut builder = InvoiceBuilder::default();
        builder.add_line_item(
            &TestProductBuilder::new()
                .with_price(dec!(10000))
                .with_tax_category(TaxCategory::Iva10)
                .build(),
        );
        let issuer = RecordingIssuance::default();

        let invoice = builder
            .submit(Some(&customer()), PaymentTerms::Credit { days: 30 }, &issuer)
            .await
            .unwrap();

        let totals = invoice.totals().unwrap();
        assert_eq!(totals.total_sale.amount(), dec!(10000));
        assert_eq!(totals.total_tax.amount(), dec!(1000));
        assert_eq!(invoice.status, InvoiceStatus::Issued);
        assert_eq!(invoice.number.as_deref(), Some("001-001-0000001"));
        assert_eq!(invoice.payment_terms.label(), "Crédito 30 días");
        assert_eq!(*issuer.last_total_sale.lock().unwrap(), Some(dec!(10000)));
        assert!(builder.is_empty());
    }

    #[tokio::test]
    async fn test_unavailable_issuance_is_not_implemented() {
        let mut builder = InvoiceBuilder::default();
        builder.add_line_item(&TestProductBuilder::new().build());

        let result = builder.submit(Some(&customer()), PaymentTerms::Cash, &UnavailableIssuance).await;

        assert!(matches!(result, Err(InvoicingError::NotImplemented(_))));
        assert_eq!(builder.len(), 1);
    }

    #[tokio::test]
    async fn test_remote_failure_keeps_builder_state() {
        let mut builder = InvoiceBuilder::default();
        let id = builder.add_line_item(&TestProductBuilder::new().build());
        builder.set_quantity(id, dec!(7)).unwrap();

        let result = builder.submit(Some(&customer()), PaymentTerms::Cash, &FailingIssuance).await;

        assert!(matches!(result, Err(InvoicingError::Issuance(PortError::Connection { .. }))));
        assert_eq!(builder.line_item(id).unwrap().quantity(), dec!(7));
    }
}

mod cancellation {
    use super::*;

    async fn issued_invoice(issuer: &RecordingIssuance) -> domain_invoicing::Invoice {
        let mut builder = InvoiceBuilder::default();
        builder.add_line_item(&Product::new("X", "X", "UNI", dec!(1000), TaxCategory::Exempt));
        builder.submit(Some(&customer()), PaymentTerms::Cash, issuer).await.unwrap()
    }

    #[tokio::test]
    async fn test_cancel_issued_invoice() {
        let issuer = RecordingIssuance::default();
        let mut invoice = issued_invoice(&issuer).await;

        cancel_invoice(&mut invoice, &issuer).await.unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Cancelled);
        assert_eq!(issuer.cancelled.lock().unwrap().as_slice(), &[invoice.id]);
    }

    #[tokio::test]
    async fn test_cancel_with_unavailable_service() {
        let issuer = RecordingIssuance::default();
        let mut invoice = issued_invoice(&issuer).await;

        let result = cancel_invoice(&mut invoice, &UnavailableIssuance).await;

        assert!(matches!(result, Err(InvoicingError::NotImplemented(_))));
        assert_eq!(invoice.status, InvoiceStatus::Issued);
    }

    #[tokio::test]
    async fn test_cancel_twice_rejected() {
        let issuer = RecordingIssuance::default();
        let mut invoice = issued_invoice(&issuer).await;
        cancel_invoice(&mut invoice, &issuer).await.unwrap();

        let result = cancel_invoice(&mut invoice, &issuer).await;
        assert!(matches!(result, Err(InvoicingError::InvalidStateTransition { .. })));
        assert_eq!(issuer.cancelled.lock().unwrap().len(), 1);
    }
}
