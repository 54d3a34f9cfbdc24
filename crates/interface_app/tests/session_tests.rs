//! Invoice session tests

use async_trait::async_trait;
use core_kernel::{Currency, CustomerId, DomainPort, InvoiceId, PortError, ProductId};
use domain_catalog::{Catalog, CatalogError, NewCustomer};
use domain_invoicing::{
    Invoice, InvoiceStatus, InvoicingError, IssuancePort, IssuedDocument, PaymentTerms,
    UnavailableIssuance,
};
use interface_app::{AppConfig, AppContext, AppError, InvoiceSession};
use rust_decimal_macros::dec;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use test_utils::{assert_money_amount, CatalogFixtures};

/// Numbers invoices sequentially and accepts every cancellation
#[derive(Default)]
struct SequentialIssuance {
    next: AtomicU32,
}

impl DomainPort for SequentialIssuance {}

#[async_trait]
impl IssuancePort for SequentialIssuance {
    async fn issue(&self, _invoice: &Invoice) -> Result<IssuedDocument, PortError> {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        Ok(IssuedDocument {
            number: format!("001-001-{:07}", n),
            cdc: None,
        })
    }

    async fn cancel(&self, _invoice_id: InvoiceId) -> Result<(), PortError> {
        Ok(())
    }
}

fn session_with(issuer: Arc<dyn IssuancePort>) -> InvoiceSession {
    let catalog = Catalog::from_parts(
        vec![CatalogFixtures::customer(), CatalogFixtures::other_customer()],
        vec![
            CatalogFixtures::product_iva10(),
            CatalogFixtures::product_iva5(),
            CatalogFixtures::service_exempt(),
        ],
    );
    InvoiceSession::new(catalog, issuer, Currency::PYG)
}

fn first_customer(session: &InvoiceSession) -> CustomerId {
    session.catalog().customers()[0].id
}

fn product(session: &InvoiceSession, code: &str) -> ProductId {
    session.catalog().product_by_code(code).unwrap().id
}

mod selection_tests {
    use super::*;

    #[test]
    fn test_select_known_customer() {
        let mut session = session_with(Arc::new(UnavailableIssuance));
        let id = first_customer(&session);

        let customer = session.select_customer(id).unwrap();

        assert_eq!(customer.ruc, "12345678-9");
        assert_eq!(session.selected_customer().map(|c| c.id), Some(id));
    }

    #[test]
    fn test_select_unknown_customer() {
        let mut session = session_with(Arc::new(UnavailableIssuance));

        let result = session.select_customer(CustomerId::new());

        assert!(matches!(result, Err(AppError::Catalog(CatalogError::CustomerNotFound(_)))));
        assert!(session.selected_customer().is_none());
    }

    #[test]
    fn test_registered_customer_can_be_selected() {
        let mut session = session_with(Arc::new(UnavailableIssuance));
        let created = session
            .catalog_mut()
            .create_customer(NewCustomer {
                name: "Ferretería Central".to_string(),
                ruc: "80099999-1".to_string(),
                address: "Ruta 2 km 20".to_string(),
                phone: None,
                email: None,
            })
            .unwrap();

        assert!(session.select_customer(created.id).is_ok());
    }

    #[test]
    fn test_add_products_and_totals() {
        let mut session = session_with(Arc::new(UnavailableIssuance));
        let iva10 = product(&session, "PROD001");
        let iva5 = product(&session, "PROD002");

        let row = session.add_product(iva10).unwrap();
        session.add_product(iva5).unwrap();
        session.builder_mut().set_quantity(row, dec!(3)).unwrap();
        assert!(session.add_product_by_code("NOEXISTE").is_none());

        let totals = session.totals().unwrap();
        assert_money_amount(&totals.total_sale, dec!(35000));
        assert_money_amount(&totals.total_tax, dec!(3250));
    }

    #[test]
    fn test_add_unknown_product() {
        let mut session = session_with(Arc::new(UnavailableIssuance));

        let result = session.add_product(ProductId::new());

        assert!(matches!(result, Err(AppError::Catalog(CatalogError::ProductNotFound(_)))));
        assert!(session.builder().is_empty());
    }
}

mod submit_tests {
    use super::*;

    #[tokio::test]
    async fn test_submit_without_customer() {
        let mut session = session_with(Arc::new(SequentialIssuance::default()));
        session.add_product_by_code("PROD001").unwrap();

        let result = session.submit().await;

        assert!(matches!(result, Err(AppError::Invoicing(InvoicingError::MissingCustomer))));
        assert_eq!(session.builder().len(), 1);
    }

    #[tokio::test]
    async fn test_submit_without_items() {
        let mut session = session_with(Arc::new(SequentialIssuance::default()));
        let id = first_customer(&session);
        session.select_customer(id).unwrap();

        let result = session.submit().await;

        assert!(matches!(result, Err(AppError::Invoicing(InvoicingError::EmptyInvoice))));
    }

    #[tokio::test]
    async fn test_unavailable_issuance_keeps_form() {
        let mut session = session_with(Arc::new(UnavailableIssuance));
        let id = first_customer(&session);
        session.select_customer(id).unwrap();
        session.add_product_by_code("PROD001").unwrap();

        let result = session.submit().await;

        assert!(matches!(result, Err(AppError::Invoicing(InvoicingError::NotImplemented(_)))));
        assert_eq!(session.builder().len(), 1);
        assert!(session.selected_customer().is_some());
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form() {
        let mut session = session_with(Arc::new(SequentialIssuance::default()));
        let id = first_customer(&session);
        session.select_customer(id).unwrap();
        session.set_payment_terms(PaymentTerms::Credit { days: 30 });
        session.add_product_by_code("PROD001").unwrap();

        let invoice = session.submit().await.unwrap();

        assert_eq!(invoice.status, InvoiceStatus::Issued);
        assert_eq!(invoice.number.as_deref(), Some("001-001-0000001"));
        assert_eq!(invoice.payment_terms, PaymentTerms::Credit { days: 30 });
        assert_money_amount(&invoice.totals().unwrap().total_sale, dec!(10000));
        assert_money_amount(&invoice.totals().unwrap().total_tax, dec!(1000));

        assert!(session.builder().is_empty());
        assert!(session.selected_customer().is_none());
        assert_eq!(session.payment_terms(), PaymentTerms::Cash);
    }

    #[tokio::test]
    async fn test_cancel_issued_invoice() {
        let mut session = session_with(Arc::new(SequentialIssuance::default()));
        let id = first_customer(&session);
        session.select_customer(id).unwrap();
        session.add_product_by_code("SERV001").unwrap();
        let mut invoice = session.submit().await.unwrap();

        session.cancel(&mut invoice).await.unwrap();
        assert_eq!(invoice.status, InvoiceStatus::Cancelled);

        let again = session.cancel(&mut invoice).await;
        assert!(matches!(
            again,
            Err(AppError::Invoicing(InvoicingError::InvalidStateTransition { .. }))
        ));
    }
}

mod context_tests {
    use super::*;

    #[test]
    fn test_context_session_uses_samples_and_stub() {
        let app = AppContext::from_config(AppConfig::default()).unwrap();
        let session = app.invoice_session();

        assert_eq!(session.catalog().customers().len(), 2);
        assert!(session.catalog().product_by_code("SERV001").is_some());
        assert_eq!(session.builder().currency(), Currency::PYG);
    }

    #[tokio::test]
    async fn test_context_issuer_can_be_replaced() {
        let app = AppContext::from_config(AppConfig::default())
            .unwrap()
            .with_issuer(Arc::new(SequentialIssuance::default()));
        let mut session = app.invoice_session();
        let id = first_customer(&session);
        session.select_customer(id).unwrap();
        session.add_product_by_code("PROD002").unwrap();

        let invoice = session.submit().await.unwrap();

        assert_money_amount(&invoice.totals().unwrap().total_tax, dec!(250));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let config = AppConfig {
            api_base_url: String::new(),
            ..Default::default()
        };

        let result = AppContext::from_config(config);

        assert!(matches!(result, Err(AppError::Documents(_))));
    }
}
