//! # Invoice Client
//!
//! Entry point of the purchase workflow and read access to the invoice log.
//! The workflow itself runs inside the Invoice actor's `on_create` hook.
use crate::invoice_actor::PurchaseError;
use crate::model::{CustomerId, Invoice, InvoiceId, PurchaseOrder, PurchaseRequest};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Invoice actor.
#[derive(Clone)]
pub struct InvoiceClient {
    inner: ResourceClient<Invoice>,
}

impl InvoiceClient {
    pub fn new(inner: ResourceClient<Invoice>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Invoice> for InvoiceClient {
    type Error = PurchaseError;

    fn inner(&self) -> &ResourceClient<Invoice> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => PurchaseError::NotFound(id),
            other => other
                .downcast_entity::<PurchaseError>()
                .unwrap_or_else(|e| PurchaseError::Unavailable(e.to_string())),
        }
    }
}

impl InvoiceClient {
    /// Buys one product. On success stock and wallet have been updated and the invoice is in
    /// the log; on error nothing changed.
    #[instrument(skip(self))]
    pub async fn purchase(&self, request: PurchaseRequest) -> Result<Invoice, PurchaseError> {
        self.purchase_basket(request.into()).await
    }

    /// Buys every line of `order` or none of them, producing a single invoice.
    #[instrument(skip(self))]
    pub async fn purchase_basket(&self, order: PurchaseOrder) -> Result<Invoice, PurchaseError> {
        info!("Sending purchase to invoice actor");
        let id = self.inner.create(order).await.map_err(Self::map_error)?;
        self.get_invoice(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_invoice(&self, id: InvoiceId) -> Result<Invoice, PurchaseError> {
        self.get(id)
            .await?
            .ok_or_else(|| PurchaseError::NotFound(id.to_string()))
    }

    /// Every invoice of one customer, oldest first.
    #[instrument(skip(self))]
    pub async fn invoices_for_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Invoice>, PurchaseError> {
        debug!("Sending request");
        let mut invoices = self.list().await?;
        invoices.retain(|invoice| invoice.customer_id == customer_id);
        Ok(invoices)
    }
}
