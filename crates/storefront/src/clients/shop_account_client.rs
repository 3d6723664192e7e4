//! # Shop Account Client
//!
//! High-level API over the shop account actor: revenue and the sales ledger.
use crate::model::{InvoiceId, ShopAccount, ShopAccountCreate, ShopAccountId};
use crate::shop_account_actor::{
    Sale, ShopAccountAction, ShopAccountActionResult, ShopAccountError,
};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the shop account actor.
#[derive(Clone)]
pub struct ShopAccountClient {
    inner: ResourceClient<ShopAccount>,
}

impl ShopAccountClient {
    pub fn new(inner: ResourceClient<ShopAccount>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<ShopAccount> for ShopAccountClient {
    type Error = ShopAccountError;

    fn inner(&self) -> &ResourceClient<ShopAccount> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ShopAccountError::NotFound(id),
            other => other
                .downcast_entity::<ShopAccountError>()
                .unwrap_or_else(|e| ShopAccountError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl ShopAccountClient {
    #[instrument(skip(self))]
    pub async fn create_account(
        &self,
        params: ShopAccountCreate,
    ) -> Result<ShopAccountId, ShopAccountError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn get_account(&self, id: ShopAccountId) -> Result<ShopAccount, ShopAccountError> {
        self.get(id)
            .await?
            .ok_or_else(|| ShopAccountError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn revenue(&self, id: ShopAccountId) -> Result<Decimal, ShopAccountError> {
        match self.action(id, ShopAccountAction::Revenue).await? {
            ShopAccountActionResult::Revenue(revenue) => Ok(revenue),
            other => Err(unexpected("Revenue", other)),
        }
    }

    /// Books a purchase. Returns the revenue after booking.
    #[instrument(skip(self, sale), fields(invoice = %sale.invoice))]
    pub async fn record_sale(
        &self,
        id: ShopAccountId,
        sale: Sale,
    ) -> Result<Decimal, ShopAccountError> {
        match self.action(id, ShopAccountAction::RecordSale(sale)).await? {
            ShopAccountActionResult::RecordSale(revenue) => Ok(revenue),
            other => Err(unexpected("RecordSale", other)),
        }
    }

    /// Takes a booked purchase back out. Returns the revenue after the reversal.
    #[instrument(skip(self))]
    pub async fn reverse_sale(
        &self,
        id: ShopAccountId,
        invoice: InvoiceId,
    ) -> Result<Decimal, ShopAccountError> {
        match self
            .action(id, ShopAccountAction::ReverseSale(invoice))
            .await?
        {
            ShopAccountActionResult::ReverseSale(revenue) => Ok(revenue),
            other => Err(unexpected("ReverseSale", other)),
        }
    }

    async fn action(
        &self,
        id: ShopAccountId,
        action: ShopAccountAction,
    ) -> Result<ShopAccountActionResult, ShopAccountError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(action: &str, result: ShopAccountActionResult) -> ShopAccountError {
    ShopAccountError::ActorCommunicationError(format!(
        "unexpected reply to {}: {:?}",
        action, result
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerId;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_record_sale_sends_invoice_lines() {
        let (client, mut receiver) = create_mock_client::<ShopAccount>(10);
        let accounts = ShopAccountClient::new(client);
        let sale = Sale {
            invoice: InvoiceId(3),
            customer_id: CustomerId(1),
            lines: Vec::new(),
        };
        let sent = sale.clone();

        let task =
            tokio::spawn(async move { accounts.record_sale(ShopAccountId(1), sent).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ShopAccountId(1));
        assert_eq!(action, ShopAccountAction::RecordSale(sale));
        responder
            .send(Ok(ShopAccountActionResult::RecordSale(dec!(12.50))))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(dec!(12.50)));
    }

    #[tokio::test]
    async fn test_closed_account_is_a_communication_error() {
        let mut mock = MockClient::<ShopAccount>::new();
        mock.expect_action(ShopAccountId(1))
            .return_err(FrameworkError::ActorClosed);

        let client = ShopAccountClient::new(mock.client());
        let result = client.revenue(ShopAccountId(1)).await;

        assert!(matches!(
            result,
            Err(ShopAccountError::ActorCommunicationError(_))
        ));
        mock.verify();
    }
}
