//! # Customer Client
//!
//! High-level API over the `Customer` actor: registration, profile edits and wallet actions.
use crate::customer_actor::{CustomerAction, CustomerActionResult, CustomerError, PurchaseCharge};
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use rust_decimal::Decimal;
use tracing::{debug, instrument};

/// Client for interacting with the Customer actor.
#[derive(Clone)]
pub struct CustomerClient {
    inner: ResourceClient<Customer>,
}

impl CustomerClient {
    pub fn new(inner: ResourceClient<Customer>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Customer> for CustomerClient {
    type Error = CustomerError;

    fn inner(&self) -> &ResourceClient<Customer> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => CustomerError::NotFound(id),
            other => other
                .downcast_entity::<CustomerError>()
                .unwrap_or_else(|e| CustomerError::ActorCommunicationError(e.to_string())),
        }
    }
}

impl CustomerClient {
    #[instrument(skip(self))]
    pub async fn create_customer(
        &self,
        params: CustomerCreate,
    ) -> Result<CustomerId, CustomerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Fetches a customer, treating a missing one as [`CustomerError::NotFound`].
    #[instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.get(id)
            .await?
            .ok_or_else(|| CustomerError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        update: CustomerUpdate,
    ) -> Result<Customer, CustomerError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn check_balance(&self, id: CustomerId) -> Result<Decimal, CustomerError> {
        match self.action(id, CustomerAction::CheckBalance).await? {
            CustomerActionResult::CheckBalance(balance) => Ok(balance),
            other => Err(unexpected("CheckBalance", other)),
        }
    }

    /// Adds money to the wallet. Returns the new balance.
    #[instrument(skip(self))]
    pub async fn top_up(&self, id: CustomerId, amount: Decimal) -> Result<Decimal, CustomerError> {
        match self.action(id, CustomerAction::TopUp(amount)).await? {
            CustomerActionResult::TopUp(balance) => Ok(balance),
            other => Err(unexpected("TopUp", other)),
        }
    }

    /// Takes money out of the wallet. Returns the new balance.
    #[instrument(skip(self))]
    pub async fn withdraw(
        &self,
        id: CustomerId,
        amount: Decimal,
    ) -> Result<Decimal, CustomerError> {
        match self.action(id, CustomerAction::Withdraw(amount)).await? {
            CustomerActionResult::Withdraw(balance) => Ok(balance),
            other => Err(unexpected("Withdraw", other)),
        }
    }

    /// Debits a purchase total, recorded against `reference`.
    #[instrument(skip(self))]
    pub async fn charge_purchase(
        &self,
        id: CustomerId,
        amount: Decimal,
        reference: String,
    ) -> Result<PurchaseCharge, CustomerError> {
        debug!("Charging {} to customer {}", amount, id);
        match self
            .action(id, CustomerAction::ChargePurchase { amount, reference })
            .await?
        {
            CustomerActionResult::ChargePurchase(charge) => Ok(charge),
            other => Err(unexpected("ChargePurchase", other)),
        }
    }

    async fn action(
        &self,
        id: CustomerId,
        action: CustomerAction,
    ) -> Result<CustomerActionResult, CustomerError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

fn unexpected(action: &str, result: CustomerActionResult) -> CustomerError {
    CustomerError::ActorCommunicationError(format!(
        "unexpected reply to {}: {:?}",
        action, result
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_charge_purchase_sends_reference() {
        let (client, mut receiver) = create_mock_client::<Customer>(10);
        let customer_client = CustomerClient::new(client);

        let task = tokio::spawn(async move {
            customer_client
                .charge_purchase(CustomerId(1), dec!(30.00), "invoice_4".into())
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CustomerId(1));
        assert_eq!(
            action,
            CustomerAction::ChargePurchase {
                amount: dec!(30.00),
                reference: "invoice_4".into()
            }
        );

        let charge = PurchaseCharge {
            balance_after: dec!(70.00),
            points_earned: 0,
        };
        responder
            .send(Ok(CustomerActionResult::ChargePurchase(charge)))
            .unwrap();

        assert_eq!(task.await.unwrap(), Ok(charge));
    }

    #[tokio::test]
    async fn test_insufficient_funds_is_typed() {
        let mut mock = MockClient::<Customer>::new();
        let rejection = CustomerError::InsufficientFunds {
            customer_id: CustomerId(2),
            required: dec!(50),
            available: dec!(20),
        };
        mock.expect_action(CustomerId(2))
            .return_err(FrameworkError::EntityError(Box::new(rejection.clone())));

        let client = CustomerClient::new(mock.client());
        let result = client.withdraw(CustomerId(2), dec!(50)).await;

        assert_eq!(result, Err(rejection));
        mock.verify();
    }

    #[tokio::test]
    async fn test_unknown_customer_is_not_found() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_action(CustomerId(8))
            .return_err(FrameworkError::NotFound("customer_8".into()));
        mock.expect_get(CustomerId(8)).return_ok(None);

        let client = CustomerClient::new(mock.client());
        assert_eq!(
            client.top_up(CustomerId(8), dec!(5)).await,
            Err(CustomerError::NotFound("customer_8".into()))
        );
        assert_eq!(
            client.get_customer(CustomerId(8)).await,
            Err(CustomerError::NotFound("customer_8".into()))
        );
        mock.verify();
    }

    #[tokio::test]
    async fn test_mismatched_reply_is_reported() {
        let mut mock = MockClient::<Customer>::new();
        mock.expect_action(CustomerId(1))
            .return_ok(CustomerActionResult::CheckBalance(dec!(1)));

        let client = CustomerClient::new(mock.client());
        let result = client.top_up(CustomerId(1), dec!(5)).await;

        assert!(matches!(
            result,
            Err(CustomerError::ActorCommunicationError(msg)) if msg.contains("TopUp")
        ));
    }
}
