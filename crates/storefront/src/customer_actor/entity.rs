//! ActorEntity trait implementation for the Customer domain type.

use super::actions::{CustomerAction, CustomerActionResult, PurchaseCharge};
use super::error::CustomerError;
use crate::model::{Customer, CustomerCreate, CustomerId, CustomerUpdate, WalletTransactionKind};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

fn validate_name(name: &str) -> Result<(), CustomerError> {
    if name.trim().is_empty() {
        return Err(CustomerError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), CustomerError> {
    if !email.contains('@') {
        return Err(CustomerError::Validation(format!(
            "invalid email address `{}`",
            email
        )));
    }
    Ok(())
}

fn positive(amount: Decimal) -> Result<Decimal, CustomerError> {
    if amount <= Decimal::ZERO {
        return Err(CustomerError::InvalidAmount(amount));
    }
    Ok(amount)
}

#[async_trait]
impl ActorEntity for Customer {
    type Id = CustomerId;
    type Create = CustomerCreate;
    type Update = CustomerUpdate;
    type Action = CustomerAction;
    type ActionResult = CustomerActionResult;
    type Context = ();
    type Error = CustomerError;

    /// Registers a customer. The opening balance may be zero but not negative.
    fn from_create_params(id: CustomerId, params: CustomerCreate) -> Result<Self, CustomerError> {
        validate_name(&params.name)?;
        validate_email(&params.email)?;
        if params.opening_balance < Decimal::ZERO {
            return Err(CustomerError::InvalidAmount(params.opening_balance));
        }
        Ok(Self::new(
            id,
            params.name.trim(),
            params.email.trim(),
            params.opening_balance,
        ))
    }

    async fn on_update(&mut self, update: CustomerUpdate, _ctx: &()) -> Result<(), CustomerError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(email) = &update.email {
            validate_email(email)?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = update.email {
            self.email = email.trim().to_string();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CustomerAction,
        _ctx: &(),
    ) -> Result<CustomerActionResult, CustomerError> {
        match action {
            CustomerAction::CheckBalance => Ok(CustomerActionResult::CheckBalance(self.balance())),
            CustomerAction::TopUp(amount) => {
                let amount = positive(amount)?;
                let balance = self
                    .wallet
                    .credit(WalletTransactionKind::TopUp, amount, None)
                    .ok_or(CustomerError::InvalidAmount(amount))?;
                Ok(CustomerActionResult::TopUp(balance))
            }
            CustomerAction::Withdraw(amount) => {
                let amount = positive(amount)?;
                self.ensure_funds(amount)?;
                let balance = self
                    .wallet
                    .debit(WalletTransactionKind::Withdrawal, amount, None);
                Ok(CustomerActionResult::Withdraw(balance))
            }
            CustomerAction::ChargePurchase { amount, reference } => {
                // Free baskets are charged zero and still count as a purchase.
                if amount < Decimal::ZERO {
                    return Err(CustomerError::InvalidAmount(amount));
                }
                self.ensure_funds(amount)?;
                // Booked before the debit so that a rejection leaves both untouched.
                let points_earned = self
                    .loyalty
                    .record_purchase(amount, Utc::now())
                    .ok_or(CustomerError::InvalidAmount(amount))?;
                let balance_after =
                    self.wallet
                        .debit(WalletTransactionKind::Purchase, amount, Some(reference));
                debug!(
                    customer = %self.id,
                    points_earned,
                    tier = ?self.loyalty.tier(),
                    "Purchase booked"
                );
                Ok(CustomerActionResult::ChargePurchase(PurchaseCharge {
                    balance_after,
                    points_earned,
                }))
            }
        }
    }
}

impl Customer {
    fn ensure_funds(&self, required: Decimal) -> Result<(), CustomerError> {
        if required > self.wallet.balance {
            return Err(CustomerError::InsufficientFunds {
                customer_id: self.id,
                required,
                available: self.wallet.balance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LoyaltyTier;
    use rust_decimal_macros::dec;

    fn alice(balance: Decimal) -> Customer {
        Customer::new(CustomerId(1), "Alice", "alice@example.com", balance)
    }

    #[test]
    fn create_validates_profile_and_opening_balance() {
        let params = |name: &str, email: &str, balance: Decimal| CustomerCreate {
            name: name.into(),
            email: email.into(),
            opening_balance: balance,
        };

        assert!(matches!(
            Customer::from_create_params(CustomerId(1), params("", "a@b.c", dec!(0))),
            Err(CustomerError::Validation(_))
        ));
        assert!(matches!(
            Customer::from_create_params(CustomerId(1), params("Alice", "alice", dec!(0))),
            Err(CustomerError::Validation(_))
        ));
        assert_eq!(
            Customer::from_create_params(CustomerId(1), params("Alice", "a@b.c", dec!(-5))),
            Err(CustomerError::InvalidAmount(dec!(-5)))
        );

        let customer =
            Customer::from_create_params(CustomerId(1), params("Alice", "a@b.c", dec!(20)))
                .unwrap();
        assert_eq!(customer.balance(), dec!(20));
        assert!(customer.wallet.transactions.is_empty());
    }

    #[tokio::test]
    async fn top_up_and_withdraw_are_recorded() {
        let mut customer = alice(dec!(10));
        customer
            .handle_action(CustomerAction::TopUp(dec!(15)), &())
            .await
            .unwrap();
        let result = customer
            .handle_action(CustomerAction::Withdraw(dec!(5)), &())
            .await
            .unwrap();

        assert_eq!(result, CustomerActionResult::Withdraw(dec!(20)));
        let kinds: Vec<_> = customer.wallet.transactions.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![WalletTransactionKind::TopUp, WalletTransactionKind::Withdrawal]
        );
    }

    #[tokio::test]
    async fn non_positive_amounts_are_rejected() {
        let mut customer = alice(dec!(10));
        for action in [
            CustomerAction::TopUp(dec!(0)),
            CustomerAction::Withdraw(dec!(-1)),
        ] {
            let err = customer.handle_action(action, &()).await.unwrap_err();
            assert!(matches!(err, CustomerError::InvalidAmount(_)));
        }
        assert_eq!(customer.balance(), dec!(10));
    }

    #[tokio::test]
    async fn top_up_beyond_largest_balance_is_rejected() {
        let mut customer = alice(Decimal::MAX);
        let err = customer
            .handle_action(CustomerAction::TopUp(dec!(1)), &())
            .await
            .unwrap_err();

        assert_eq!(err, CustomerError::InvalidAmount(dec!(1)));
        assert_eq!(customer.balance(), Decimal::MAX);
        assert!(customer.wallet.transactions.is_empty());

        let result = customer
            .handle_action(CustomerAction::CheckBalance, &())
            .await
            .unwrap();
        assert_eq!(result, CustomerActionResult::CheckBalance(Decimal::MAX));
    }

    #[tokio::test]
    async fn charge_that_would_overflow_total_spent_changes_nothing() {
        let mut customer = alice(dec!(10));
        customer.loyalty.total_spent = Decimal::MAX;

        let err = customer
            .handle_action(
                CustomerAction::ChargePurchase {
                    amount: dec!(5),
                    reference: "invoice_1".into(),
                },
                &(),
            )
            .await
            .unwrap_err();

        assert_eq!(err, CustomerError::InvalidAmount(dec!(5)));
        assert_eq!(customer.balance(), dec!(10));
        assert!(customer.wallet.transactions.is_empty());
        assert_eq!(customer.loyalty.purchase_count, 0);
    }

    #[tokio::test]
    async fn overdraft_is_rejected_without_side_effects() {
        let mut customer = alice(dec!(29.99));
        let err = customer
            .handle_action(
                CustomerAction::ChargePurchase {
                    amount: dec!(30.00),
                    reference: "invoice_1".into(),
                },
                &(),
            )
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CustomerError::InsufficientFunds {
                customer_id: CustomerId(1),
                required: dec!(30.00),
                available: dec!(29.99),
            }
        );
        assert_eq!(customer.balance(), dec!(29.99));
        assert!(customer.wallet.transactions.is_empty());
        assert_eq!(customer.loyalty.purchase_count, 0);
    }

    #[tokio::test]
    async fn charge_debits_wallet_and_earns_points() {
        let mut customer = alice(dec!(1000));
        let result = customer
            .handle_action(
                CustomerAction::ChargePurchase {
                    amount: dec!(250.00),
                    reference: "invoice_3".into(),
                },
                &(),
            )
            .await
            .unwrap();

        assert_eq!(
            result,
            CustomerActionResult::ChargePurchase(PurchaseCharge {
                balance_after: dec!(750.00),
                points_earned: 2,
            })
        );
        let entry = &customer.wallet.transactions[0];
        assert_eq!(entry.kind, WalletTransactionKind::Purchase);
        assert_eq!(entry.reference.as_deref(), Some("invoice_3"));
        assert_eq!(customer.loyalty.total_spent, dec!(250.00));
        assert_eq!(customer.loyalty.tier(), LoyaltyTier::None);
    }
}
