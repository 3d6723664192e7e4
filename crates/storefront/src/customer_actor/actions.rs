//! Wallet actions for the Customer actor.
//!
//! Every action that changes the balance also appends a
//! [`WalletTransaction`](crate::model::WalletTransaction) to the customer's history.

use rust_decimal::Decimal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerAction {
    /// Reads the wallet balance.
    CheckBalance,
    /// Adds a positive amount to the wallet.
    TopUp(Decimal),
    /// Takes a positive amount out of the wallet. Never overdraws.
    Withdraw(Decimal),
    /// Debits the total of a purchase and books it for loyalty.
    ///
    /// # Errors
    /// Fails with `InsufficientFunds` if the balance cannot cover `amount`, leaving the wallet
    /// untouched.
    ChargePurchase {
        amount: Decimal,
        /// Invoice the charge belongs to.
        reference: String,
    },
}

/// Results from CustomerActions - variants match 1:1 with CustomerAction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomerActionResult {
    CheckBalance(Decimal),
    /// Balance after the top-up.
    TopUp(Decimal),
    /// Balance after the withdrawal.
    Withdraw(Decimal),
    ChargePurchase(PurchaseCharge),
}

/// Outcome of a successful [`CustomerAction::ChargePurchase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseCharge {
    pub balance_after: Decimal,
    pub points_earned: u64,
}
