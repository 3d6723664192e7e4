use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Customers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub u32);

impl From<u32> for CustomerId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "customer_{}", self.0)
    }
}

/// A registered customer with a stored-value wallet.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Customer`](#impl-ActorEntity-for-Customer) for details on:
/// - Creation parameters ([`CustomerCreate`])
/// - Update parameters ([`CustomerUpdate`])
/// - Wallet actions ([`CustomerAction`](crate::customer_actor::CustomerAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub wallet: Wallet,
    pub loyalty: Loyalty,
}

impl Customer {
    /// Creates a customer whose wallet holds `opening_balance` and has no history.
    pub fn new(
        id: CustomerId,
        name: impl Into<String>,
        email: impl Into<String>,
        opening_balance: Decimal,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            wallet: Wallet::with_balance(opening_balance),
            loyalty: Loyalty::default(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.wallet.balance
    }
}

/// Payload for registering a customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub name: String,
    pub email: String,
    pub opening_balance: Decimal,
}

/// Profile edits. The balance is changed only through wallet actions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomerUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Stored balance plus the append-only history of every change to it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Wallet {
    pub balance: Decimal,
    pub transactions: Vec<WalletTransaction>,
}

impl Wallet {
    pub fn with_balance(balance: Decimal) -> Self {
        Self {
            balance,
            transactions: Vec::new(),
        }
    }

    /// Adds `amount` and records it. Callers validate `amount`.
    ///
    /// Returns the new balance, or `None` without touching the wallet if it would overflow.
    pub(crate) fn credit(
        &mut self,
        kind: WalletTransactionKind,
        amount: Decimal,
        reference: Option<String>,
    ) -> Option<Decimal> {
        self.balance = self.balance.checked_add(amount)?;
        self.record(kind, amount, reference);
        Some(self.balance)
    }

    /// Subtracts `amount` and records it. Callers check the balance first.
    pub(crate) fn debit(
        &mut self,
        kind: WalletTransactionKind,
        amount: Decimal,
        reference: Option<String>,
    ) -> Decimal {
        self.balance -= amount;
        self.record(kind, amount, reference);
        self.balance
    }

    fn record(&mut self, kind: WalletTransactionKind, amount: Decimal, reference: Option<String>) {
        let seq = self.transactions.len() as u64 + 1;
        self.transactions.push(WalletTransaction {
            seq,
            kind,
            amount,
            balance_after: self.balance,
            reference,
            at: Utc::now(),
        });
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WalletTransactionKind {
    TopUp,
    Withdrawal,
    Purchase,
}

/// One entry of the wallet history. `amount` is always positive; `kind` gives the direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub seq: u64,
    pub kind: WalletTransactionKind,
    pub amount: Decimal,
    pub balance_after: Decimal,
    /// Invoice id for purchases.
    pub reference: Option<String>,
    pub at: DateTime<Utc>,
}

/// Amount of spend that earns one loyalty point.
pub const SPEND_PER_POINT: Decimal = Decimal::ONE_HUNDRED;

/// Purchase statistics and loyalty points.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Loyalty {
    pub points: u64,
    pub purchase_count: u32,
    pub total_spent: Decimal,
    pub last_purchase: Option<DateTime<Utc>>,
}

impl Loyalty {
    /// Books a purchase of `amount` and returns the points it earned.
    ///
    /// `None` if `total_spent` would overflow; nothing is booked then.
    pub(crate) fn record_purchase(&mut self, amount: Decimal, at: DateTime<Utc>) -> Option<u64> {
        let total_spent = self.total_spent.checked_add(amount)?;
        let earned = points_for(amount);
        self.points = self.points.saturating_add(earned);
        self.purchase_count = self.purchase_count.saturating_add(1);
        self.total_spent = total_spent;
        self.last_purchase = Some(at);
        Some(earned)
    }

    pub fn tier(&self) -> LoyaltyTier {
        LoyaltyTier::for_points(self.points)
    }
}

/// One point per full [`SPEND_PER_POINT`] spent. Saturates at `u64::MAX`.
pub fn points_for(amount: Decimal) -> u64 {
    use rust_decimal::prelude::ToPrimitive;
    if amount <= Decimal::ZERO {
        return 0;
    }
    (amount / SPEND_PER_POINT)
        .floor()
        .to_u64()
        .unwrap_or(u64::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoyaltyTier {
    None,
    Bronze,
    Silver,
    Gold,
    Diamond,
}

impl LoyaltyTier {
    pub fn for_points(points: u64) -> Self {
        match points {
            2000.. => LoyaltyTier::Diamond,
            1000.. => LoyaltyTier::Gold,
            500.. => LoyaltyTier::Silver,
            100.. => LoyaltyTier::Bronze,
            _ => LoyaltyTier::None,
        }
    }

    /// Points at which this tier starts.
    pub fn threshold(self) -> u64 {
        match self {
            LoyaltyTier::None => 0,
            LoyaltyTier::Bronze => 100,
            LoyaltyTier::Silver => 500,
            LoyaltyTier::Gold => 1000,
            LoyaltyTier::Diamond => 2000,
        }
    }

    pub fn next(self) -> Option<LoyaltyTier> {
        match self {
            LoyaltyTier::None => Some(LoyaltyTier::Bronze),
            LoyaltyTier::Bronze => Some(LoyaltyTier::Silver),
            LoyaltyTier::Silver => Some(LoyaltyTier::Gold),
            LoyaltyTier::Gold => Some(LoyaltyTier::Diamond),
            LoyaltyTier::Diamond => None,
        }
    }
}
