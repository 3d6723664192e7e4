use crate::clients::{CustomerClient, InvoiceClient, ProductClient, ShopAccountClient};
use crate::config::ShopConfig;
use crate::invoice_actor::{self, InvoiceContext};
use crate::model::{ShopAccount, ShopAccountId};
use crate::shop_account_actor::ShopAccountError;
use crate::{customer_actor, product_actor, shop_account_actor};
use rust_decimal::Decimal;
use tokio::task::{JoinError, JoinHandle};
use tracing::info;

/// Name of the account seeded at startup.
pub const SHOP_ACCOUNT_NAME: &str = "Storefront";

/// The storefront actors, wired and running.
///
/// Must be created inside a Tokio runtime.
pub struct ShopSystem {
    pub products: ProductClient,
    pub customers: CustomerClient,
    pub invoices: InvoiceClient,
    pub accounts: ShopAccountClient,
    /// The account every purchase is booked to.
    pub account: ShopAccountId,
    handles: Vec<JoinHandle<()>>,
}

impl ShopSystem {
    pub fn new() -> Self {
        Self::with_config(&ShopConfig::default())
    }

    pub fn with_config(config: &ShopConfig) -> Self {
        let (product_actor, product_client) = product_actor::new(config.channel_capacity);
        let (customer_actor, customer_client) = customer_actor::new(config.channel_capacity);
        let (invoice_actor, invoice_client) = invoice_actor::new(config.channel_capacity);
        let (mut account_actor, account_client) =
            shop_account_actor::new(config.channel_capacity);
        let account = account_actor.seed(|id| ShopAccount::new(id, SHOP_ACCOUNT_NAME));

        let products = ProductClient::new(product_client);
        let customers = CustomerClient::new(customer_client);
        let invoices = InvoiceClient::new(invoice_client);
        let accounts = ShopAccountClient::new(account_client);

        let context = InvoiceContext {
            products: products.clone(),
            customers: customers.clone(),
            accounts: accounts.clone(),
            account,
            promotion: config.promotion,
        };

        // Invoice first: it holds clients of the others, so it must stop before they can.
        let handles = vec![
            tokio::spawn(invoice_actor.run(context)),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(account_actor.run(())),
        ];

        info!(
            channel_capacity = config.channel_capacity,
            promotion = ?config.promotion,
            "Shop system started"
        );

        Self {
            products,
            customers,
            invoices,
            accounts,
            account,
            handles,
        }
    }

    /// Revenue booked to the shop account so far.
    pub async fn revenue(&self) -> Result<Decimal, ShopAccountError> {
        self.accounts.revenue(self.account).await
    }

    /// The shop account with its sales ledger.
    pub async fn shop_account(&self) -> Result<ShopAccount, ShopAccountError> {
        self.accounts.get_account(self.account).await
    }

    /// Drops the clients and waits for every actor to drain its mailbox and stop.
    ///
    /// Clones of the clients held elsewhere keep their actors alive, so drop them first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        let Self {
            products,
            customers,
            invoices,
            accounts,
            handles,
            ..
        } = self;
        drop(invoices);
        drop(products);
        drop(customers);
        drop(accounts);

        for handle in handles {
            handle.await?;
        }
        info!("Shop system stopped");
        Ok(())
    }
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}
