//! # Storefront demo
//!
//! Starts the [`ShopSystem`], stocks one product, registers one customer and walks through a
//! successful purchase, a rejected one and the resulting wallet, loyalty and revenue state.
//!
//! ```bash
//! RUST_LOG=info cargo run -p storefront
//! SHOP_LOG_FORMAT=json SHOP_PROMO_GROUP_SIZE=2 cargo run -p storefront
//! ```

use actor_framework::tracing::setup_tracing;
use rust_decimal::Decimal;
use storefront::config::ShopConfig;
use storefront::lifecycle::ShopSystem;
use storefront::model::{CustomerCreate, ProductCreate, PurchaseRequest};
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ShopConfig::from_env()?;
    setup_tracing(config.log_format);

    info!(?config, "Starting storefront");
    let system = ShopSystem::with_config(&config);

    let soap = system
        .products
        .create_product(ProductCreate {
            name: "Lavender Soap".to_string(),
            unit_price: Decimal::new(1000, 2),
            stock: 10,
        })
        .await?;
    let alice = system
        .customers
        .create_customer(CustomerCreate {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            opening_balance: Decimal::new(5000, 2),
        })
        .await?;
    info!(product = %soap, customer = %alice, "Catalog and customer ready");

    let span = tracing::info_span!("purchase_processing");
    let result = async {
        system
            .invoices
            .purchase(PurchaseRequest::new(alice, soap, 3))
            .await
    }
    .instrument(span)
    .await;

    match result {
        Ok(invoice) => println!("{}", invoice),
        Err(e) => error!(error = %e, "Purchase failed"),
    }

    // 6 paid + 2 free would need 8 units; only 6 are left.
    match system
        .invoices
        .purchase(PurchaseRequest::new(alice, soap, 6))
        .await
    {
        Ok(invoice) => info!(invoice = %invoice.id, "Unexpectedly accepted"),
        Err(e) => info!(reason = %e, "Purchase rejected as expected"),
    }

    let customer = system.customers.get_customer(alice).await?;
    for entry in &customer.wallet.transactions {
        info!(
            seq = entry.seq,
            kind = ?entry.kind,
            amount = %entry.amount,
            balance_after = %entry.balance_after,
            reference = entry.reference.as_deref().unwrap_or("-"),
            "Wallet"
        );
    }
    let stock = system.products.check_stock(soap).await?;
    info!(
        points = customer.loyalty.points,
        tier = ?customer.loyalty.tier(),
        stock,
        "Final state"
    );

    let account = system.shop_account().await?;
    for sale in &account.sales {
        info!(
            seq = sale.seq,
            invoice = %sale.invoice,
            product = %sale.product_name,
            charged = sale.charged_quantity,
            free = sale.free_quantity,
            amount = %sale.amount,
            "Sale"
        );
    }
    info!(account = %account.name, revenue = %account.revenue, "Shop revenue");

    system.shutdown().await?;
    info!("Storefront stopped");
    Ok(())
}
