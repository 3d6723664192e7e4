//! ActorEntity trait implementation for the Invoice domain type.
//!
//! Creating an invoice runs the purchase workflow. The invoice actor processes one message at a
//! time and awaits `on_create` to completion, so at most one purchase is between validation and
//! commit at any moment.
//!
//! ## Workflow
//!
//! 1. `from_create_params`: reject an empty basket or a zero quantity, merge duplicate lines.
//! 2. `on_create`, read phase: load the customer and every product, apply the promotion, check
//!    stock (free units included) and the wallet. Amounts that overflow a `Decimal` are
//!    rejected here. Nothing is mutated yet.
//! 3. `on_create`, commit phase: reserve stock line by line, book the sale to the shop account,
//!    then charge the wallet. A failure undoes the earlier steps before it is returned: the sale
//!    is reversed and reserved stock released.
//! 4. The priced invoice is stored by the actor and appears in the log.

use super::error::PurchaseError;
use super::InvoiceContext;
use crate::clients::ProductClient;
use crate::model::{lines_total, Invoice, InvoiceId, InvoiceLine, ProductId, PurchaseOrder};
use crate::shop_account_actor::Sale;
use actor_framework::ActorEntity;
use async_trait::async_trait;
use tracing::{info, warn};

/// Invoices accept no custom actions.
#[derive(Debug, Clone)]
pub enum InvoiceAction {}

#[async_trait]
impl ActorEntity for Invoice {
    type Id = InvoiceId;
    type Create = PurchaseOrder;
    type Update = ();
    type Action = InvoiceAction;
    type ActionResult = ();
    type Context = InvoiceContext;
    type Error = PurchaseError;

    fn from_create_params(id: InvoiceId, order: PurchaseOrder) -> Result<Self, PurchaseError> {
        if order.lines.is_empty() {
            return Err(PurchaseError::InvalidRequest("basket is empty".into()));
        }

        let mut lines: Vec<InvoiceLine> = Vec::with_capacity(order.lines.len());
        for requested in order.lines {
            if requested.quantity == 0 {
                return Err(PurchaseError::InvalidRequest(format!(
                    "quantity for {} must be at least 1",
                    requested.product_id
                )));
            }
            match lines
                .iter_mut()
                .find(|line| line.product_id == requested.product_id)
            {
                Some(line) => {
                    line.charged_quantity = line
                        .charged_quantity
                        .checked_add(requested.quantity)
                        .ok_or_else(|| {
                            PurchaseError::InvalidRequest(format!(
                                "quantity for {} is too large",
                                requested.product_id
                            ))
                        })?;
                }
                None => lines.push(InvoiceLine::requested(
                    requested.product_id,
                    requested.quantity,
                )),
            }
        }

        Ok(Invoice::draft(id, order.customer_id, lines))
    }

    async fn on_create(&mut self, ctx: &InvoiceContext) -> Result<(), PurchaseError> {
        let customer = ctx.customers.get_customer(self.customer_id).await?;

        let mut priced = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            let product = ctx.products.get_product(line.product_id).await?;
            let requested = line.charged_quantity;
            if requested > product.stock {
                return Err(PurchaseError::InsufficientStock {
                    product_id: product.id,
                    requested: u64::from(requested),
                    available: product.stock,
                });
            }

            let quote = ctx
                .promotion
                .quote(requested, product.unit_price)
                .ok_or_else(|| {
                    PurchaseError::InvalidRequest(format!("total for {} is too large", product.id))
                })?;
            if quote.units_removed() > u64::from(product.stock) {
                return Err(PurchaseError::InsufficientStock {
                    product_id: product.id,
                    requested: quote.units_removed(),
                    available: product.stock,
                });
            }

            priced.push(InvoiceLine {
                product_id: product.id,
                product_name: product.name,
                unit_price: product.unit_price,
                charged_quantity: quote.charged_quantity,
                free_quantity: quote.free_quantity,
                line_total: quote.line_total,
            });
        }

        let total = lines_total(&priced)
            .ok_or_else(|| PurchaseError::InvalidRequest("basket total is too large".into()))?;
        if total > customer.balance() {
            return Err(PurchaseError::InsufficientFunds {
                customer_id: customer.id,
                required: total,
                available: customer.balance(),
            });
        }

        let reserved = reserve_all(&ctx.products, &priced).await?;

        let sale = Sale {
            invoice: self.id,
            customer_id: self.customer_id,
            lines: priced.clone(),
        };
        if let Err(e) = ctx.accounts.record_sale(ctx.account, sale).await {
            release(&ctx.products, &reserved).await;
            return Err(e.into());
        }

        if let Err(e) = ctx
            .customers
            .charge_purchase(self.customer_id, total, self.id.to_string())
            .await
        {
            reverse_sale(ctx, self.id).await;
            release(&ctx.products, &reserved).await;
            return Err(e.into());
        }

        self.issue(priced, total);
        info!(
            invoice = %self.id,
            customer = %self.customer_id,
            total = %self.total,
            units = self.units_shipped(),
            "Purchase committed"
        );
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &InvoiceContext) -> Result<(), PurchaseError> {
        Err(PurchaseError::ImmutableInvoice(self.id))
    }

    async fn on_delete(&self, _ctx: &InvoiceContext) -> Result<(), PurchaseError> {
        Err(PurchaseError::ImmutableInvoice(self.id))
    }

    async fn handle_action(
        &mut self,
        action: InvoiceAction,
        _ctx: &InvoiceContext,
    ) -> Result<(), PurchaseError> {
        match action {}
    }
}

/// Reserves every line or none of them.
async fn reserve_all(
    products: &ProductClient,
    lines: &[InvoiceLine],
) -> Result<Vec<(ProductId, u32)>, PurchaseError> {
    let mut reserved = Vec::with_capacity(lines.len());
    for line in lines {
        match reserve(products, line).await {
            Ok(units) => reserved.push((line.product_id, units)),
            Err(e) => {
                release(products, &reserved).await;
                return Err(e);
            }
        }
    }
    Ok(reserved)
}

async fn reserve(products: &ProductClient, line: &InvoiceLine) -> Result<u32, PurchaseError> {
    // Bounded by the product's u32 stock once the read phase has passed.
    let units = u32::try_from(line.units_shipped()).map_err(|_| {
        PurchaseError::InvalidRequest(format!("quantity for {} is too large", line.product_id))
    })?;
    products.reserve_stock(line.product_id, units).await?;
    Ok(units)
}

/// Takes a booked sale back out of the shop account.
async fn reverse_sale(ctx: &InvoiceContext, invoice: InvoiceId) {
    match ctx.accounts.reverse_sale(ctx.account, invoice).await {
        Ok(revenue) => info!(%invoice, %revenue, "Sale reversed"),
        Err(e) => warn!(%invoice, error = %e, "Sale reversal failed"),
    }
}

/// Puts back stock taken for a purchase that did not complete.
async fn release(products: &ProductClient, reserved: &[(ProductId, u32)]) {
    for (product_id, units) in reserved {
        match products.release_stock(*product_id, *units).await {
            Ok(stock) => info!(product = %product_id, units, stock, "Reservation released"),
            // Nothing left to undo with; the shortfall shows up in the stock level.
            Err(e) => warn!(product = %product_id, units, error = %e, "Release failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CustomerId;

    fn create(order: PurchaseOrder) -> Result<Invoice, PurchaseError> {
        Invoice::from_create_params(InvoiceId(1), order)
    }

    #[test]
    fn empty_basket_is_invalid() {
        let err = create(PurchaseOrder::new(CustomerId(1))).unwrap_err();
        assert!(matches!(err, PurchaseError::InvalidRequest(_)));
    }

    #[test]
    fn zero_quantity_is_invalid() {
        let order = PurchaseOrder::new(CustomerId(1))
            .line(ProductId(1), 2)
            .line(ProductId(2), 0);
        let err = create(order).unwrap_err();
        assert_eq!(
            err,
            PurchaseError::InvalidRequest("quantity for product_2 must be at least 1".into())
        );
    }

    #[test]
    fn duplicate_lines_are_merged_in_first_seen_order() {
        let order = PurchaseOrder::new(CustomerId(1))
            .line(ProductId(2), 1)
            .line(ProductId(1), 1)
            .line(ProductId(2), 2);
        let draft = create(order).unwrap();

        let lines: Vec<(ProductId, u32)> = draft
            .lines
            .iter()
            .map(|l| (l.product_id, l.charged_quantity))
            .collect();
        assert_eq!(lines, vec![(ProductId(2), 3), (ProductId(1), 1)]);
    }

    #[test]
    fn merged_quantity_overflow_is_invalid() {
        let order = PurchaseOrder::new(CustomerId(1))
            .line(ProductId(1), u32::MAX)
            .line(ProductId(1), 1);
        assert!(matches!(
            create(order),
            Err(PurchaseError::InvalidRequest(_))
        ));
    }
}
