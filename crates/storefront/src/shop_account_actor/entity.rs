//! ActorEntity trait implementation for the ShopAccount domain type.

use super::actions::{Sale, ShopAccountAction, ShopAccountActionResult};
use super::error::ShopAccountError;
use crate::model::{
    lines_total, InvoiceId, SaleRecord, ShopAccount, ShopAccountCreate, ShopAccountId,
    ShopAccountUpdate,
};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;

fn validate_name(name: &str) -> Result<(), ShopAccountError> {
    if name.trim().is_empty() {
        return Err(ShopAccountError::Validation("name must not be empty".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for ShopAccount {
    type Id = ShopAccountId;
    type Create = ShopAccountCreate;
    type Update = ShopAccountUpdate;
    type Action = ShopAccountAction;
    type ActionResult = ShopAccountActionResult;
    type Context = ();
    type Error = ShopAccountError;

    fn from_create_params(
        id: ShopAccountId,
        params: ShopAccountCreate,
    ) -> Result<Self, ShopAccountError> {
        validate_name(&params.name)?;
        Ok(Self::new(id, params.name.trim()))
    }

    async fn on_update(
        &mut self,
        update: ShopAccountUpdate,
        _ctx: &(),
    ) -> Result<(), ShopAccountError> {
        if let Some(name) = update.name {
            validate_name(&name)?;
            self.name = name.trim().to_string();
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: ShopAccountAction,
        _ctx: &(),
    ) -> Result<ShopAccountActionResult, ShopAccountError> {
        match action {
            ShopAccountAction::Revenue => Ok(ShopAccountActionResult::Revenue(self.revenue)),
            ShopAccountAction::RecordSale(sale) => {
                let revenue = self.record_sale(sale)?;
                Ok(ShopAccountActionResult::RecordSale(revenue))
            }
            ShopAccountAction::ReverseSale(invoice) => {
                let revenue = self.reverse_sale(invoice)?;
                Ok(ShopAccountActionResult::ReverseSale(revenue))
            }
        }
    }
}

impl ShopAccount {
    fn record_sale(&mut self, sale: Sale) -> Result<Decimal, ShopAccountError> {
        if self.sales_for(sale.invoice).next().is_some() {
            return Err(ShopAccountError::DuplicateSale(sale.invoice));
        }
        let revenue = lines_total(&sale.lines)
            .and_then(|total| self.revenue.checked_add(total))
            .ok_or(ShopAccountError::RevenueOverflow(sale.invoice))?;

        let at = Utc::now();
        for line in sale.lines {
            let seq = self.sales.len() as u64 + 1;
            self.sales.push(SaleRecord {
                seq,
                invoice: sale.invoice,
                customer_id: sale.customer_id,
                product_id: line.product_id,
                product_name: line.product_name,
                unit_price: line.unit_price,
                charged_quantity: line.charged_quantity,
                free_quantity: line.free_quantity,
                amount: line.line_total,
                at,
            });
        }
        self.revenue = revenue;
        debug!(account = %self.id, invoice = %sale.invoice, %revenue, "Sale booked");
        Ok(revenue)
    }

    fn reverse_sale(&mut self, invoice: InvoiceId) -> Result<Decimal, ShopAccountError> {
        if self.sales_for(invoice).next().is_none() {
            return Err(ShopAccountError::UnknownSale(invoice));
        }
        // Every booked amount is already part of revenue, so neither step can fail in practice.
        let revenue = self
            .sales_for(invoice)
            .try_fold(Decimal::ZERO, |total, sale| total.checked_add(sale.amount))
            .and_then(|amount| self.revenue.checked_sub(amount))
            .ok_or(ShopAccountError::RevenueOverflow(invoice))?;

        self.sales.retain(|sale| sale.invoice != invoice);
        self.revenue = revenue;
        debug!(account = %self.id, %invoice, %revenue, "Sale reversed");
        Ok(revenue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CustomerId, InvoiceLine, ProductId};
    use rust_decimal_macros::dec;

    fn line(product: u32, name: &str, price: Decimal, charged: u32, free: u32) -> InvoiceLine {
        InvoiceLine {
            product_id: ProductId(product),
            product_name: name.into(),
            unit_price: price,
            charged_quantity: charged,
            free_quantity: free,
            line_total: price * Decimal::from(charged),
        }
    }

    fn sale(invoice: u32, lines: Vec<InvoiceLine>) -> ShopAccountAction {
        ShopAccountAction::RecordSale(Sale {
            invoice: InvoiceId(invoice),
            customer_id: CustomerId(1),
            lines,
        })
    }

    fn account() -> ShopAccount {
        ShopAccount::new(ShopAccountId(1), "Storefront")
    }

    #[test]
    fn create_rejects_blank_name() {
        let err = ShopAccount::from_create_params(
            ShopAccountId(1),
            ShopAccountCreate { name: "  ".into() },
        )
        .unwrap_err();
        assert!(matches!(err, ShopAccountError::Validation(_)));
    }

    #[tokio::test]
    async fn record_sale_books_one_record_per_line() {
        let mut account = account();
        let result = account
            .handle_action(
                sale(
                    1,
                    vec![
                        line(1, "Soap", dec!(10.00), 3, 1),
                        line(2, "Towel", dec!(25.00), 1, 0),
                    ],
                ),
                &(),
            )
            .await
            .unwrap();

        assert_eq!(result, ShopAccountActionResult::RecordSale(dec!(55.00)));
        assert_eq!(account.revenue, dec!(55.00));
        let booked: Vec<(u64, &str, Decimal)> = account
            .sales
            .iter()
            .map(|s| (s.seq, s.product_name.as_str(), s.amount))
            .collect();
        assert_eq!(
            booked,
            vec![(1, "Soap", dec!(30.00)), (2, "Towel", dec!(25.00))]
        );
        assert_eq!(account.sales[0].free_quantity, 1);
    }

    #[tokio::test]
    async fn same_invoice_is_booked_once() {
        let mut account = account();
        let soap = || vec![line(1, "Soap", dec!(10.00), 1, 0)];
        account.handle_action(sale(4, soap()), &()).await.unwrap();

        let err = account.handle_action(sale(4, soap()), &()).await.unwrap_err();
        assert_eq!(err, ShopAccountError::DuplicateSale(InvoiceId(4)));
        assert_eq!(account.revenue, dec!(10.00));
        assert_eq!(account.sales.len(), 1);
    }

    #[tokio::test]
    async fn revenue_overflow_books_nothing() {
        let mut account = account();
        account.revenue = Decimal::MAX;

        let err = account
            .handle_action(sale(1, vec![line(1, "Soap", dec!(1), 1, 0)]), &())
            .await
            .unwrap_err();

        assert_eq!(err, ShopAccountError::RevenueOverflow(InvoiceId(1)));
        assert_eq!(account.revenue, Decimal::MAX);
        assert!(account.sales.is_empty());
    }

    #[tokio::test]
    async fn reverse_sale_takes_back_only_that_invoice() {
        let mut account = account();
        account
            .handle_action(sale(1, vec![line(1, "Soap", dec!(10.00), 3, 1)]), &())
            .await
            .unwrap();
        account
            .handle_action(sale(2, vec![line(2, "Towel", dec!(25.00), 2, 0)]), &())
            .await
            .unwrap();

        let result = account
            .handle_action(ShopAccountAction::ReverseSale(InvoiceId(2)), &())
            .await
            .unwrap();

        assert_eq!(result, ShopAccountActionResult::ReverseSale(dec!(30.00)));
        assert_eq!(account.sales.len(), 1);
        assert_eq!(account.sales[0].invoice, InvoiceId(1));

        let err = account
            .handle_action(ShopAccountAction::ReverseSale(InvoiceId(2)), &())
            .await
            .unwrap_err();
        assert_eq!(err, ShopAccountError::UnknownSale(InvoiceId(2)));
    }
}
