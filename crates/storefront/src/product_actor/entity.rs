//! ActorEntity trait implementation for the Product domain type.
//!
//! This module contains the [`ActorEntity`] trait implementation that enables [`Product`] to be
//! managed by the generic [`ResourceActor`](actor_framework::ResourceActor), including the stock
//! actions used by the purchase workflow.

use super::actions::{ProductAction, ProductActionResult};
use super::error::ProductError;
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use rust_decimal::Decimal;

fn validate_name(name: &str) -> Result<(), ProductError> {
    if name.trim().is_empty() {
        return Err(ProductError::Validation("name must not be empty".into()));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), ProductError> {
    if price < Decimal::ZERO {
        return Err(ProductError::InvalidPrice(price));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = ProductUpdate;
    type Action = ProductAction;
    type ActionResult = ProductActionResult;
    type Context = ();
    type Error = ProductError;

    /// Creates a new Product from creation parameters.
    ///
    /// Rejects an empty name or a negative price.
    fn from_create_params(id: ProductId, params: ProductCreate) -> Result<Self, ProductError> {
        validate_name(&params.name)?;
        validate_price(params.unit_price)?;
        Ok(Self::new(
            id,
            params.name.trim(),
            params.unit_price,
            params.stock,
        ))
    }

    /// Handles catalog edits.
    ///
    /// # Fields Updated
    /// - `name`: Display name
    /// - `unit_price`: Price charged from the next purchase on
    ///
    /// Both fields are validated before either is applied.
    async fn on_update(&mut self, update: ProductUpdate, _ctx: &()) -> Result<(), ProductError> {
        if let Some(name) = &update.name {
            validate_name(name)?;
        }
        if let Some(price) = update.unit_price {
            validate_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(price) = update.unit_price {
            self.unit_price = price;
        }
        Ok(())
    }

    /// Handles stock actions.
    ///
    /// # Actions
    /// - `CheckStock`: Returns the current level
    /// - `ReserveStock`: Decrements stock if enough is available
    /// - `ReleaseStock` / `Restock`: Increment stock
    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &(),
    ) -> Result<ProductActionResult, ProductError> {
        match action {
            ProductAction::CheckStock => Ok(ProductActionResult::CheckStock(self.stock)),
            ProductAction::ReserveStock(quantity) => {
                if quantity == 0 {
                    return Err(ProductError::InvalidQuantity(quantity));
                }
                if quantity > self.stock {
                    return Err(ProductError::InsufficientStock {
                        product_id: self.id,
                        requested: quantity,
                        available: self.stock,
                    });
                }
                self.stock -= quantity;
                Ok(ProductActionResult::ReserveStock(self.stock))
            }
            ProductAction::ReleaseStock(quantity) => {
                self.add_stock(quantity)?;
                Ok(ProductActionResult::ReleaseStock(self.stock))
            }
            ProductAction::Restock(quantity) => {
                self.add_stock(quantity)?;
                Ok(ProductActionResult::Restock(self.stock))
            }
        }
    }
}

impl Product {
    fn add_stock(&mut self, quantity: u32) -> Result<(), ProductError> {
        if quantity == 0 {
            return Err(ProductError::InvalidQuantity(quantity));
        }
        self.stock = self
            .stock
            .checked_add(quantity)
            .ok_or(ProductError::InvalidQuantity(quantity))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn soap(stock: u32) -> Product {
        Product::new(ProductId(1), "Soap", dec!(10.00), stock)
    }

    #[test]
    fn create_rejects_blank_name_and_negative_price() {
        let blank = ProductCreate {
            name: "  ".into(),
            unit_price: dec!(1),
            stock: 1,
        };
        assert!(matches!(
            Product::from_create_params(ProductId(1), blank),
            Err(ProductError::Validation(_))
        ));

        let negative = ProductCreate {
            name: "Soap".into(),
            unit_price: dec!(-0.01),
            stock: 1,
        };
        assert_eq!(
            Product::from_create_params(ProductId(1), negative),
            Err(ProductError::InvalidPrice(dec!(-0.01)))
        );
    }

    #[test]
    fn create_accepts_free_product() {
        let params = ProductCreate {
            name: " Sample ".into(),
            unit_price: Decimal::ZERO,
            stock: 0,
        };
        let product = Product::from_create_params(ProductId(4), params).unwrap();
        assert_eq!(product.name, "Sample");
        assert_eq!(product.id, ProductId(4));
    }

    #[tokio::test]
    async fn reserve_decrements_stock() {
        let mut product = soap(10);
        let result = product
            .handle_action(ProductAction::ReserveStock(4), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::ReserveStock(6));
        assert_eq!(product.stock, 6);
    }

    #[tokio::test]
    async fn reserve_beyond_stock_leaves_it_unchanged() {
        let mut product = soap(3);
        let err = product
            .handle_action(ProductAction::ReserveStock(4), &())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ProductError::InsufficientStock {
                product_id: ProductId(1),
                requested: 4,
                available: 3
            }
        );
        assert_eq!(product.stock, 3);
    }

    #[tokio::test]
    async fn release_and_restock_add_units() {
        let mut product = soap(2);
        product
            .handle_action(ProductAction::ReleaseStock(2), &())
            .await
            .unwrap();
        let result = product
            .handle_action(ProductAction::Restock(5), &())
            .await
            .unwrap();
        assert_eq!(result, ProductActionResult::Restock(9));
    }

    #[tokio::test]
    async fn zero_and_overflowing_quantities_are_invalid() {
        let mut product = soap(u32::MAX - 1);
        for action in [
            ProductAction::ReserveStock(0),
            ProductAction::Restock(0),
            ProductAction::ReleaseStock(2),
        ] {
            let err = product.handle_action(action, &()).await.unwrap_err();
            assert!(matches!(err, ProductError::InvalidQuantity(_)));
        }
        assert_eq!(product.stock, u32::MAX - 1);
    }

    #[tokio::test]
    async fn update_is_all_or_nothing() {
        let mut product = soap(1);
        let update = ProductUpdate {
            name: Some("Bar Soap".into()),
            unit_price: Some(dec!(-1)),
        };
        assert!(product.on_update(update, &()).await.is_err());
        assert_eq!(product.name, "Soap");

        let update = ProductUpdate {
            name: Some("Bar Soap".into()),
            unit_price: Some(dec!(12.50)),
        };
        product.on_update(update, &()).await.unwrap();
        assert_eq!(product.name, "Bar Soap");
        assert_eq!(product.unit_price, dec!(12.50));
    }
}
