//! Cart Use Case
//!
//! Per-user shopping cart management. Every operation is scoped to the
//! authenticated caller; no identifier in the request can reach another
//! user's cart.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::cart_item::CartLine;
use crate::domain::repository::{CartRepository, ProductRepository};
use crate::domain::value_object::product_id::ProductId;
use crate::error::{CommerceError, CommerceResult};

/// Cart use case
pub struct CartUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    cart_repo: Arc<C>,
    product_repo: Arc<P>,
}

impl<C, P> CartUseCase<C, P>
where
    C: CartRepository,
    P: ProductRepository,
{
    pub fn new(cart_repo: Arc<C>, product_repo: Arc<P>) -> Self {
        Self {
            cart_repo,
            product_repo,
        }
    }

    /// List the caller's cart with current catalog prices
    pub async fn view(&self, user_id: &UserId) -> CommerceResult<Vec<CartLine>> {
        self.cart_repo.lines_for_user(user_id).await
    }

    /// Add a product, merging into an existing line if there is one
    pub async fn add(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<Vec<CartLine>> {
        validate_quantity(quantity)?;

        // The catalog is the source of truth for what can be carted
        if self.product_repo.find_by_id(product_id).await?.is_none() {
            return Err(CommerceError::ProductNotFound);
        }

        self.cart_repo.add_item(user_id, product_id, quantity).await?;

        tracing::info!(
            user_id = %user_id,
            product_id = %product_id,
            quantity,
            "Item added to cart"
        );

        self.cart_repo.lines_for_user(user_id).await
    }

    /// Overwrite a line's quantity
    pub async fn set_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<Vec<CartLine>> {
        validate_quantity(quantity)?;

        let updated = self
            .cart_repo
            .set_quantity(user_id, product_id, quantity)
            .await?;
        if updated == 0 {
            return Err(CommerceError::CartItemNotFound);
        }

        self.cart_repo.lines_for_user(user_id).await
    }

    /// Remove one line
    pub async fn remove(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
    ) -> CommerceResult<Vec<CartLine>> {
        let removed = self.cart_repo.remove_item(user_id, product_id).await?;
        if removed == 0 {
            return Err(CommerceError::CartItemNotFound);
        }

        self.cart_repo.lines_for_user(user_id).await
    }

    /// Empty the cart. Already-empty carts are fine.
    pub async fn clear(&self, user_id: &UserId) -> CommerceResult<()> {
        let removed = self.cart_repo.clear(user_id).await?;

        tracing::info!(user_id = %user_id, removed, "Cart cleared");

        Ok(())
    }
}

fn validate_quantity(quantity: i32) -> CommerceResult<()> {
    if quantity < 1 {
        return Err(CommerceError::Validation(
            "Quantity must be at least 1".to_string(),
        ));
    }
    Ok(())
}
