//! Place Order Use Case
//!
//! Turns a validated checkout payload into a persisted order. The order
//! header, all of its lines, and the cart cleanup land in a single
//! database transaction, so a failure partway leaves no trace.

use std::sync::Arc;

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::order::{Order, OrderItem};
use crate::domain::repository::OrderRepository;
use crate::domain::value_object::{product_id::ProductId, shipping_address::ShippingAddress};
use crate::error::{CommerceError, CommerceResult};

/// Maximum payment method label length
const PAYMENT_METHOD_MAX_LENGTH: usize = 100;

/// One checkout line as submitted by the client
pub struct OrderLineInput {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    pub unit_price_cents: i64,
    pub image_url: Option<String>,
}

/// Checkout input
pub struct PlaceOrderInput {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub payment_method: String,
    pub items: Vec<OrderLineInput>,
    pub total_cents: i64,
    pub shipping_cents: i64,
    pub tax_cents: i64,
}

/// Checkout output
pub struct PlaceOrderOutput {
    pub order: Order,
}

/// Place order use case
pub struct PlaceOrderUseCase<O>
where
    O: OrderRepository,
{
    order_repo: Arc<O>,
}

impl<O> PlaceOrderUseCase<O>
where
    O: OrderRepository,
{
    pub fn new(order_repo: Arc<O>) -> Self {
        Self { order_repo }
    }

    pub async fn execute(
        &self,
        user_id: UserId,
        input: PlaceOrderInput,
    ) -> CommerceResult<PlaceOrderOutput> {
        let shipping = ShippingAddress::new(
            input.address,
            input.city,
            input.postal_code,
            input.country,
        )
        .map_err(|e| CommerceError::Validation(e.to_string()))?;

        let payment_method = input.payment_method.trim().to_string();
        if payment_method.is_empty() {
            return Err(CommerceError::Validation(
                "Payment method cannot be empty".to_string(),
            ));
        }
        if payment_method.len() > PAYMENT_METHOD_MAX_LENGTH {
            return Err(CommerceError::Validation(format!(
                "Payment method must be at most {} characters",
                PAYMENT_METHOD_MAX_LENGTH
            )));
        }

        if input.items.is_empty() {
            return Err(CommerceError::Validation(
                "Order must contain at least one item".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(input.items.len());
        for line in input.items {
            let product_name = line.product_name.trim().to_string();
            if product_name.is_empty() {
                return Err(CommerceError::Validation(
                    "Item name cannot be empty".to_string(),
                ));
            }
            if line.quantity < 1 {
                return Err(CommerceError::Validation(
                    "Item quantity must be at least 1".to_string(),
                ));
            }
            if line.unit_price_cents < 0 {
                return Err(CommerceError::Validation(
                    "Item price cannot be negative".to_string(),
                ));
            }

            items.push(OrderItem {
                product_id: line.product_id,
                product_name,
                quantity: line.quantity,
                unit_price_cents: line.unit_price_cents,
                image_url: line.image_url,
            });
        }

        for (label, value) in [
            ("Total", input.total_cents),
            ("Shipping price", input.shipping_cents),
            ("Tax", input.tax_cents),
        ] {
            if value < 0 {
                return Err(CommerceError::Validation(format!(
                    "{} cannot be negative",
                    label
                )));
            }
        }

        // Totals are stored exactly as the client submitted them. No
        // payment is captured in this system, so nothing downstream
        // spends these figures. Recompute them server-side from the
        // catalog before wiring up a real payment provider.
        let order = Order::new(
            user_id,
            shipping,
            payment_method,
            items,
            input.total_cents,
            input.shipping_cents,
            input.tax_cents,
        );

        self.order_repo.place(&order).await?;

        tracing::info!(
            order_id = %order.order_id,
            user_id = %order.user_id,
            item_count = order.items.len(),
            total_cents = order.total_cents,
            "Order placed"
        );

        Ok(PlaceOrderOutput { order })
    }
}
