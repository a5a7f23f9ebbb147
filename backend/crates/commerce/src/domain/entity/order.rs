//! Order Entities

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    order_id::OrderId, order_status::OrderStatus, product_id::ProductId,
    shipping_address::ShippingAddress,
};

/// A placed order with its lines
///
/// Monetary fields hold the figures the client submitted at checkout;
/// the server records them without recomputing. Lines keep their
/// submitted sequence.
#[derive(Debug, Clone)]
pub struct Order {
    pub order_id: OrderId,
    pub user_id: UserId,
    pub shipping: ShippingAddress,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
    /// Order total in cents, as submitted
    pub total_cents: i64,
    /// Shipping charge in cents, as submitted
    pub shipping_cents: i64,
    /// Tax portion in cents, as submitted
    pub tax_cents: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order in the `Pending` state
    pub fn new(
        user_id: UserId,
        shipping: ShippingAddress,
        payment_method: String,
        items: Vec<OrderItem>,
        total_cents: i64,
        shipping_cents: i64,
        tax_cents: i64,
    ) -> Self {
        let now = Utc::now();

        Self {
            order_id: OrderId::new(),
            user_id,
            shipping,
            payment_method,
            items,
            total_cents,
            shipping_cents,
            tax_cents,
            status: OrderStatus::Pending,
            created_at: now,
            updated_at: now,
        }
    }
}

/// One line of an order
///
/// Name, price and image are snapshots taken at checkout. Catalog edits
/// after the fact do not rewrite order history.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub product_name: String,
    pub quantity: i32,
    /// Unit price in cents at the time of purchase
    pub unit_price_cents: i64,
    pub image_url: Option<String>,
}
