//! Cart Entities

use auth::domain::value_object::user_id::UserId;
use chrono::{DateTime, Utc};

use crate::domain::value_object::product_id::ProductId;

/// One line of a user's cart as stored
///
/// A cart holds at most one line per product; adding the same product
/// again raises the quantity on the existing line.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub user_id: UserId,
    pub product_id: ProductId,
    pub quantity: i32,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn new(user_id: UserId, product_id: ProductId, quantity: i32) -> Self {
        Self {
            user_id,
            product_id,
            quantity,
            added_at: Utc::now(),
        }
    }
}

/// One line of a user's cart joined with current catalog data
///
/// This is what cart reads return; price and name reflect the catalog
/// right now, not the moment the line was added.
#[derive(Debug, Clone)]
pub struct CartLine {
    pub product_id: ProductId,
    pub product_name: String,
    pub unit_price_cents: i64,
    pub image_url: Option<String>,
    pub quantity: i32,
}
