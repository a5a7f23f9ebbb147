//! Product Entity

use chrono::{DateTime, Utc};

use crate::domain::value_object::product_id::ProductId;

/// Catalog product
///
/// Prices are integer cents. Fractional currency never enters the
/// system, so totals add up exactly.
#[derive(Debug, Clone)]
pub struct Product {
    /// Internal UUID identifier
    pub product_id: ProductId,
    /// Display name
    pub product_name: String,
    /// Optional long-form description
    pub description: Option<String>,
    /// Unit price in cents
    pub unit_price_cents: i64,
    /// Optional image location
    pub image_url: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Create a new product
    pub fn new(
        product_name: String,
        description: Option<String>,
        unit_price_cents: i64,
        image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();

        Self {
            product_id: ProductId::new(),
            product_name,
            description,
            unit_price_cents,
            image_url,
            created_at: now,
            updated_at: now,
        }
    }
}
