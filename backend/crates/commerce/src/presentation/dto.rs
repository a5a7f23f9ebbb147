//! API DTOs (Data Transfer Objects)
//!
//! Monetary fields are integer cents throughout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{
    cart_item::CartLine,
    order::{Order, OrderItem},
    product::Product,
};
use crate::domain::value_object::shipping_address::ShippingAddress;

// ============================================================================
// Catalog
// ============================================================================

/// Product creation request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Product projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&Product> for ProductResponse {
    fn from(product: &Product) -> Self {
        Self {
            id: product.product_id.to_string(),
            name: product.product_name.clone(),
            description: product.description.clone(),
            price: product.unit_price_cents,
            image: product.image_url.clone(),
            created_at: product.created_at,
        }
    }
}

/// Response body for the product list
#[derive(Debug, Clone, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// Response body for a single product
#[derive(Debug, Clone, Serialize)]
pub struct ProductDetailResponse {
    pub product: ProductResponse,
}

// ============================================================================
// Cart
// ============================================================================

/// Add-to-cart request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

/// Quantity update request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartItemRequest {
    pub quantity: i32,
}

/// Cart line projection, priced from the current catalog
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub product_id: String,
    pub name: String,
    pub price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub quantity: i32,
}

impl From<&CartLine> for CartLineResponse {
    fn from(line: &CartLine) -> Self {
        Self {
            product_id: line.product_id.to_string(),
            name: line.product_name.clone(),
            price: line.unit_price_cents,
            image: line.image_url.clone(),
            quantity: line.quantity,
        }
    }
}

/// Response body for cart reads and mutations
#[derive(Debug, Clone, Serialize)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
}

impl CartResponse {
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            items: lines.iter().map(CartLineResponse::from).collect(),
        }
    }
}

// ============================================================================
// Orders
// ============================================================================

/// Shipping destination, shared between checkout requests and order reads
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressDto {
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl From<&ShippingAddress> for ShippingAddressDto {
    fn from(shipping: &ShippingAddress) -> Self {
        Self {
            address: shipping.address().to_string(),
            city: shipping.city().to_string(),
            postal_code: shipping.postal_code().to_string(),
            country: shipping.country().to_string(),
        }
    }
}

/// One checkout line as submitted
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: Uuid,
    pub name: String,
    pub quantity: i32,
    pub unit_price: i64,
    #[serde(default)]
    pub image: Option<String>,
}

/// Checkout request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    pub shipping_address: ShippingAddressDto,
    pub payment_method: String,
    pub items: Vec<OrderLineRequest>,
    pub total_price: i64,
    pub shipping_price: i64,
    pub tax_price: i64,
}

/// Status update request
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: String,
}

/// Response body after a status transition
///
/// The field is `orderStatus` rather than `status` so it cannot shadow
/// the envelope's own `status` marker when flattened.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResponse {
    pub order_status: String,
}

/// Order line projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: String,
    pub name: String,
    pub quantity: i32,
    pub unit_price: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl From<&OrderItem> for OrderItemResponse {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            name: item.product_name.clone(),
            quantity: item.quantity,
            unit_price: item.unit_price_cents,
            image: item.image_url.clone(),
        }
    }
}

/// Order projection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub status: String,
    pub shipping_address: ShippingAddressDto,
    pub payment_method: String,
    pub items: Vec<OrderItemResponse>,
    pub total_price: i64,
    pub shipping_price: i64,
    pub tax_price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderResponse {
    fn from(order: &Order) -> Self {
        Self {
            id: order.order_id.to_string(),
            user_id: order.user_id.to_string(),
            status: order.status.code().to_string(),
            shipping_address: ShippingAddressDto::from(&order.shipping),
            payment_method: order.payment_method.clone(),
            items: order.items.iter().map(OrderItemResponse::from).collect(),
            total_price: order.total_cents,
            shipping_price: order.shipping_cents,
            tax_price: order.tax_cents,
            created_at: order.created_at,
        }
    }
}

/// Response body for the caller's order history
#[derive(Debug, Clone, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

/// Response body for a single order
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetailResponse {
    pub order: OrderResponse,
}
