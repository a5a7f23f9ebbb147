//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use auth::domain::value_object::user_id::UserId;

use crate::domain::entity::{
    cart_item::CartLine,
    order::Order,
    product::Product,
};
use crate::domain::value_object::{
    order_id::OrderId, order_status::OrderStatus, product_id::ProductId,
};
use crate::error::CommerceResult;

/// Product repository trait
#[trait_variant::make(ProductRepository: Send)]
pub trait LocalProductRepository {
    /// Persist a new product
    async fn create(&self, product: &Product) -> CommerceResult<()>;

    /// Find product by ID
    async fn find_by_id(&self, product_id: &ProductId) -> CommerceResult<Option<Product>>;

    /// List all products, newest first
    async fn list(&self) -> CommerceResult<Vec<Product>>;
}

/// Cart repository trait
#[trait_variant::make(CartRepository: Send)]
pub trait LocalCartRepository {
    /// List a user's cart joined with current catalog data
    async fn lines_for_user(&self, user_id: &UserId) -> CommerceResult<Vec<CartLine>>;

    /// Add a product to the cart, raising quantity if the line exists
    async fn add_item(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<()>;

    /// Overwrite a line's quantity, returning the affected row count
    ///
    /// Zero rows means the product is not in the cart.
    async fn set_quantity(
        &self,
        user_id: &UserId,
        product_id: &ProductId,
        quantity: i32,
    ) -> CommerceResult<u64>;

    /// Remove one line, returning the affected row count
    async fn remove_item(&self, user_id: &UserId, product_id: &ProductId)
    -> CommerceResult<u64>;

    /// Remove every line in the user's cart
    async fn clear(&self, user_id: &UserId) -> CommerceResult<u64>;
}

/// Order repository trait
#[trait_variant::make(OrderRepository: Send)]
pub trait LocalOrderRepository {
    /// Persist an order with its lines and clear the owner's cart,
    /// all inside one transaction
    ///
    /// If any line references an unknown product the whole order is
    /// rolled back and the cart is left untouched.
    async fn place(&self, order: &Order) -> CommerceResult<()>;

    /// Find an order with its lines by ID
    async fn find_by_id(&self, order_id: &OrderId) -> CommerceResult<Option<Order>>;

    /// List a user's orders with their lines, newest first
    async fn list_for_user(&self, user_id: &UserId) -> CommerceResult<Vec<Order>>;

    /// Set an order's status, returning the affected row count
    ///
    /// Zero rows means no such order.
    async fn update_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> CommerceResult<u64>;
}
