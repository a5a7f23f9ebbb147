//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{
    cart_item::{CartItem, CartLine},
    order::{Order, OrderItem},
    product::Product,
};
pub use repository::{CartRepository, OrderRepository, ProductRepository};
