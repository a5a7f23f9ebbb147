//! Entity Module

pub mod cart_item;
pub mod order;
pub mod product;
