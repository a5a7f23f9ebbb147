//! Value Object Module

pub mod order_id;
pub mod order_status;
pub mod product_id;
pub mod shipping_address;
