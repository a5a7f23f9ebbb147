//! Application Layer
//!
//! Use cases and application services.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod place_order;
pub mod update_status;

// Re-exports
pub use cart::CartUseCase;
pub use catalog::{CatalogUseCase, CreateProductInput};
pub use orders::OrderQueryUseCase;
pub use place_order::{OrderLineInput, PlaceOrderInput, PlaceOrderOutput, PlaceOrderUseCase};
pub use update_status::UpdateOrderStatusUseCase;
