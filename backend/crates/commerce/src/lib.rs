//! Commerce (Storefront) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Product catalog with admin-only creation
//! - Per-user cart with quantity-merging upsert
//! - Transactional checkout: header, lines, and cart cleanup commit
//!   together or not at all
//! - Order history and admin status transitions
//!
//! ## Money
//! All prices are integer cents (BIGINT end to end). Checkout totals
//! are recorded as the client submitted them; no payment is captured.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;


// Primary public API
pub use error::{CommerceError, CommerceResult};
pub use infra::postgres::PgCommerceRepository;
pub use presentation::router::commerce_router;

// ============================================================================
// Convenience re-exports
// ============================================================================

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgCommerceRepository as CommerceStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
