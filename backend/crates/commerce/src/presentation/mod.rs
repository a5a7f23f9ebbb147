//! Presentation Layer
//!
//! HTTP handlers, DTOs, and router. Authentication middleware comes
//! from the auth crate; nothing here re-checks tokens.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::CommerceAppState;
pub use router::{commerce_router, commerce_router_generic};
