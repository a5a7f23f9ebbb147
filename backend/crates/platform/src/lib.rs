//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256, Base64)
//! - Password hashing (Argon2id) and the account password policy
//! - Cookie management

pub mod cookie;
pub mod crypto;
pub mod password;
