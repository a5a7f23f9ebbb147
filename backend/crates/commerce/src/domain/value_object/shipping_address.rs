//! Shipping Address Value Object
//!
//! A postal destination attached to an order. Validation is presence
//! only; this service never tries to verify that an address exists.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Upper bound for any single address field
const FIELD_MAX_LENGTH: usize = 200;

/// Destination for a placed order.
///
/// Stored denormalized on the order row, so later edits to a customer's
/// profile never rewrite where a past order was shipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingAddress {
    address: String,
    city: String,
    postal_code: String,
    country: String,
}

impl ShippingAddress {
    /// Create a validated shipping address
    pub fn new(
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> AppResult<Self> {
        let address = Self::field("Address", address.into())?;
        let city = Self::field("City", city.into())?;
        let postal_code = Self::field("Postal code", postal_code.into())?;
        let country = Self::field("Country", country.into())?;

        Ok(Self {
            address,
            city,
            postal_code,
            country,
        })
    }

    /// Create from database values (assumed already validated)
    pub fn from_db(
        address: impl Into<String>,
        city: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            city: city.into(),
            postal_code: postal_code.into(),
            country: country.into(),
        }
    }

    fn field(name: &str, value: String) -> AppResult<String> {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(AppError::bad_request(format!("{} cannot be empty", name)));
        }
        if value.len() > FIELD_MAX_LENGTH {
            return Err(AppError::bad_request(format!(
                "{} must be at most {} characters",
                name, FIELD_MAX_LENGTH
            )));
        }
        Ok(value)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shipping_address_valid() {
        let addr = ShippingAddress::new("1-2-3 Chiyoda", "Tokyo", "100-0001", "Japan");
        assert!(addr.is_ok());
    }

    #[test]
    fn test_fields_are_trimmed() {
        let addr = ShippingAddress::new("  42 Elm St  ", " Springfield ", " 62704 ", " USA ")
            .unwrap();
        assert_eq!(addr.address(), "42 Elm St");
        assert_eq!(addr.city(), "Springfield");
        assert_eq!(addr.postal_code(), "62704");
        assert_eq!(addr.country(), "USA");
    }

    #[test]
    fn test_empty_field_rejected() {
        assert!(ShippingAddress::new("", "Tokyo", "100-0001", "Japan").is_err());
        assert!(ShippingAddress::new("1-2-3", "   ", "100-0001", "Japan").is_err());
        assert!(ShippingAddress::new("1-2-3", "Tokyo", "", "Japan").is_err());
        assert!(ShippingAddress::new("1-2-3", "Tokyo", "100-0001", "\t").is_err());
    }

    #[test]
    fn test_oversized_field_rejected() {
        let long = "x".repeat(201);
        assert!(ShippingAddress::new(long, "Tokyo", "100-0001", "Japan").is_err());
    }
}
