use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle state as stored in the `orders.order_status` column.
///
/// New orders always start out `Pending`; every later state is set by an
/// administrator through the status update endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending = 0,
    Paid = 1,
    Shipped = 2,
    Delivered = 3,
    Cancelled = 4,
}

impl OrderStatus {
    #[inline]
    pub const fn id(&self) -> i16 {
        *self as i16
    }

    #[inline]
    pub const fn code(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Map a stored id back to a status.
    ///
    /// An id this code never wrote degrades to `Pending` instead of
    /// panicking, so the order stays readable and an operator can fix
    /// the row.
    #[inline]
    pub fn from_id(id: i16) -> Self {
        match id {
            0 => OrderStatus::Pending,
            1 => OrderStatus::Paid,
            2 => OrderStatus::Shipped,
            3 => OrderStatus::Delivered,
            4 => OrderStatus::Cancelled,
            _ => {
                tracing::warn!(
                    status_id = id,
                    "Unknown order status id in database, treating as pending"
                );
                OrderStatus::Pending
            }
        }
    }

    /// Parse a status code from a request body. Unknown codes are a
    /// caller error, not a degradation case.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(OrderStatus::Pending),
            "paid" => Some(OrderStatus::Paid),
            "shipped" => Some(OrderStatus::Shipped),
            "delivered" => Some(OrderStatus::Delivered),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ids_round_trip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Paid,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(OrderStatus::from_id(status.id()), status);
        }
    }

    #[test]
    fn test_unknown_id_degrades_to_pending() {
        assert_eq!(OrderStatus::from_id(99), OrderStatus::Pending);
        assert_eq!(OrderStatus::from_id(-3), OrderStatus::Pending);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(OrderStatus::from_code("shipped"), Some(OrderStatus::Shipped));
        assert_eq!(OrderStatus::from_code("SHIPPED"), None);
        assert_eq!(OrderStatus::from_code("returned"), None);
    }

    #[test]
    fn test_default_is_pending() {
        assert_eq!(OrderStatus::default(), OrderStatus::Pending);
    }

    #[test]
    fn test_serde_uses_lowercase_codes() {
        let json = serde_json::to_string(&OrderStatus::Shipped).unwrap();
        assert_eq!(json, r#""shipped""#);

        let back: OrderStatus = serde_json::from_str(r#""cancelled""#).unwrap();
        assert_eq!(back, OrderStatus::Cancelled);
    }
}
