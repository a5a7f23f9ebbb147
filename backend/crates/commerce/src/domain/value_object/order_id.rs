use kernel::id::Id;

pub struct OrderMarker;
pub type OrderId = Id<OrderMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_unique() {
        let a = OrderId::new();
        let b = OrderId::new();
        assert_ne!(a.as_uuid(), b.as_uuid());
    }
}
