use kernel::id::Id;

pub struct ProductMarker;
pub type ProductId = Id<ProductMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_new() {
        let product_id = ProductId::new();
        let uuid = product_id.as_uuid();
        assert_eq!(uuid.get_version_num(), 4); // UUIDv4
    }

    #[test]
    fn test_from_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let product_id = ProductId::from_uuid(uuid);
        assert_eq!(product_id.as_uuid(), &uuid);
    }
}
