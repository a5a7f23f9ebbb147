use kernel::id::Id;

pub struct UserMarker;
pub type UserId = Id<UserMarker>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_new_is_v4() {
        let user_id = UserId::new();
        assert_eq!(user_id.as_uuid().get_version_num(), 4);
    }

    #[test]
    fn test_round_trip_through_uuid() {
        let uuid = uuid::Uuid::new_v4();
        let user_id = UserId::from_uuid(uuid);
        assert_eq!(user_id.into_uuid(), uuid);
    }

    #[test]
    fn test_display_matches_uuid() {
        let user_id = UserId::new();
        assert_eq!(user_id.to_string(), user_id.as_uuid().to_string());
    }
}
