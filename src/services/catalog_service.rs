use crate::db::store::{Storage, StoreError};
use crate::models::hotel::Hotel;
use crate::models::user::User;

/// A hotel qualifies when any of its tags equals the category,
/// case-insensitively. No match is an empty list, not an error.
pub fn hotels_by_category(store: &dyn Storage, category: &str) -> Result<Vec<Hotel>, StoreError> {
    let hotels = store.all_hotels()?;
    Ok(hotels
        .into_iter()
        .filter(|hotel| {
            hotel
                .tags
                .iter()
                .any(|tag| tag.eq_ignore_ascii_case(category))
        })
        .collect())
}

/// Exact, case-sensitive username lookup. Returns the first match; the store
/// does not enforce username uniqueness, the account layer does.
pub fn user_by_username(store: &dyn Storage, username: &str) -> Result<Option<User>, StoreError> {
    let users = store.all_users()?;
    Ok(users.into_iter().find(|user| user.username == username))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::store::MemoryStore;
    use crate::db::seed::seed_catalog;
    use crate::models::user::NewUser;

    #[test]
    fn category_match_is_case_insensitive() {
        let store = MemoryStore::new();
        seed_catalog(&store).unwrap();

        let upper = hotels_by_category(&store, "LUXURY").unwrap();
        let lower = hotels_by_category(&store, "luxury").unwrap();

        assert!(!upper.is_empty());
        let upper_ids: Vec<u32> = upper.iter().map(|h| h.id).collect();
        let lower_ids: Vec<u32> = lower.iter().map(|h| h.id).collect();
        assert_eq!(upper_ids, lower_ids);
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let store = MemoryStore::new();
        seed_catalog(&store).unwrap();

        assert!(hotels_by_category(&store, "submarine").unwrap().is_empty());
    }

    #[test]
    fn username_lookup_is_exact() {
        let store = MemoryStore::new();
        store
            .create_user(NewUser {
                username: "asha".to_string(),
                password: "hash".to_string(),
                full_name: None,
                email: None,
                phone_number: None,
            })
            .unwrap();

        assert!(user_by_username(&store, "asha").unwrap().is_some());
        assert!(user_by_username(&store, "Asha").unwrap().is_none());
    }

    #[test]
    fn duplicate_usernames_resolve_to_first_match() {
        // The store itself is permissive about duplicate usernames; the
        // signup route rejects them. This pins the lookup behavior should a
        // duplicate ever get in.
        let store = MemoryStore::new();
        for email in ["first@example.com", "second@example.com"] {
            store
                .create_user(NewUser {
                    username: "dup".to_string(),
                    password: "hash".to_string(),
                    full_name: None,
                    email: Some(email.to_string()),
                    phone_number: None,
                })
                .unwrap();
        }

        let found = user_by_username(&store, "dup").unwrap().unwrap();
        assert_eq!(found.email.as_deref(), Some("first@example.com"));
    }
}
