use super::*;
use crate::auth::{MOCK_EMAIL, MOCK_PASSWORD};

#[test]
fn open_uses_default_keys_without_overrides() {
    let store = open();
    assert_eq!(store.config().session_key, config::DEFAULT_SESSION_KEY);
    assert_eq!(store.config().user_key, config::DEFAULT_USER_KEY);
}

#[test]
fn open_stores_share_the_same_backing_map() {
    let first = open();
    first.logout();
    first.login(MOCK_EMAIL, MOCK_PASSWORD).unwrap();

    let second = open();
    assert!(second.is_authenticated());
    second.logout();
    assert!(!first.is_authenticated());
}
