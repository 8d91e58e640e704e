use super::*;
use crate::auth::MockAuthProvider;
use crate::storage::MemoryStorage;

fn store() -> SessionStore<MemoryStorage, MockAuthProvider> {
    SessionStore::new(MemoryStorage::new(), MockAuthProvider::default())
}

#[test]
fn submit_signup_success_greets_new_user() {
    let state = submit_signup(&store(), "Ann", "ann@example.com", "secret1").unwrap();
    assert!(state.authenticated);
    assert_eq!(state.display_name(), "Ann");
}

#[test]
fn submit_signup_reports_first_violated_rule() {
    assert_eq!(submit_signup(&store(), "", "a@b.c", "1"), Err("All fields are required".to_owned()));
    assert_eq!(
        submit_signup(&store(), "Ann", "a@b.c", "1"),
        Err("Password must be at least 6 characters".to_owned())
    );
}
