use super::*;

#[test]
fn get_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get("nope"), Ok(None));
}

#[test]
fn set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "v").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("v".to_owned())));
}

#[test]
fn set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "one").unwrap();
    storage.set("k", "two").unwrap();
    assert_eq!(storage.get("k"), Ok(Some("two".to_owned())));
    assert_eq!(storage.len(), 1);
}

#[test]
fn remove_missing_key_is_ok() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.remove("nope"), Ok(()));
    assert!(storage.is_empty());
}

#[test]
fn clones_share_entries() {
    let storage = MemoryStorage::new();
    let handle = storage.clone();
    storage.set("k", "v").unwrap();
    assert_eq!(handle.get("k"), Ok(Some("v".to_owned())));
    handle.remove("k").unwrap();
    assert!(storage.is_empty());
}

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Rejected { key: "ticketapp_user".to_owned(), reason: "QuotaExceededError".to_owned() };
    assert_eq!(err.to_string(), "storage rejected write to ticketapp_user: QuotaExceededError");
    assert_eq!(StorageError::Unavailable.to_string(), "storage is unavailable");
}
