//! Session token and profile persistence.
//!
//! DESIGN
//! ======
//! [`SessionStore`] is generic over its storage and auth provider. The app
//! itself runs one concrete flavor, built by [`open`]: browser `localStorage`
//! when available, otherwise a per-thread in-memory map.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod config;
pub mod store;
pub mod token;

pub use config::SessionConfig;
pub use store::{SessionStore, validate_signup};
pub use token::SessionToken;

use crate::auth::MockAuthProvider;
use crate::storage::{KeyValueStore, MemoryStorage};

/// Storage flavor chosen at startup.
pub type AppStorage = Box<dyn KeyValueStore>;

/// The store the pages use.
pub type AppSessionStore = SessionStore<AppStorage, MockAuthProvider>;

thread_local! {
    static FALLBACK: MemoryStorage = MemoryStorage::new();
}

/// Open the app's session store.
///
/// Cheap: the store holds a storage handle and config, no session state of
/// its own, so pages open one per event.
pub fn open() -> AppSessionStore {
    SessionStore::new(app_storage(), MockAuthProvider::default()).with_config(SessionConfig::from_build_env())
}

fn app_storage() -> AppStorage {
    #[cfg(feature = "csr")]
    {
        match crate::storage::BrowserStorage::local() {
            Ok(storage) => return Box::new(storage),
            Err(e) => log::warn!("falling back to in-memory session storage: {e}"),
        }
    }
    Box::new(FALLBACK.with(MemoryStorage::clone))
}
