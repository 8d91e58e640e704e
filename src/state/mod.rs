//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Reactive state mirrors what is persisted so components can render without
//! touching storage. Persistence stays the session store's job.

pub mod auth;
