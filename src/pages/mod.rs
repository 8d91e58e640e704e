//! Route-level page components.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod signup;
pub mod tickets;
