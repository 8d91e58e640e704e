//! Reusable UI components shared by pages.

pub mod protected;
pub mod session_header;
