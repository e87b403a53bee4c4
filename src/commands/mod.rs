//! Remote Command Wrappers
//!
//! Calls to services outside the page, organized by service.

mod contact;

pub use contact::*;
