//! chromesweep — prunes Chrome's local browsing history older than a retention window.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod cleaner;
pub mod database;
pub mod platform;
pub mod types;
