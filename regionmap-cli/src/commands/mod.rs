//! CLI command implementations.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (path, init)
//! - [`inspect`] - Read-only reports (bbox, limits, widest, lookup)
//! - [`patch`] - Master file updates (patch, merge)
//! - [`transform`] - File conversions (convert, unwrap, centers)

pub mod common;
pub mod config;
pub mod inspect;
pub mod patch;
pub mod transform;
