//! # RoleHop Domain
//!
//! Business domain types and models for RoleHop.
//!
//! This crate contains:
//! - Domain data types (User, Customization, Settings, ApplicationProfile)
//! - Domain error types and Result definitions
//! - Default records and the partial-record merge machinery
//! - Domain constants (application kinds, URL fragments, key templates)
//!
//! ## Architecture
//! - No dependencies on other RoleHop crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use errors::*;
pub use types::*;
