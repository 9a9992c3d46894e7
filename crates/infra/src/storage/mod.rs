//! Key-value storage adapters

pub mod file;
pub mod memory;
