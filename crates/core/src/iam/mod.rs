//! IAM login registry

pub mod registry;

pub use registry::IamLoginRegistry;
