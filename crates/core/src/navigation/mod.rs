//! Navigation: URL construction, session labels, and the orchestrator

pub mod label;
pub mod ports;
pub mod service;
pub mod url;

pub use service::NavigationService;
