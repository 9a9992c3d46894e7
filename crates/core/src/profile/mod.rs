//! Application-profile persistence and resolution

pub mod resolver;
pub mod store;

pub use resolver::customize;
pub use store::ProfileStore;
