//! User and customization store

pub mod store;

pub use store::UserStore;
