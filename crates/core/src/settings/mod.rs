//! Extension-wide settings store

pub mod store;

pub use store::SettingsStore;
