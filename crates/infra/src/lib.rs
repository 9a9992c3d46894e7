//! # RoleHop Infra
//!
//! Concrete adapters behind the core's port traits.
//!
//! In the shipped extension the [`rolehop_core::KeyValueStore`] port is
//! backed by the browser's storage APIs at the WASM boundary; this crate
//! provides the native adapters: an in-memory store for tests and the
//! popup dev harness, and a JSON-file store that gives the harness
//! durable state between runs.

pub mod storage;

pub use storage::file::FileStorage;
pub use storage::memory::MemoryStorage;
