//! Key/value persistence for the System 64 progression engine.
//!
//! The engine persists a handful of scalars and one JSON document, writing
//! through after every mutation. This crate provides:
//!
//! - [`keys`] -- the fixed [`StoreKey`] set and its defaults table
//! - [`store`] -- the [`KeyValueStore`] port, [`TypedStore`] helpers and
//!   the in-memory [`MemoryStore`]
//! - [`file_store`] -- [`JsonFileStore`], one JSON object on disk
//! - [`error`] -- [`DbError`]

pub mod error;
pub mod file_store;
pub mod keys;
pub mod store;

pub use error::DbError;
pub use file_store::JsonFileStore;
pub use keys::StoreKey;
pub use store::{KeyValueStore, MemoryStore, TypedStore};
