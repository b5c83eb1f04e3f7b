//! qrstash - Persisted QR code collection
//!
//! Keeps an ordered list of QR code records in memory and mirrors every
//! change to a key-value storage backend: a directory of files for the CLI,
//! or the browser's `localStorage` when built for wasm32.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

#[cfg(test)]
pub(crate) mod testing;

pub use application::QrStore;
pub use domain::QrRecord;
pub use error::QrStashError;
pub use infrastructure::{FileStorage, KeyValueStorage, MemoryStorage};
