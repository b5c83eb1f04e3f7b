//! Application layer - Use cases and orchestration

pub mod collection;
pub mod init;
pub mod manage_config;
pub mod store;

pub use collection::CollectionService;
pub use manage_config::ConfigService;
pub use store::QrStore;
