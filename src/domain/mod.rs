//! Domain layer - Records and the stored envelope format

pub mod envelope;
pub mod record;

pub use record::QrRecord;
