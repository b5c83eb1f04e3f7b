//! QR record value type

use crate::error::{QrStashError, Result};
use serde::{Deserialize, Serialize};

/// One stored QR code entry.
///
/// Records have no identity of their own; callers address them by position
/// in the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QrRecord {
    /// What the code was generated for (a link, a product code, ...)
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    /// Generated code string, typically an image data URL
    pub code: String,
}

impl QrRecord {
    pub fn new(identifier: impl Into<String>, code: impl Into<String>) -> Self {
        QrRecord {
            identifier: identifier.into(),
            price: None,
            code: code.into(),
        }
    }

    /// Attach a price to the record
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    /// Reject values JSON cannot carry. serde_json writes NaN and infinities
    /// as `null`, which would read back as "no price".
    pub fn validate(&self) -> Result<()> {
        match self.price {
            Some(price) if !price.is_finite() => Err(QrStashError::InvalidPrice(price)),
            _ => Ok(()),
        }
    }
}
