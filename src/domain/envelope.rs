//! Stored envelope format.
//!
//! The collection is persisted as a single JSON object:
//!
//! ```json
//! {"version":1,"qrCodes":[{"identifier":"A","price":1.5,"code":"data:..."}]}
//! ```
//!
//! Blobs without a `version` field predate the tag and are read as version 0.
//! Their records come in two shapes, `{link, qrCode}` and
//! `{kod, price, qrCode}`, and are migrated into [`QrRecord`] on decode.
//!
//! This module is I/O-free.

use crate::domain::QrRecord;
use crate::error::{QrStashError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version written by [`encode`]
pub const CURRENT_VERSION: u64 = 1;

/// Version assumed for blobs without a `version` field
pub const LEGACY_VERSION: u64 = 0;

const VERSION_FIELD: &str = "version";
const RECORDS_FIELD: &str = "qrCodes";

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    version: u64,
    #[serde(rename = "qrCodes")]
    records: &'a [QrRecord],
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LinkedRecordV0 {
    link: String,
    #[serde(rename = "qrCode")]
    qr_code: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PricedRecordV0 {
    kod: String,
    price: f64,
    #[serde(rename = "qrCode")]
    qr_code: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordV0 {
    Priced(PricedRecordV0),
    Linked(LinkedRecordV0),
}

impl From<RecordV0> for QrRecord {
    fn from(legacy: RecordV0) -> Self {
        match legacy {
            RecordV0::Priced(r) => QrRecord {
                identifier: r.kod,
                price: Some(r.price),
                code: r.qr_code,
            },
            RecordV0::Linked(r) => QrRecord {
                identifier: r.link,
                price: None,
                code: r.qr_code,
            },
        }
    }
}

/// Serialize the collection into its stored form (always the current version)
pub fn encode(records: &[QrRecord]) -> Result<String> {
    for record in records {
        record.validate()?;
    }

    let envelope = EnvelopeRef {
        version: CURRENT_VERSION,
        records,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parse a stored blob read under `key`.
///
/// Text that is not JSON at all fails with [`QrStashError::MalformedStorage`].
/// A JSON value that is not an object, or whose `qrCodes` field is missing,
/// null or not an array, decodes to an empty collection. Individual records
/// must match a known shape for their version.
pub fn decode(key: &str, raw: &str) -> Result<Vec<QrRecord>> {
    let value: Value =
        serde_json::from_str(raw).map_err(|source| QrStashError::MalformedStorage {
            key: key.to_string(),
            source,
        })?;

    let Value::Object(mut envelope) = value else {
        tracing::warn!(key, "stored value is not an object, treating as empty");
        return Ok(Vec::new());
    };

    let version = match envelope.get(VERSION_FIELD) {
        None => LEGACY_VERSION,
        Some(v) => v
            .as_u64()
            .ok_or_else(|| QrStashError::UnsupportedVersion(v.to_string()))?,
    };
    if version > CURRENT_VERSION {
        return Err(QrStashError::UnsupportedVersion(version.to_string()));
    }

    let items = match envelope.remove(RECORDS_FIELD) {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            tracing::warn!(key, "'{}' is not an array, treating as empty", RECORDS_FIELD);
            Vec::new()
        }
    };

    let records = items
        .into_iter()
        .enumerate()
        .map(|(index, item)| decode_record(version, index, item))
        .collect::<Result<Vec<_>>>()?;

    if version == LEGACY_VERSION && !records.is_empty() {
        tracing::info!(
            key,
            count = records.len(),
            "migrating untagged records to version {}",
            CURRENT_VERSION
        );
    }

    Ok(records)
}

fn decode_record(version: u64, index: usize, item: Value) -> Result<QrRecord> {
    let malformed = |reason: String| QrStashError::MalformedRecord { index, reason };

    if version == LEGACY_VERSION {
        serde_json::from_value::<RecordV0>(item)
            .map(QrRecord::from)
            .map_err(|_| {
                malformed("expected {link, qrCode} or {kod, price, qrCode}".to_string())
            })
    } else {
        serde_json::from_value::<QrRecord>(item).map_err(|e| malformed(e.to_string()))
    }
}
