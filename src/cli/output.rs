//! Output formatting utilities

use crate::domain::QrRecord;
use crate::error::Result;

/// Format records as an indexed table
pub fn format_record_list(records: &[QrRecord]) -> String {
    if records.is_empty() {
        return "No QR codes stored".to_string();
    }

    let mut output = String::new();
    for (index, record) in records.iter().enumerate() {
        let price = record
            .price
            .map(|p| format!("{:.2}", p))
            .unwrap_or_else(|| "-".to_string());
        output.push_str(&format!(
            "{:>3}  {}  {}  {}\n",
            index, record.identifier, price, record.code
        ));
    }
    output
}

/// Format records as a pretty JSON array
pub fn format_record_json(records: &[QrRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
