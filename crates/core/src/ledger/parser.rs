//! Record parser: raw file text to ordered ledger rows.

use super::row::LedgerRow;

/// Parses raw ledger text into rows.
///
/// The text is trimmed at both ends, then split on line breaks (`\n` or
/// `\r\n`) and each line on commas. Fields are not trimmed. Malformed lines
/// are kept with whatever fields they have; nothing here fails.
#[must_use]
pub fn parse_records(text: &str) -> Vec<LedgerRow> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    text.lines()
        .map(|line| LedgerRow::from_fields(line.split(',').map(str::to_string).collect()))
        .collect()
}
