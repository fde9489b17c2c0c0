//! Decode raw store rows into ranking entries.

use std::str;

use tagrank_codec::language_of;
use tagrank_result::{Error, Result};
use tagrank_store::schema::{CF_COUNTS, CF_HASHTAGS, COUNT_WIDTH, SLOT_COLUMNS};
use tagrank_store::StoreRow;

use crate::RankEntry;

/// Extract every populated slot of one scanned row.
///
/// A slot contributes an entry only when both its hashtag and count
/// cells are present; a half-populated slot is skipped. Decoding is
/// pure and order-independent across slots, so a row yields zero to
/// three entries, all tagged with the language embedded in the key
/// suffix.
///
/// Malformed cells (count of the wrong width, non-UTF-8 hashtag, short
/// key) are deployed-schema mismatches and abort the run.
pub fn decode_row(row: &StoreRow) -> Result<Vec<RankEntry>> {
    let language = language_of(row.key())?;

    let mut entries = Vec::with_capacity(SLOT_COLUMNS.len());
    for slot in SLOT_COLUMNS {
        let (Some(hashtag_raw), Some(count_raw)) = (
            row.value(CF_HASHTAGS, slot.hashtag),
            row.value(CF_COUNTS, slot.count),
        ) else {
            continue;
        };

        let hashtag = str::from_utf8(hashtag_raw).map_err(|_| {
            Error::SchemaAccess(format!("hashtag cell {} is not UTF-8", slot.hashtag))
        })?;
        let count = decode_count(count_raw, slot.count)?;

        entries.push(RankEntry {
            language,
            hashtag: hashtag.to_string(),
            count,
        });
    }
    Ok(entries)
}

fn decode_count(bytes: &[u8], qualifier: &str) -> Result<u64> {
    let fixed: [u8; COUNT_WIDTH] = bytes.try_into().map_err(|_| {
        Error::SchemaAccess(format!(
            "count cell {qualifier} must be {COUNT_WIDTH} bytes, got {}",
            bytes.len()
        ))
    })?;
    Ok(u64::from(u32::from_be_bytes(fixed)))
}
