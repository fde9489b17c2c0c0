//! Row-key codec and shared domain types.
//!
//! A rank-table row key is the fixed-width big-endian encoding of a
//! millisecond timestamp followed by a two-byte language code:
//!
//! ```text
//! [ timestamp: 8 bytes, big-endian ][ language: 2 bytes ]
//! ```
//!
//! Big-endian keeps byte-lexicographic order equal to numeric timestamp
//! order regardless of the language suffix, so a `[start_key(s),
//! end_key(e))` range scan returns exactly the rows with embedded
//! timestamp in `[s, e)`.

use std::fmt;

use tagrank_result::{Error, Result};

pub mod lang;

pub use lang::{LanguageCode, LanguageSet};

/// Millisecond timestamp as stored in row keys.
pub type TimestampMs = u64;

/// Width of the encoded timestamp prefix in bytes.
pub const TIMESTAMP_WIDTH: usize = 8;

/// Width of the language suffix in bytes.
pub const LANG_WIDTH: usize = lang::LANG_WIDTH;

/// Total width of a well-formed row key.
pub const ROW_KEY_WIDTH: usize = TIMESTAMP_WIDTH + LANG_WIDTH;

/// Half-open time window `[start_ts, end_ts)` in milliseconds.
///
/// `start_ts <= end_ts` is not enforced here; an inverted window simply
/// scans nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeRange {
    pub start_ts: TimestampMs,
    pub end_ts: TimestampMs,
}

impl TimeRange {
    pub fn new(start_ts: TimestampMs, end_ts: TimestampMs) -> Self {
        Self { start_ts, end_ts }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start_ts, self.end_ts)
    }
}

/// Encode a timestamp as its fixed-width, order-preserving prefix.
#[inline]
pub fn encode_ts(ts: TimestampMs) -> [u8; TIMESTAMP_WIDTH] {
    ts.to_be_bytes()
}

/// Inclusive scan lower bound: every row with embedded timestamp
/// `>= ts` sorts at or after this key.
#[inline]
pub fn start_key(ts: TimestampMs) -> [u8; TIMESTAMP_WIDTH] {
    encode_ts(ts)
}

/// Exclusive scan upper bound: rows with embedded timestamp `< ts` sort
/// strictly before this key, rows with timestamp `== ts` at or after it.
///
/// The store's end bound is exclusive, so `encode(ts)` itself is the
/// correct boundary; combined with [`start_key`] the scan covers exactly
/// `[start_ts, end_ts)`.
#[inline]
pub fn end_key(ts: TimestampMs) -> [u8; TIMESTAMP_WIDTH] {
    encode_ts(ts)
}

/// Compose a full row key from a timestamp and a language code.
pub fn row_key(ts: TimestampMs, language: &LanguageCode) -> [u8; ROW_KEY_WIDTH] {
    let mut key = [0u8; ROW_KEY_WIDTH];
    key[..TIMESTAMP_WIDTH].copy_from_slice(&encode_ts(ts));
    key[TIMESTAMP_WIDTH..].copy_from_slice(language.as_bytes());
    key
}

/// Extract the language code embedded in a row key's trailing bytes.
///
/// The suffix is taken as stored, without case normalization; a key that
/// is too short or carries a non-ASCII suffix is a deployed-schema
/// mismatch.
pub fn language_of(key: &[u8]) -> Result<LanguageCode> {
    if key.len() != ROW_KEY_WIDTH {
        return Err(Error::SchemaAccess(format!(
            "row key must be {ROW_KEY_WIDTH} bytes, got {}",
            key.len()
        )));
    }
    LanguageCode::from_key_suffix(&key[TIMESTAMP_WIDTH..])
}

/// Extract the timestamp embedded in a row key's prefix.
pub fn timestamp_of(key: &[u8]) -> Result<TimestampMs> {
    let prefix: [u8; TIMESTAMP_WIDTH] = key
        .get(..TIMESTAMP_WIDTH)
        .and_then(|b| b.try_into().ok())
        .ok_or_else(|| {
            Error::SchemaAccess(format!(
                "row key too short for a {TIMESTAMP_WIDTH}-byte timestamp prefix"
            ))
        })?;
    Ok(TimestampMs::from_be_bytes(prefix))
}
