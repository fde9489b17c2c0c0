//! Rank-table schema constants.
//!
//! The deployed table stores up to three (hashtag, count) pairs per row
//! under two parallel column families. The slot-to-qualifier mapping is
//! a compile-time table, so a mismatch with the deployed schema shows
//! up as a decode error rather than a lookup surprise.

/// Column family holding hashtag text cells (UTF-8).
pub const CF_HASHTAGS: &str = "hashtags";

/// Column family holding count cells (4-byte big-endian).
pub const CF_COUNTS: &str = "counts";

/// Number of (hashtag, count) slots per row.
pub const SLOT_COUNT: usize = 3;

/// Width of an encoded count cell in bytes.
pub const COUNT_WIDTH: usize = 4;

/// Column qualifiers for one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotColumns {
    pub hashtag: &'static str,
    pub count: &'static str,
}

/// Fixed slot-index → qualifier mapping, slots 1..=3 in order.
pub const SLOT_COLUMNS: [SlotColumns; SLOT_COUNT] = [
    SlotColumns {
        hashtag: "hashtag1",
        count: "count1",
    },
    SlotColumns {
        hashtag: "hashtag2",
        count: "count2",
    },
    SlotColumns {
        hashtag: "hashtag3",
        count: "count3",
    },
];

/// Encode a count for storage.
#[inline]
pub fn encode_count(count: u32) -> [u8; COUNT_WIDTH] {
    count.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_table_is_indexed_one_through_three() {
        for (i, slot) in SLOT_COLUMNS.iter().enumerate() {
            let n = i + 1;
            assert_eq!(slot.hashtag, format!("hashtag{n}"));
            assert_eq!(slot.count, format!("count{n}"));
        }
    }

    #[test]
    fn counts_encode_big_endian() {
        assert_eq!(encode_count(1), [0, 0, 0, 1]);
        assert_eq!(encode_count(0x0102_0304), [1, 2, 3, 4]);
    }
}
