//! Ranking entries, row decoding, and bounded top-N aggregation.

use std::fmt;

use tagrank_codec::LanguageCode;

pub mod aggregate;
pub mod decode;
pub mod order;

pub use aggregate::RankAggregator;
pub use decode::decode_row;
pub use order::{rank_cmp, OrdinalTieBreak, TieBreak};

/// One ranking fact: a hashtag was used `count` times in `language`
/// within some row's time bucket.
///
/// Two entries are equal iff all three fields match; the aggregator
/// holds distinct entries only.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RankEntry {
    pub language: LanguageCode,
    pub hashtag: String,
    pub count: u64,
}

impl fmt::Display for RankEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.language, self.hashtag, self.count)
    }
}
