//! Ranking order and the pluggable hashtag tie-break.
//!
//! Locale-sensitive collation is not reproducible across environments,
//! so the comparison strategy is a type parameter and the default is a
//! plain byte-wise comparison.

use std::cmp::Ordering;

use crate::RankEntry;

/// Hashtag comparison used to break count ties.
pub trait TieBreak {
    fn cmp_hashtags(a: &str, b: &str) -> Ordering;
}

/// Deterministic byte-wise (ordinal) comparison. Default everywhere.
#[derive(Debug, Clone, Copy, Default)]
pub struct OrdinalTieBreak;

impl TieBreak for OrdinalTieBreak {
    #[inline]
    fn cmp_hashtags(a: &str, b: &str) -> Ordering {
        a.cmp(b)
    }
}

/// Total ranking order: count descending, then hashtag ascending under
/// `T`, then language. `Ordering::Less` means "ranks earlier".
pub fn rank_cmp<T: TieBreak>(a: &RankEntry, b: &RankEntry) -> Ordering {
    b.count
        .cmp(&a.count)
        .then_with(|| T::cmp_hashtags(&a.hashtag, &b.hashtag))
        .then_with(|| a.language.cmp(&b.language))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagrank_codec::LanguageCode;

    fn entry(hashtag: &str, count: u64) -> RankEntry {
        RankEntry {
            language: LanguageCode::new("en").unwrap(),
            hashtag: hashtag.to_string(),
            count,
        }
    }

    #[test]
    fn higher_count_ranks_earlier() {
        assert_eq!(
            rank_cmp::<OrdinalTieBreak>(&entry("#b", 5), &entry("#a", 3)),
            Ordering::Less
        );
    }

    #[test]
    fn count_ties_break_on_hashtag_ascending() {
        assert_eq!(
            rank_cmp::<OrdinalTieBreak>(&entry("#a", 5), &entry("#b", 5)),
            Ordering::Less
        );
        assert_eq!(
            rank_cmp::<OrdinalTieBreak>(&entry("#x", 5), &entry("#x", 5)),
            Ordering::Equal
        );
    }

    #[test]
    fn ordinal_order_is_byte_wise() {
        // Uppercase sorts before lowercase in byte order; a collation
        // would typically interleave them.
        assert_eq!(OrdinalTieBreak::cmp_hashtags("#Z", "#a"), Ordering::Less);
    }
}
