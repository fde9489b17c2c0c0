//! Bounded per-language top-N accumulation.

use std::cmp::Ordering;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

use rustc_hash::{FxHashMap, FxHashSet};
use tagrank_codec::{LanguageCode, LanguageSet};

use crate::order::{rank_cmp, OrdinalTieBreak, TieBreak};
use crate::RankEntry;

/// Heap element ordered by ranking quality: the greatest element is the
/// best-ranked entry, so `Reverse<Ranked<T>>` in a max-heap keeps the
/// worst current entry on top for O(log k) eviction.
struct Ranked<T: TieBreak> {
    entry: RankEntry,
    _order: PhantomData<T>,
}

impl<T: TieBreak> Ranked<T> {
    fn new(entry: RankEntry) -> Self {
        Self {
            entry,
            _order: PhantomData,
        }
    }
}

impl<T: TieBreak> PartialEq for Ranked<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: TieBreak> Eq for Ranked<T> {}

impl<T: TieBreak> PartialOrd for Ranked<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: TieBreak> Ord for Ranked<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // rank_cmp's Less means "ranks earlier", so flip the operands
        // to make the better entry the greater one.
        rank_cmp::<T>(&other.entry, &self.entry)
    }
}

/// Top-N state for one language.
struct Bucket<T: TieBreak> {
    capacity: usize,
    heap: BinaryHeap<Reverse<Ranked<T>>>,
    held: FxHashSet<RankEntry>,
}

impl<T: TieBreak> Bucket<T> {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            heap: BinaryHeap::with_capacity(capacity.saturating_add(1)),
            held: FxHashSet::default(),
        }
    }

    fn add(&mut self, entry: RankEntry) -> bool {
        if self.capacity == 0 || self.held.contains(&entry) {
            return false;
        }

        if self.heap.len() < self.capacity {
            self.held.insert(entry.clone());
            self.heap.push(Reverse(Ranked::new(entry)));
            return true;
        }

        let candidate = Ranked::<T>::new(entry);
        let outranks_worst = match self.heap.peek() {
            Some(Reverse(worst)) => candidate > *worst,
            None => true,
        };
        if !outranks_worst {
            return false;
        }

        if let Some(Reverse(evicted)) = self.heap.pop() {
            self.held.remove(&evicted.entry);
        }
        self.held.insert(candidate.entry.clone());
        self.heap.push(Reverse(candidate));
        true
    }

    fn best_n(&self, n: usize) -> Vec<RankEntry> {
        let mut entries: Vec<RankEntry> = self
            .heap
            .iter()
            .map(|Reverse(ranked)| ranked.entry.clone())
            .collect();
        entries.sort_by(|a, b| rank_cmp::<T>(a, b));
        entries.truncate(n);
        entries
    }
}

/// Per-language top-N aggregator.
///
/// One bucket per requested language is created up front, so languages
/// that never receive an entry still answer `best_n` with an empty
/// sequence. `add` is the only mutation; `best_n` borrows and repeated
/// calls with no intervening `add` return identical sequences.
pub struct RankAggregator<T: TieBreak = OrdinalTieBreak> {
    buckets: FxHashMap<LanguageCode, Bucket<T>>,
}

impl RankAggregator {
    /// Aggregator with the default ordinal tie-break. `capacity` bounds
    /// each bucket; entries beyond it displace the worst current entry.
    pub fn new(languages: &LanguageSet, capacity: usize) -> Self {
        Self::with_tie_break(languages, capacity)
    }
}

impl<T: TieBreak> RankAggregator<T> {
    pub fn with_tie_break(languages: &LanguageSet, capacity: usize) -> Self {
        let buckets = languages
            .iter()
            .map(|code| (*code, Bucket::new(capacity)))
            .collect();
        Self { buckets }
    }

    /// Record one entry in its language's bucket. O(log capacity).
    ///
    /// Entries whose language has no bucket are dropped; the scan
    /// predicate keeps them out of a well-formed run, so any drop here
    /// is worth a debug event.
    pub fn add(&mut self, entry: RankEntry) {
        match self.buckets.get_mut(&entry.language) {
            Some(bucket) => {
                bucket.add(entry);
            }
            None => {
                tracing::debug!(
                    language = %entry.language,
                    hashtag = %entry.hashtag,
                    "dropping entry for a language outside the requested set"
                );
            }
        }
    }

    /// Ranked prefix for one language: at most `n` entries, best first.
    ///
    /// Idempotent and non-mutating. A language without a bucket (never
    /// requested) yields an empty sequence, as does a requested
    /// language that saw no entries.
    pub fn best_n(&self, language: &LanguageCode, n: usize) -> Vec<RankEntry> {
        self.buckets
            .get(language)
            .map(|bucket| bucket.best_n(n))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn entry(code: &str, hashtag: &str, count: u64) -> RankEntry {
        RankEntry {
            language: lang(code),
            hashtag: hashtag.to_string(),
            count,
        }
    }

    fn aggregator(csv: &str, capacity: usize) -> RankAggregator {
        RankAggregator::new(&LanguageSet::from_csv(csv).unwrap(), capacity)
    }

    #[test]
    fn best_n_orders_by_count_then_hashtag() {
        let mut agg = aggregator("en", 10);
        agg.add(entry("en", "#a", 5));
        agg.add(entry("en", "#b", 5));
        agg.add(entry("en", "#c", 3));

        let top2 = agg.best_n(&lang("en"), 2);
        assert_eq!(top2.len(), 2);
        assert_eq!(top2[0].hashtag, "#a");
        assert_eq!(top2[1].hashtag, "#b");
        assert!(top2.iter().all(|e| e.hashtag != "#c"));
    }

    #[test]
    fn best_n_is_idempotent() {
        let mut agg = aggregator("en", 10);
        agg.add(entry("en", "#x", 7));
        agg.add(entry("en", "#y", 7));
        agg.add(entry("en", "#z", 1));

        let first = agg.best_n(&lang("en"), 3);
        let second = agg.best_n(&lang("en"), 3);
        assert_eq!(first, second);
    }

    #[test]
    fn fewer_entries_than_requested_returns_all_without_padding() {
        let mut agg = aggregator("en", 10);
        agg.add(entry("en", "#only", 1));

        assert_eq!(agg.best_n(&lang("en"), 5).len(), 1);
        assert!(agg.best_n(&lang("en"), 0).is_empty());
    }

    #[test]
    fn empty_bucket_returns_empty_sequence() {
        let agg = aggregator("en,es", 10);
        assert!(agg.best_n(&lang("es"), 3).is_empty());
    }

    #[test]
    fn exact_duplicates_are_recorded_once() {
        let mut agg = aggregator("en", 10);
        agg.add(entry("en", "#dup", 4));
        agg.add(entry("en", "#dup", 4));
        agg.add(entry("en", "#dup", 3));

        let all = agg.best_n(&lang("en"), 10);
        // Same hashtag with a different count is a distinct entry.
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn capacity_evicts_the_worst_entry() {
        let mut agg = aggregator("en", 2);
        agg.add(entry("en", "#low", 1));
        agg.add(entry("en", "#mid", 5));
        agg.add(entry("en", "#high", 9));

        let top = agg.best_n(&lang("en"), 10);
        let tags: Vec<_> = top.iter().map(|e| e.hashtag.as_str()).collect();
        assert_eq!(tags, vec!["#high", "#mid"]);
    }

    #[test]
    fn worse_entries_never_displace_held_ones() {
        let mut agg = aggregator("en", 2);
        agg.add(entry("en", "#a", 9));
        agg.add(entry("en", "#b", 8));
        agg.add(entry("en", "#late", 1));

        let tags: Vec<_> = agg
            .best_n(&lang("en"), 10)
            .into_iter()
            .map(|e| e.hashtag)
            .collect();
        assert_eq!(tags, vec!["#a", "#b"]);
    }

    #[test]
    fn tie_on_count_at_capacity_keeps_hashtag_ascending_winner() {
        let mut agg = aggregator("en", 1);
        agg.add(entry("en", "#b", 5));
        agg.add(entry("en", "#a", 5));

        // "#a" outranks "#b" on the tie-break and takes the single slot.
        let top = agg.best_n(&lang("en"), 1);
        assert_eq!(top[0].hashtag, "#a");
    }

    #[test]
    fn entries_for_unrequested_languages_are_dropped() {
        let mut agg = aggregator("en", 10);
        agg.add(entry("fr", "#nope", 42));
        assert!(agg.best_n(&lang("fr"), 10).is_empty());
        assert!(agg.best_n(&lang("en"), 10).is_empty());
    }

    #[test]
    fn languages_are_bucketed_independently() {
        let mut agg = aggregator("en,es", 10);
        agg.add(entry("en", "#en1", 3));
        agg.add(entry("es", "#es1", 8));
        agg.add(entry("es", "#es2", 2));

        assert_eq!(agg.best_n(&lang("en"), 10).len(), 1);
        assert_eq!(agg.best_n(&lang("es"), 10).len(), 2);
        assert_eq!(agg.best_n(&lang("es"), 10)[0].hashtag, "#es1");
    }

    #[test]
    fn zero_capacity_records_nothing() {
        let mut agg = aggregator("en", 0);
        agg.add(entry("en", "#x", 5));
        assert!(agg.best_n(&lang("en"), 5).is_empty());
    }
}
