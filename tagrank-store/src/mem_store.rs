//! In-memory rank store used for tests and the demo binary.

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use tagrank_result::{Error, Result};
use tagrank_scan::ScanSpec;

use crate::row::StoreRow;
use crate::{RankStore, RowIter};

/// Sorted in-memory rank table.
///
/// Rows live in a `BTreeMap` keyed by raw row-key bytes, so range scans
/// are the map's own `[lower, upper)` range walk. Scans snapshot the
/// matching rows under the read lock; mutations after a scan starts are
/// not reflected in that scan's results.
pub struct MemStore {
    rows: RwLock<BTreeMap<Vec<u8>, StoreRow>>,
    open: AtomicBool,
}

impl Default for MemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStore {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            open: AtomicBool::new(false),
        }
    }

    /// Insert or replace one row, keyed by its own row key. Fixture and
    /// ingest-side helper; the query core never writes.
    pub fn put_row(&self, row: StoreRow) -> Result<()> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| Error::Internal("row map write lock poisoned".to_string()))?;
        rows.insert(row.key().to_vec(), row);
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.rows.read().map(|rows| rows.len()).unwrap_or(0)
    }
}

impl RankStore for MemStore {
    fn open(&self) -> Result<()> {
        self.open.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    fn scan(&self, spec: &ScanSpec) -> Result<RowIter<'_>> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(Error::StoreConnection(
                "scan attempted on a closed store".to_string(),
            ));
        }

        // An inverted window scans nothing rather than panicking in
        // BTreeMap::range.
        if spec.lower >= spec.upper {
            return Ok(Box::new(std::iter::empty()));
        }

        let rows = self
            .rows
            .read()
            .map_err(|_| Error::Internal("row map read lock poisoned".to_string()))?;

        let snapshot: Vec<StoreRow> = rows
            .range::<[u8], _>((
                Included(spec.lower.as_slice()),
                Excluded(spec.upper.as_slice()),
            ))
            .filter(|(key, _)| spec.key_filter.matches(key))
            .map(|(_, row)| row.clone())
            .collect();

        tracing::debug!(
            matched = snapshot.len(),
            total = rows.len(),
            "mem store scan"
        );

        Ok(Box::new(snapshot.into_iter().map(Ok)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tagrank_codec::{row_key, LanguageCode, LanguageSet, TimeRange};
    use tagrank_scan::plan_scan;

    fn lang(code: &str) -> LanguageCode {
        LanguageCode::new(code).unwrap()
    }

    fn collect_keys(store: &MemStore, spec: &ScanSpec) -> Vec<Vec<u8>> {
        store
            .scan(spec)
            .expect("scan")
            .map(|row| row.expect("row").key().to_vec())
            .collect()
    }

    #[test]
    fn scan_respects_window_bounds_and_predicate() {
        tagrank_test_utils::init_tracing_for_tests();
        let store = MemStore::new();
        for ts in [10u64, 20, 30, 40] {
            for code in ["en", "fr"] {
                let key = row_key(ts, &lang(code));
                store
                    .put_row(StoreRow::new(key.to_vec()).with_slot(1, "#t", 1))
                    .expect("put");
            }
        }
        store.open().expect("open");

        let spec = plan_scan(
            &TimeRange::new(20, 40),
            &LanguageSet::from_csv("en").unwrap(),
        );
        let keys = collect_keys(&store, &spec);

        // 20 and 30 for `en`: 40 is excluded by the end bound, `fr` by
        // the predicate.
        assert_eq!(
            keys,
            vec![
                row_key(20, &lang("en")).to_vec(),
                row_key(30, &lang("en")).to_vec(),
            ]
        );
    }

    #[test]
    fn rows_come_back_in_key_order() {
        let store = MemStore::new();
        for ts in [30u64, 10, 20] {
            store
                .put_row(StoreRow::new(row_key(ts, &lang("en")).to_vec()))
                .expect("put");
        }
        store.open().expect("open");

        let spec = plan_scan(
            &TimeRange::new(0, 100),
            &LanguageSet::from_csv("en").unwrap(),
        );
        let keys = collect_keys(&store, &spec);
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted);
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn inverted_window_scans_nothing() {
        let store = MemStore::new();
        store
            .put_row(StoreRow::new(row_key(50, &lang("en")).to_vec()))
            .expect("put");
        store.open().expect("open");

        let spec = plan_scan(
            &TimeRange::new(100, 0),
            &LanguageSet::from_csv("en").unwrap(),
        );
        assert!(collect_keys(&store, &spec).is_empty());
    }

    #[test]
    fn scan_on_closed_store_is_a_connection_error() {
        let store = MemStore::new();
        let spec = plan_scan(
            &TimeRange::new(0, 10),
            &LanguageSet::from_csv("en").unwrap(),
        );
        assert!(matches!(
            store.scan(&spec).err(),
            Some(Error::StoreConnection(_))
        ));
    }

    #[test]
    fn connection_guard_reopens_and_closes_mem_store() {
        let store = MemStore::new();
        {
            let conn = crate::connect(&store).expect("connect");
            let spec = plan_scan(
                &TimeRange::new(0, 10),
                &LanguageSet::from_csv("en").unwrap(),
            );
            assert!(conn.scan(&spec).is_ok());
        }
        // Guard dropped: the store is closed again.
        let spec = plan_scan(
            &TimeRange::new(0, 10),
            &LanguageSet::from_csv("en").unwrap(),
        );
        assert!(store.scan(&spec).is_err());
    }
}
