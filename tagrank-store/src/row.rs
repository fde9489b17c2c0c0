//! Raw rows as returned by a scan.

use rustc_hash::FxHashMap;

use crate::schema::{self, SLOT_COLUMNS, SLOT_COUNT};

/// One raw store row: the full binary key plus its cells, addressed by
/// (column family, qualifier). Values are opaque bytes; decoding them
/// is the ranking layer's business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreRow {
    key: Vec<u8>,
    cells: FxHashMap<String, FxHashMap<String, Vec<u8>>>,
}

impl StoreRow {
    pub fn new(key: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            cells: FxHashMap::default(),
        }
    }

    /// Attach a cell. Builder-style, used by fixtures and ingest-side
    /// tooling; the query core only ever reads rows.
    pub fn with_cell(
        mut self,
        family: &str,
        qualifier: &str,
        value: impl Into<Vec<u8>>,
    ) -> Self {
        self.cells
            .entry(family.to_string())
            .or_default()
            .insert(qualifier.to_string(), value.into());
        self
    }

    /// Attach one populated slot (1-based index) with both its hashtag
    /// and count cells.
    pub fn with_slot(self, slot: usize, hashtag: &str, count: u32) -> Self {
        assert!(
            (1..=SLOT_COUNT).contains(&slot),
            "slot index must be in 1..={SLOT_COUNT}"
        );
        let cols = SLOT_COLUMNS[slot - 1];
        self.with_cell(schema::CF_HASHTAGS, cols.hashtag, hashtag.as_bytes())
            .with_cell(schema::CF_COUNTS, cols.count, schema::encode_count(count))
    }

    #[inline]
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    /// Look up a cell value. `None` means the cell is absent, which for
    /// slot columns means "skip this slot".
    pub fn value(&self, family: &str, qualifier: &str) -> Option<&[u8]> {
        self.cells
            .get(family)
            .and_then(|cols| cols.get(qualifier))
            .map(|v| v.as_slice())
    }

    /// True when the row carries no cells at all.
    pub fn is_empty(&self) -> bool {
        self.cells.values().all(|cols| cols.is_empty())
    }
}
