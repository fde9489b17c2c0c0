//! Rank-table store surface.
//!
//! [`RankStore`] is the seam between the query core and whatever holds
//! the data; the store owns range-scan mechanics and evaluates the
//! row-key predicate server-side. [`MemStore`] is the in-memory
//! implementation used for tests and the demo binary.
//!
//! Connections are scoped: [`connect`] returns a guard that releases
//! the store on drop, so every exit path (success, scan fault, sink
//! failure) closes exactly once.

use tagrank_result::Result;
use tagrank_scan::ScanSpec;

pub mod mem_store;
pub mod row;
pub mod schema;

pub use mem_store::MemStore;
pub use row::StoreRow;

/// Blocking row iterator returned by a scan. Each `next()` suspends the
/// caller until the store yields the next row or signals end-of-scan.
pub type RowIter<'a> = Box<dyn Iterator<Item = Result<StoreRow>> + 'a>;

/// Read-only client for the rank table.
pub trait RankStore: Send + Sync {
    /// Open the store for one run. Failures are
    /// [`Error::StoreConnection`](tagrank_result::Error::StoreConnection).
    fn open(&self) -> Result<()>;

    /// Release the store. Must be idempotent.
    fn close(&self);

    /// Execute a range scan. Rows outside `[spec.lower, spec.upper)` or
    /// rejected by `spec.key_filter` are never yielded; mid-iteration
    /// faults surface as
    /// [`Error::ScanIo`](tagrank_result::Error::ScanIo) items.
    fn scan(&self, spec: &ScanSpec) -> Result<RowIter<'_>>;
}

/// Scoped connection to a [`RankStore`], released on drop.
pub struct Connection<'s, S: RankStore + ?Sized> {
    store: &'s S,
}

impl<'s, S: RankStore + ?Sized> Connection<'s, S> {
    pub fn scan(&self, spec: &ScanSpec) -> Result<RowIter<'_>> {
        self.store.scan(spec)
    }
}

impl<'s, S: RankStore + ?Sized> Drop for Connection<'s, S> {
    fn drop(&mut self) {
        self.store.close();
    }
}

/// Acquire a scoped connection.
pub fn connect<S: RankStore + ?Sized>(store: &S) -> Result<Connection<'_, S>> {
    store.open()?;
    Ok(Connection { store })
}
