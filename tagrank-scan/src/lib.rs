//! Storage-agnostic scan surface.
//!
//! This crate hosts what a store needs to execute a window query: the
//! byte-bounded key range and the row-key predicate restricting results
//! to the requested languages. Stores evaluate the predicate
//! server-side; nothing here touches a store.
#![forbid(unsafe_code)]

use tagrank_codec::{end_key, start_key, LanguageSet, TimeRange};

pub mod expr;

pub use expr::{KeyFilter, KeyOp, KeyPredicate};

/// Descriptor for one range scan over the rank table.
///
/// `lower` is inclusive, `upper` exclusive; rows outside
/// `[lower, upper)` or rejected by `key_filter` are never yielded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSpec {
    pub lower: Vec<u8>,
    pub upper: Vec<u8>,
    pub key_filter: KeyPredicate,
}

/// Build the scan descriptor for a time window and language set.
///
/// The window maps to `[start_key(start_ts), end_key(end_ts))` and the
/// languages to an anchored alternation over their two-byte codes; a
/// single-language set degenerates to one alternative. Language codes
/// are already validated at [`LanguageSet`] construction, before any
/// store contact.
pub fn plan_scan(window: &TimeRange, languages: &LanguageSet) -> ScanSpec {
    let filters = languages
        .iter()
        .map(|code| KeyFilter {
            op: KeyOp::EndsWith(code.as_bytes().to_vec()),
        })
        .collect();

    ScanSpec {
        lower: start_key(window.start_ts).to_vec(),
        upper: end_key(window.end_ts).to_vec(),
        key_filter: KeyPredicate::any_of(filters),
    }
}
