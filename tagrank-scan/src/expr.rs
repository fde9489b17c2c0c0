//! Owned predicate AST over encoded row-key bytes.
//!
//! The predicate "key ends in one of the requested language codes" is
//! structural rather than a regex alternation: an `AnyOf` of
//! end-anchored alternatives, matched on raw bytes with no pattern
//! compilation.

/// Matching operator against a full encoded row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOp {
    /// True when the key's trailing bytes equal the operand.
    EndsWith(Vec<u8>),
}

/// Single predicate against a row key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFilter {
    pub op: KeyOp,
}

impl KeyFilter {
    #[inline]
    pub fn matches(&self, key: &[u8]) -> bool {
        match &self.op {
            KeyOp::EndsWith(suffix) => key.ends_with(suffix),
        }
    }
}

/// Disjunction of key filters: a key matches when any alternative does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPredicate {
    AnyOf(Vec<KeyFilter>),
}

impl KeyPredicate {
    /// Build an OR of filters. An empty alternation matches nothing.
    #[inline]
    pub fn any_of(filters: Vec<KeyFilter>) -> Self {
        KeyPredicate::AnyOf(filters)
    }

    pub fn matches(&self, key: &[u8]) -> bool {
        match self {
            KeyPredicate::AnyOf(filters) => filters.iter().any(|f| f.matches(key)),
        }
    }
}
