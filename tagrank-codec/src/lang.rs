//! Language codes and language sets.

use std::fmt;
use std::str;

use tagrank_result::{Error, Result};

/// Width of a language code in bytes. Codes are ASCII, so this is also
/// the character count.
pub const LANG_WIDTH: usize = 2;

/// A two-character, lowercase ASCII language code (`"en"`, `"es"`, ...).
///
/// The code occupies exactly the trailing two bytes of a row key, which
/// is why ASCII is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LanguageCode([u8; LANG_WIDTH]);

impl LanguageCode {
    /// Validate and normalize a user-supplied code. Input of any case is
    /// accepted and lowercased; anything that is not exactly two ASCII
    /// characters is rejected before the store is ever contacted.
    pub fn new(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.len() != LANG_WIDTH || !code.is_ascii() {
            return Err(Error::InvalidArgument(format!(
                "lang parameter should have two characters, got {code:?}"
            )));
        }
        Ok(Self([
            bytes[0].to_ascii_lowercase(),
            bytes[1].to_ascii_lowercase(),
        ]))
    }

    /// Read a code from raw row-key suffix bytes, without normalizing.
    ///
    /// Decoding never rewrites what the store returned; a non-ASCII
    /// suffix means the deployed schema does not match this codec.
    pub fn from_key_suffix(suffix: &[u8]) -> Result<Self> {
        let bytes: [u8; LANG_WIDTH] = suffix.try_into().map_err(|_| {
            Error::SchemaAccess(format!(
                "language suffix must be {LANG_WIDTH} bytes, got {}",
                suffix.len()
            ))
        })?;
        if !bytes.is_ascii() {
            return Err(Error::SchemaAccess(
                "language suffix is not ASCII".to_string(),
            ));
        }
        Ok(Self(bytes))
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; LANG_WIDTH] {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // Invariant: constructors only admit ASCII bytes.
        str::from_utf8(&self.0).unwrap_or("??")
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-empty, ordered, deduplicated set of language codes.
///
/// Order is the caller's first-mention order; reporting walks languages
/// in this order so repeated runs produce output in a stable sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet(Vec<LanguageCode>);

impl LanguageSet {
    pub fn new(codes: Vec<LanguageCode>) -> Result<Self> {
        if codes.is_empty() {
            return Err(Error::InvalidArgument(
                "at least one language code is required".to_string(),
            ));
        }
        let mut unique = Vec::with_capacity(codes.len());
        for code in codes {
            if !unique.contains(&code) {
                unique.push(code);
            }
        }
        Ok(Self(unique))
    }

    /// Parse a comma-separated list of codes; a single bare code is also
    /// valid. Each token is validated and lowercased via
    /// [`LanguageCode::new`].
    pub fn from_csv(list: &str) -> Result<Self> {
        let codes = list
            .split(',')
            .map(LanguageCode::new)
            .collect::<Result<Vec<_>>>()?;
        Self::new(codes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        // Construction rejects empty sets; kept for API completeness.
        self.0.is_empty()
    }

    pub fn contains(&self, code: &LanguageCode) -> bool {
        self.0.contains(code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LanguageCode> {
        self.0.iter()
    }
}

impl fmt::Display for LanguageSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_lowercased() {
        let code = LanguageCode::new("EN").unwrap();
        assert_eq!(code.as_str(), "en");
        assert_eq!(code, LanguageCode::new("en").unwrap());
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            LanguageCode::new("eng"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            LanguageCode::new("e"),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            LanguageCode::new(""),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn non_ascii_two_char_code_is_rejected() {
        // Two characters but more than two bytes.
        assert!(LanguageCode::new("日本").is_err());
    }

    #[test]
    fn key_suffix_is_not_normalized() {
        let code = LanguageCode::from_key_suffix(b"EN").unwrap();
        assert_eq!(code.as_str(), "EN");
        assert_ne!(code, LanguageCode::new("en").unwrap());
    }

    #[test]
    fn csv_parses_single_and_multiple_codes() {
        let single = LanguageSet::from_csv("ca").unwrap();
        assert_eq!(single.len(), 1);

        let multi = LanguageSet::from_csv("en,ES,fr").unwrap();
        assert_eq!(multi.len(), 3);
        assert!(multi.contains(&LanguageCode::new("es").unwrap()));
    }

    #[test]
    fn csv_rejects_malformed_tokens_and_empty_lists() {
        assert!(LanguageSet::from_csv("en,eng").is_err());
        assert!(LanguageSet::from_csv("").is_err());
        assert!(LanguageSet::from_csv("en,,fr").is_err());
    }

    #[test]
    fn duplicates_collapse_preserving_first_mention_order() {
        let set = LanguageSet::from_csv("es,en,ES").unwrap();
        assert_eq!(set.len(), 2);
        let codes: Vec<_> = set.iter().map(|c| c.as_str()).collect();
        assert_eq!(codes, vec!["es", "en"]);
    }
}
