use crate::error::Error;

/// Result type alias used throughout tagrank.
pub type Result<T> = std::result::Result<T, Error>;
