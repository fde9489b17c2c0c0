//! Error types and result definitions for the tagrank crates.
//!
//! One workspace-wide error enum ([`Error`]) and a [`Result<T>`] alias.
//! Every operation that can fail returns `Result<T>` and propagates with
//! `?`; at the binary boundary the error is reported once, together with
//! the run parameters that produced it.

pub mod error;
pub mod result;

pub use error::Error;
pub use result::Result;
