//! Extensions for mapping errors to `BatchResult` concisely.
//!
//! Use [`BatchResultExt::into_batch`] for error types that implement
//! `Into<BatchError>` (for example `serde_json::Error`).
//!
//! # Examples
//!
//! ```
//! use batchdict::{BatchResult, BatchResultExt};
//!
//! fn parse() -> BatchResult<serde_json::Value> {
//!     serde_json::from_str("{\"a\": 1}").into_batch()
//! }
//! # assert!(parse().is_ok());
//! ```

use std::sync::Arc;

use crate::{BatchError, BatchResult};

/// Map any `Result<T, E>` with `E: Into<BatchError>` into a
/// [`BatchResult`].
pub trait BatchResultExt<T> {
    /// Convert `Result<T, E>` into `BatchResult<T>`.
    ///
    /// # Errors
    ///
    /// Propagates the original error after conversion into
    /// `Arc<BatchError>`.
    fn into_batch(self) -> BatchResult<T>;
}

impl<T, E> BatchResultExt<T> for Result<T, E>
where
    E: Into<BatchError>,
{
    fn into_batch(self) -> BatchResult<T> {
        self.map_err(|e| Arc::new(e.into()))
    }
}
