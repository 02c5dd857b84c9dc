//! Test helpers shared across the batchdict workspace.
//!
//! This crate provides `figment::Jail` wrappers for file-backed tests and
//! the reference batch trees used by behavioural suites.

pub mod jail;
pub mod trees;

use std::fmt::Display;

/// Convert a result with any displayable error into an [`anyhow::Result`].
///
/// # Errors
///
/// Returns the stringified original error.
pub fn to_anyhow<T, E: Display>(result: Result<T, E>) -> anyhow::Result<T> {
    result.map_err(|err| anyhow::anyhow!(err.to_string()))
}
