//! Validation failures collected from one pass over a batch tree.

use std::{error::Error, fmt, slice};

use super::BatchError;
use crate::keypath::Keypath;
use crate::resolve::GroupId;

/// Every validation failure found while resolving one tree.
///
/// Failures are kept in keypath order; failures without a location, such
/// as a root marker, come first.
///
/// # Examples
///
/// ```
/// use batchdict::{Batch, BatchError, Keypath, Value};
/// use serde_json::json;
///
/// let err = Batch::new(Value::from(json!({"b": {"@": []}, "a": {"@": 5}})))
///     .expect_err("both markers are malformed");
/// let BatchError::Aggregate(failures) = &*err else {
///     panic!("expected several failures");
/// };
/// let paths: Vec<&Keypath> = failures.locations().collect();
/// assert_eq!(paths, [&Keypath::parse("/a/@"), &Keypath::parse("/b/@")]);
/// ```
#[derive(Debug)]
pub struct AggregatedErrors(Vec<BatchError>);

impl AggregatedErrors {
    pub(crate) fn new(mut failures: Vec<BatchError>) -> Self {
        failures.sort_by(|left, right| left.location().cmp(&right.location()));
        Self(failures)
    }

    /// Iterate over the failures in keypath order.
    #[must_use = "iterators should be consumed to inspect errors"]
    pub fn iter(&self) -> slice::Iter<'_, BatchError> {
        self.0.iter()
    }

    /// Keypaths the failures point at, in order.
    pub fn locations(&self) -> impl Iterator<Item = &Keypath> {
        self.0.iter().filter_map(BatchError::location)
    }

    /// Iteration groups whose members disagree on length.
    pub fn mismatched_groups(&self) -> impl Iterator<Item = &GroupId> {
        self.0.iter().filter_map(|failure| match failure {
            BatchError::GroupLengthMismatch { group, .. } => Some(group),
            _ => None,
        })
    }

    /// Number of failures.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing was collected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AggregatedErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} problems in batch configuration:", self.0.len())?;
        for failure in &self.0 {
            write!(f, "\n  - {failure}")?;
        }
        Ok(())
    }
}

impl Error for AggregatedErrors {}

impl<'a> IntoIterator for &'a AggregatedErrors {
    type Item = &'a BatchError;
    type IntoIter = slice::Iter<'a, BatchError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
