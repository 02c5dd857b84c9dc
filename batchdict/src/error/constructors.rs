//! Constructors and accessors for `BatchError`.

use std::error::Error;
use std::path::Path;
use std::sync::Arc;

use super::{AggregatedErrors, BatchError};
use crate::BatchResult;
use crate::keypath::Keypath;

impl BatchError {
    /// Construct a [`BatchError::File`] for `path`.
    #[must_use]
    pub fn file(path: &Path, err: impl Into<Box<dyn Error + Send + Sync>>) -> Arc<Self> {
        Arc::new(Self::File {
            path: path.to_path_buf(),
            source: err.into(),
        })
    }

    /// Keypath inside the tree that this error concerns.
    ///
    /// For [`Self::OverlappingMarkers`] this is the nested (second) base
    /// keypath.
    #[must_use]
    pub const fn location(&self) -> Option<&Keypath> {
        match self {
            Self::MissingSegment { path, .. }
            | Self::NotANode { path, .. }
            | Self::GroupLengthMismatch { path, .. }
            | Self::NotASequence { path }
            | Self::EmptySequence { path }
            | Self::OverlappingMarkers { second: path, .. } => Some(path),
            Self::EmptyKeypath
            | Self::RootMarker { .. }
            | Self::IdentifierExhausted { .. }
            | Self::TooManyCombinations { .. }
            | Self::File { .. }
            | Self::Deserialize(_)
            | Self::Aggregate(_) => None,
        }
    }
}

/// Turn the failures of a validation pass into a result: success when there
/// are none, the failure itself when there is one, [`BatchError::Aggregate`]
/// otherwise.
pub(crate) fn into_result(mut failures: Vec<BatchError>) -> BatchResult<()> {
    if failures.len() > 1 {
        let aggregated = AggregatedErrors::new(failures);
        return Err(Arc::new(BatchError::Aggregate(Box::new(aggregated))));
    }
    failures.pop().map_or(Ok(()), |failure| Err(Arc::new(failure)))
}
