//! Primary error enum for keypath access and batch expansion.

use thiserror::Error;

use super::aggregate::AggregatedErrors;
use crate::keypath::Keypath;
use crate::resolve::GroupId;

/// Errors that can occur while reading, resolving, or materialising a batch
/// configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BatchError {
    /// An intermediate key named by a keypath does not exist.
    #[error("cannot set '{path}': key '{segment}' does not exist")]
    MissingSegment {
        /// Keypath passed to the setter.
        path: Keypath,
        /// First segment that could not be found.
        segment: String,
    },

    /// The keypath walks through a value that is not a mapping.
    #[error("cannot set '{path}': '{parent}' is not a mapping")]
    NotANode {
        /// Keypath passed to the setter.
        path: Keypath,
        /// Prefix of `path` that resolved to a scalar or sequence.
        parent: Keypath,
    },

    /// The root of a tree cannot be replaced through a keypath.
    #[error("cannot set a value at the empty keypath")]
    EmptyKeypath,

    /// Members of one iteration group carry sequences of different lengths.
    #[error(
        "iteration group '{group}' expects {expected} values but '{path}' has {found}"
    )]
    GroupLengthMismatch {
        /// Identifier of the offending group.
        group: GroupId,
        /// Length of the first member discovered in the group.
        expected: usize,
        /// Length of the conflicting member.
        found: usize,
        /// Base keypath of the conflicting member.
        path: Keypath,
    },

    /// A marker key holds something other than a sequence.
    #[error("iteration marker at '{path}' must hold a sequence")]
    NotASequence {
        /// Full keypath of the marker, including the marker segment.
        path: Keypath,
    },

    /// A marker key holds an empty sequence.
    #[error("iteration marker at '{path}' holds an empty sequence")]
    EmptySequence {
        /// Full keypath of the marker, including the marker segment.
        path: Keypath,
    },

    /// A marker was placed directly at the root of the tree.
    #[error("iteration marker '{marker}' has no parent key to replace")]
    RootMarker {
        /// The marker segment as written.
        marker: String,
    },

    /// Two markers replace the same key, or one replaces an ancestor of the
    /// other.
    #[error("iteration markers at '{first}' and '{second}' overlap")]
    OverlappingMarkers {
        /// Base keypath of the first marker in keypath order.
        first: Keypath,
        /// Base keypath of the overlapping marker.
        second: Keypath,
    },

    /// The identifier source failed to produce an unused identifier.
    #[error("identifier source produced {attempts} colliding identifiers in a row")]
    IdentifierExhausted {
        /// Number of consecutive collisions observed.
        attempts: usize,
    },

    /// The expansion would exceed the configured combination limit.
    #[error("expansion yields {count} combinations, above the limit of {limit}")]
    TooManyCombinations {
        /// Product of all group lengths, saturating at `usize::MAX`.
        count: usize,
        /// Limit configured through [`crate::BatchOptions`].
        limit: usize,
    },

    /// Error originating from a configuration file.
    #[error("Configuration file error in '{path}': {source}")]
    File {
        /// Path that triggered the failure.
        path: std::path::PathBuf,
        /// Underlying error reported by the file loader.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Failure converting a tree into a typed configuration.
    #[error("failed to deserialise configuration: {0}")]
    Deserialize(#[from] serde_json::Error),

    /// Several errors were detected in one call.
    #[error("{0}")]
    Aggregate(Box<AggregatedErrors>),
}
