//! Expand a nested configuration with iteration markers into every concrete
//! configuration it describes.
//!
//! A key written as `@` or `@id` marks its sequence value for iteration.
//! Markers sharing an `id` advance together; distinct groups combine as a
//! cartesian product. Each result is a full copy of the input with the
//! marker nodes replaced by the selected values.
//!
//! ```
//! use batchdict::{Batch, Value};
//! use serde_json::json;
//!
//! let batch = Batch::new(Value::from(json!({"a": {"@2": [0, 1]}, "b": {"@1": [2, 3]}, "c": 4})))?;
//! assert_eq!(batch.labels(), ["b-2-a-0", "b-2-a-1", "b-3-a-0", "b-3-a-1"]);
//! assert_eq!(batch.configs()[0], Value::from(json!({"a": 0, "b": 2, "c": 4})));
//! # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
//! ```

pub mod access;
mod batch;
mod convert;
mod enumerate;
mod error;
pub mod file;
mod keypath;
mod label;
mod materialize;
mod options;
mod resolve;
mod result_ext;
mod value;

pub use batch::{Batch, expand};
pub use convert::from_tree;
pub use enumerate::{LeafPaths, enumerate};
pub use error::{AggregatedErrors, BatchError};
pub use keypath::{Keypath, MARKER_SIGIL, Marker, SEPARATOR};
pub use label::{label, labels, varied_items};
pub use materialize::materialize;
pub use options::BatchOptions;
pub use resolve::{
    Combination, Group, GroupId, Groups, IdentifierSource, MAX_IDENTIFIER_ATTEMPTS, Resolution,
    SequentialIds, combination_count, resolve,
};
pub use result_ext::BatchResultExt;
pub use value::{Node, Scalar, Value};

/// Result alias used throughout the crate.
pub type BatchResult<T> = Result<T, std::sync::Arc<BatchError>>;
