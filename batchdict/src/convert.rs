//! Typed views of materialised configurations.

use serde::de::DeserializeOwned;

use crate::{BatchResult, BatchResultExt, Value};

/// Deserialise a tree into `T`.
///
/// # Errors
///
/// Returns [`crate::BatchError::Deserialize`] when the tree does not match
/// `T`.
///
/// # Examples
///
/// ```rust
/// use batchdict::{Value, from_tree};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Trial { lr: f64, layers: u8 }
///
/// let trial: Trial = from_tree(&Value::from(json!({"lr": 0.1, "layers": 3})))?;
/// assert_eq!(trial, Trial { lr: 0.1, layers: 3 });
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
pub fn from_tree<T: DeserializeOwned>(tree: &Value) -> BatchResult<T> {
    serde_json::to_value(tree)
        .and_then(serde_json::from_value)
        .into_batch()
}
