//! One-shot expansion of a batch configuration.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::label::{labels, varied_items};
use crate::{
    BatchOptions, BatchResult, Combination, Groups, Keypath, Resolution, Value, enumerate,
    from_tree, materialize, resolve,
};

/// A source tree together with every configuration it expands into.
///
/// # Examples
///
/// ```
/// use batchdict::{Batch, Value};
/// use serde_json::json;
///
/// let batch = Batch::new(Value::from(json!({
///     "a": {"i": 0, "ii": {"@1": [1, 2, 3]}},
///     "b": {"@1": [4, 5, 6]},
///     "c": {"@": [7, 8]},
///     "d": 9
/// })))?;
/// assert_eq!(batch.len(), 6);
/// assert_eq!(batch.labels()[0], "a.ii-1-b-4-c-7");
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Batch {
    source: Value,
    resolution: Resolution,
    configs: Vec<Value>,
}

impl Batch {
    /// Expand `tree` with default options.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`resolve()`] or [`materialize()`].
    pub fn new(tree: Value) -> BatchResult<Self> {
        Self::with_options(tree, BatchOptions::default())
    }

    /// Expand `tree` using `options`.
    ///
    /// # Errors
    ///
    /// Returns any error reported by [`resolve()`] or [`materialize()`].
    pub fn with_options(tree: Value, mut options: BatchOptions) -> BatchResult<Self> {
        let resolution = resolve(&enumerate(&tree), &mut options)?;
        let configs = materialize(&tree, resolution.combinations())?;
        debug!(configs = configs.len(), "expanded batch configuration");
        Ok(Self {
            source: tree,
            resolution,
            configs,
        })
    }

    /// The tree this batch was expanded from.
    #[must_use]
    pub const fn source(&self) -> &Value {
        &self.source
    }

    /// Materialised configurations in combination order.
    #[must_use]
    pub fn configs(&self) -> &[Value] {
        &self.configs
    }

    /// Consume the batch, returning its configurations.
    #[must_use]
    pub fn into_configs(self) -> Vec<Value> {
        self.configs
    }

    /// Combinations, index-aligned with [`Self::configs`].
    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        self.resolution.combinations()
    }

    /// Iteration groups in identifier order.
    #[must_use]
    pub const fn groups(&self) -> &Groups {
        self.resolution.groups()
    }

    /// Number of configurations. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Returns `true` when no configurations were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    /// One label per configuration.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        labels(self.combinations(), self.groups())
    }

    /// For each configuration, the varied keypaths and their values in label
    /// order.
    #[must_use]
    pub fn varied_items(&self) -> Vec<Vec<(&Keypath, &Value)>> {
        self.combinations()
            .iter()
            .map(|combination| varied_items(combination, self.groups()))
            .collect()
    }

    /// Pairs of label and configuration.
    pub fn iter(&self) -> impl Iterator<Item = (String, &Value)> {
        self.labels().into_iter().zip(&self.configs)
    }

    /// Deserialise every configuration into `T`.
    ///
    /// # Errors
    ///
    /// Returns the first [`crate::BatchError::Deserialize`] encountered.
    pub fn deserialize<T: DeserializeOwned>(&self) -> BatchResult<Vec<T>> {
        self.configs.iter().map(from_tree).collect()
    }
}

/// Expand `tree` into its configurations with default options.
///
/// # Errors
///
/// Returns any error reported by [`resolve()`] or [`materialize()`].
pub fn expand(tree: &Value) -> BatchResult<Vec<Value>> {
    let resolution = resolve(&enumerate(tree), &mut BatchOptions::default())?;
    materialize(tree, resolution.combinations())
}
