//! Write combinations back into full copies of the source tree.

use crate::{BatchResult, Combination, Value, access};

/// Build one deep copy of `tree` per combination, with the combination's
/// values written at their base keypaths.
///
/// Writing at a base keypath replaces the node that held the marker, so the
/// results contain no marker keys.
///
/// # Errors
///
/// Propagates [`access::set`] failures. Combinations produced by
/// [`crate::resolve()`] for the same tree always apply cleanly.
///
/// # Examples
///
/// ```
/// use batchdict::{BatchOptions, Value, enumerate, materialize, resolve};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"@": [1, 2]}, "d": 9}));
/// let resolution = resolve(&enumerate(&tree), &mut BatchOptions::default())?;
/// let configs = materialize(&tree, resolution.combinations())?;
/// assert_eq!(configs, [
///     Value::from(json!({"a": 1, "d": 9})),
///     Value::from(json!({"a": 2, "d": 9})),
/// ]);
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
pub fn materialize(tree: &Value, combinations: &[Combination]) -> BatchResult<Vec<Value>> {
    combinations
        .iter()
        .map(|combination| {
            let mut config = tree.clone();
            access::set_all(&mut config, combination)?;
            Ok(config)
        })
        .collect()
}
