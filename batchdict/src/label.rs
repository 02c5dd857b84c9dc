//! Human-readable labels describing what varies in each combination.

use crate::{Combination, Groups, Keypath, Scalar, Value};

/// Varied `(base keypath, value)` pairs of `combination`, ordered by group
/// identifier and then by keypath within each group.
#[must_use]
pub fn varied_items<'c>(
    combination: &'c Combination,
    groups: &'c Groups,
) -> Vec<(&'c Keypath, &'c Value)> {
    groups
        .values()
        .flat_map(|group| group.paths())
        .filter_map(|path| combination.get(path).map(|value| (path, value)))
        .collect()
}

/// Label `combination` as `path-value` tokens joined by `-`.
///
/// Paths are dotted (`a/ii` becomes `a.ii`). Sequence values render each
/// number with two fractional digits, joined by `_`; everything else uses
/// its plain form.
///
/// # Examples
///
/// ```
/// use batchdict::{BatchOptions, Value, enumerate, labels, resolve};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"@2": [0, 1]}, "b": {"@1": [2, 3]}, "c": 4}));
/// let resolution = resolve(&enumerate(&tree), &mut BatchOptions::default())?;
/// assert_eq!(
///     labels(resolution.combinations(), resolution.groups()),
///     ["b-2-a-0", "b-2-a-1", "b-3-a-0", "b-3-a-1"],
/// );
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
#[must_use]
pub fn label(combination: &Combination, groups: &Groups) -> String {
    varied_items(combination, groups)
        .into_iter()
        .map(|(path, value)| format!("{}-{}", path.sanitized(), render(value)))
        .collect::<Vec<_>>()
        .join("-")
}

/// Label every combination, index-aligned with the input.
#[must_use]
pub fn labels(combinations: &[Combination], groups: &Groups) -> Vec<String> {
    combinations
        .iter()
        .map(|combination| label(combination, groups))
        .collect()
}

fn render(value: &Value) -> String {
    match value {
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item.as_scalar().and_then(Scalar::as_f64) {
                Some(number) => format!("{number:.2}"),
                None => item.to_string(),
            })
            .collect::<Vec<_>>()
            .join("_"),
        Value::Scalar(_) | Value::Node(_) => value.to_string(),
    }
}
