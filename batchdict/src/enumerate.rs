//! Flatten a tree into its leaf keypaths.

use std::collections::BTreeMap;

use tracing::warn;

use crate::{Keypath, Marker, Value};

/// Every leaf of a tree keyed by its full keypath.
pub type LeafPaths<'a> = BTreeMap<Keypath, &'a Value>;

/// Enumerate every leaf in `tree`.
///
/// Scalars and sequences are leaves; nodes are descended into. Empty nodes
/// contribute no entries, and a non-node root is recorded at the root
/// keypath.
///
/// A value stored under an iteration marker key is always a leaf, even when
/// it is a mapping, so resolution sees every marker exactly once. Keys that
/// are the empty string cannot be addressed by a [`Keypath`]; they are
/// skipped together with everything below them.
///
/// # Examples
///
/// ```
/// use batchdict::{Keypath, Value, enumerate};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"@1": [1, 2, 3]}, "c": {"@": [7, 8]}, "d": 9}));
/// let paths: Vec<String> = enumerate(&tree).keys().map(ToString::to_string).collect();
/// assert_eq!(paths, ["/a/@1", "/c/@", "/d"]);
/// ```
#[must_use]
pub fn enumerate(tree: &Value) -> LeafPaths<'_> {
    let mut leaves = LeafPaths::new();
    collect(tree, Keypath::root(), &mut leaves);
    leaves
}

fn collect<'a>(value: &'a Value, path: Keypath, leaves: &mut LeafPaths<'a>) {
    match value {
        Value::Node(node) => {
            for (key, child) in node {
                if key.is_empty() {
                    warn!(%path, "skipping unaddressable empty key");
                    continue;
                }
                let child_path = path.child(key);
                if Marker::parse(key).is_some() {
                    leaves.insert(child_path, child);
                } else {
                    collect(child, child_path, leaves);
                }
            }
        }
        Value::Scalar(_) | Value::Sequence(_) => {
            leaves.insert(path, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::enumerate;
    use crate::{Keypath, Value, access};

    #[rstest]
    fn every_leaf_round_trips_through_get() {
        let tree = Value::from(json!({
            "a": {"i": 0, "ii": {"@1": [1, 2, 3]}},
            "b": {"@1": [4, 5, 6]},
            "e": {},
            "d": 9
        }));
        let leaves = enumerate(&tree);
        assert_eq!(leaves.len(), 4);
        for (path, value) in &leaves {
            assert_eq!(access::get(&tree, path), Some(*value), "mismatch at {path}");
        }
    }

    #[rstest]
    fn scalar_root_is_a_single_leaf() {
        let tree = Value::from(5);
        let leaves = enumerate(&tree);
        assert_eq!(leaves.get(&Keypath::root()), Some(&&tree));
    }

    #[rstest]
    #[case(json!({"a": {"@1": {"x": 1}}}))]
    #[case(json!({"a": {"@1": {}}}))]
    #[case(json!({"a": {"@1": {"@2": [1]}}}))]
    fn marked_mappings_are_single_leaves(#[case] tree: serde_json::Value) {
        let tree = Value::from(tree);
        let leaves = enumerate(&tree);
        let paths: Vec<String> = leaves.keys().map(ToString::to_string).collect();
        assert_eq!(paths, ["/a/@1"]);
        assert!(leaves.values().all(|value| value.is_node()));
    }

    #[rstest]
    fn empty_keys_are_skipped_without_colliding() {
        let tree = Value::from(json!({"": {"a": 1}, "a": 2}));
        let leaves = enumerate(&tree);
        assert_eq!(leaves.len(), 1);
        assert_eq!(leaves.get(&Keypath::parse("/a")), Some(&&Value::from(2)));
    }

    #[rstest]
    fn sequences_are_leaves() {
        let tree = Value::from(json!({"xs": [{"nested": 1}]}));
        let leaves = enumerate(&tree);
        assert!(leaves.contains_key(&Keypath::parse("/xs")));
        assert_eq!(leaves.len(), 1);
    }
}
