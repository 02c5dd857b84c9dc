//! Keypath reads and writes on nested trees.
//!
//! Reads are forgiving: a missing intermediate key is treated as an empty
//! mapping, so lookups bottom out at "absent" rather than failing. Writes
//! are strict: every intermediate key must already exist.

use std::sync::Arc;

use crate::{BatchError, BatchResult, Keypath, Value};

static EMPTY_NODE: Value = Value::empty_node();

/// Resolve `path` inside `tree`.
///
/// Returns `None` when any segment is absent or passes through a scalar or
/// sequence. The root keypath resolves to `tree` itself.
///
/// # Examples
///
/// ```
/// use batchdict::{Keypath, Value, access};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"b": 1, "c": 2}, "d": 3}));
/// assert_eq!(access::get(&tree, &Keypath::parse("/a/b")), Some(&Value::from(1)));
/// assert_eq!(access::get(&tree, &Keypath::parse("/x/y")), None);
/// ```
#[must_use]
pub fn get<'a>(tree: &'a Value, path: &Keypath) -> Option<&'a Value> {
    path.segments()
        .iter()
        .try_fold(tree, |current, segment| current.as_node()?.get(segment))
}

/// Resolve `path`, falling back to `default` when it is absent.
#[must_use]
pub fn get_or<'a>(tree: &'a Value, path: &Keypath, default: &'a Value) -> &'a Value {
    get(tree, path).unwrap_or(default)
}

/// Resolve `path`, falling back to an empty node when it is absent.
#[must_use]
pub fn get_or_empty<'a>(tree: &'a Value, path: &Keypath) -> &'a Value {
    get_or(tree, path, &EMPTY_NODE)
}

/// Assign `value` at `path`, creating or replacing the terminal key.
///
/// # Errors
///
/// Returns [`BatchError::EmptyKeypath`] for the root keypath,
/// [`BatchError::MissingSegment`] when an intermediate key is absent, and
/// [`BatchError::NotANode`] when the walk reaches a scalar or sequence.
///
/// # Examples
///
/// ```
/// use batchdict::{Keypath, Value, access};
/// use serde_json::json;
///
/// let mut tree = Value::from(json!({"a": {"@1": [1, 2]}}));
/// access::set(&mut tree, &Keypath::parse("/a"), Value::from(1))?;
/// assert_eq!(tree, Value::from(json!({"a": 1})));
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
pub fn set(tree: &mut Value, path: &Keypath, value: Value) -> BatchResult<()> {
    let Some((last, parents)) = path.segments().split_last() else {
        return Err(Arc::new(BatchError::EmptyKeypath));
    };
    let mut current = tree;
    let mut walked = Keypath::root();
    for segment in parents {
        let node = current.as_node_mut().ok_or_else(|| not_a_node(path, &walked))?;
        current = node.get_mut(segment).ok_or_else(|| {
            Arc::new(BatchError::MissingSegment {
                path: path.clone(),
                segment: segment.clone(),
            })
        })?;
        walked = walked.child(segment);
    }
    let node = current.as_node_mut().ok_or_else(|| not_a_node(path, &walked))?;
    node.insert(last.clone(), value);
    Ok(())
}

/// Apply `set` once for every `(path, value)` entry.
///
/// Entries must not overlap; the order in which they are applied is not
/// observable for non-overlapping paths.
///
/// # Errors
///
/// Returns the first error reported by [`set`].
pub fn set_all<'a, I>(tree: &mut Value, entries: I) -> BatchResult<()>
where
    I: IntoIterator<Item = (&'a Keypath, &'a Value)>,
{
    entries
        .into_iter()
        .try_for_each(|(path, value)| set(tree, path, value.clone()))
}

fn not_a_node(path: &Keypath, parent: &Keypath) -> Arc<BatchError> {
    Arc::new(BatchError::NotANode {
        path: path.clone(),
        parent: parent.clone(),
    })
}
