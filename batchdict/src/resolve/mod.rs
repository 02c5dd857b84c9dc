//! Iteration-group resolution.
//!
//! Leaves whose final segment is an iteration marker are collected into
//! groups. Members of a group advance together, like `zip`; distinct groups
//! vary independently, forming a cartesian product. Each resulting
//! [`Combination`] maps base keypaths (marker removed) to one selected
//! value.
//!
//! Resolution validates the whole tree before building anything, so every
//! malformed marker and every length mismatch is reported in one
//! [`BatchError::Aggregate`].

mod group;
mod identifier;
mod product;

use std::sync::Arc;

use tracing::debug;

pub use group::{Group, GroupId, Groups};
pub use identifier::{IdentifierSource, MAX_IDENTIFIER_ATTEMPTS, SequentialIds};
pub use product::{Combination, combination_count};

use identifier::IdentifierPool;

use crate::error::into_result;
use crate::{BatchError, BatchOptions, BatchResult, Keypath, LeafPaths, Marker, Value};

/// Output of [`resolve`]: the ordered combinations and the groups they were
/// built from.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Resolution {
    combinations: Vec<Combination>,
    groups: Groups,
}

impl Resolution {
    /// Combinations in product order.
    #[must_use]
    pub fn combinations(&self) -> &[Combination] {
        &self.combinations
    }

    /// Groups in identifier order.
    #[must_use]
    pub const fn groups(&self) -> &Groups {
        &self.groups
    }

    /// Decompose into combinations and groups.
    #[must_use]
    pub fn into_parts(self) -> (Vec<Combination>, Groups) {
        (self.combinations, self.groups)
    }
}

struct MarkedLeaf<'p, 'v> {
    path: &'p Keypath,
    marker: Marker<'p>,
    value: &'v Value,
}

/// Resolve the iteration groups found in `paths` and expand them into
/// combinations.
///
/// Anonymous markers draw identifiers from `options`; every named
/// identifier in the tree is reserved first so an anonymous group can never
/// merge with a named one.
///
/// # Errors
///
/// Returns [`BatchError::RootMarker`], [`BatchError::NotASequence`],
/// [`BatchError::EmptySequence`], [`BatchError::OverlappingMarkers`] or
/// [`BatchError::GroupLengthMismatch`] for malformed markers (several at once
/// as [`BatchError::Aggregate`]), [`BatchError::IdentifierExhausted`] when the
/// identifier source keeps colliding, and
/// [`BatchError::TooManyCombinations`] when the configured limit is
/// exceeded.
///
/// # Examples
///
/// ```
/// use batchdict::{BatchOptions, Keypath, Value, enumerate, resolve};
/// use serde_json::json;
///
/// let tree = Value::from(json!({"a": {"@1": [1, 2]}, "b": {"@1": [3, 4]}, "c": {"@": [5, 6]}}));
/// let resolution = resolve(&enumerate(&tree), &mut BatchOptions::default())?;
/// assert_eq!(resolution.combinations().len(), 4);
/// assert_eq!(resolution.groups().len(), 2);
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
pub fn resolve(paths: &LeafPaths<'_>, options: &mut BatchOptions) -> BatchResult<Resolution> {
    let marked = marked_leaves(paths);
    let reserved = marked.iter().filter_map(|leaf| match leaf.marker {
        Marker::Named(name) => Some(GroupId::from(name)),
        Marker::Anonymous => None,
    });
    let mut pool = IdentifierPool::new(options.identifiers_mut(), reserved);

    let mut groups = Groups::new();
    let mut errors = Vec::new();
    for leaf in &marked {
        let id = match leaf.marker {
            Marker::Named(name) => GroupId::from(name),
            Marker::Anonymous => pool.fresh()?,
        };
        match member(leaf) {
            Ok((base, values)) => groups.entry(id).or_default().insert(base, values),
            Err(err) => errors.push(err),
        }
    }
    errors.extend(overlaps(&groups));
    for (id, group) in &groups {
        errors.extend(group.mismatches(id));
    }
    into_result(errors)?;

    let count = combination_count(&groups);
    if let Some(limit) = options.combination_limit().filter(|&limit| count > limit) {
        return Err(Arc::new(BatchError::TooManyCombinations { count, limit }));
    }
    debug!(
        groups = groups.len(),
        combinations = count,
        "resolved iteration groups"
    );
    Ok(Resolution {
        combinations: product::cartesian(&groups),
        groups,
    })
}

fn marked_leaves<'p, 'v>(paths: &'p LeafPaths<'v>) -> Vec<MarkedLeaf<'p, 'v>> {
    paths
        .iter()
        .filter_map(|(path, &value)| {
            path.marker().map(|marker| MarkedLeaf {
                path,
                marker,
                value,
            })
        })
        .collect()
}

fn member(leaf: &MarkedLeaf<'_, '_>) -> Result<(Keypath, Vec<Value>), BatchError> {
    let Some((base, segment)) = leaf.path.split_last() else {
        return Err(BatchError::RootMarker {
            marker: String::new(),
        });
    };
    if base.is_root() {
        return Err(BatchError::RootMarker {
            marker: segment.to_owned(),
        });
    }
    match leaf.value.as_sequence() {
        None => Err(BatchError::NotASequence {
            path: leaf.path.clone(),
        }),
        Some([]) => Err(BatchError::EmptySequence {
            path: leaf.path.clone(),
        }),
        Some(values) => Ok((base, values.to_vec())),
    }
}

/// Base keypaths that coincide with, or sit below, another base keypath.
fn overlaps(groups: &Groups) -> Vec<BatchError> {
    let mut bases: Vec<&Keypath> = groups.values().flat_map(Group::paths).collect();
    bases.sort();
    bases
        .windows(2)
        .filter_map(|pair| match pair {
            [first, second] if second.starts_with(first) => {
                Some(BatchError::OverlappingMarkers {
                    first: (*first).clone(),
                    second: (*second).clone(),
                })
            }
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests;
