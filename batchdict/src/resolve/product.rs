//! Combinations and the cross-group cartesian product.

use std::collections::BTreeMap;

use super::{Group, Groups};
use crate::{Keypath, Value};

/// One selected value per varied keypath.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Combination(BTreeMap<Keypath, Value>);

impl Combination {
    /// The value selected for `path`.
    #[must_use]
    pub fn get(&self, path: &Keypath) -> Option<&Value> {
        self.0.get(path)
    }

    /// Selected values in keypath order.
    pub fn iter(&self) -> impl Iterator<Item = (&Keypath, &Value)> {
        self.0.iter()
    }

    /// Number of varied keypaths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when nothing varies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the combination, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<Keypath, Value> {
        self.0
    }

    fn extend_from(&mut self, group: &Group, index: usize) {
        self.0.extend(
            group
                .slice(index)
                .map(|(path, value)| (path.clone(), value.clone())),
        );
    }
}

impl<'a> IntoIterator for &'a Combination {
    type Item = (&'a Keypath, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, Keypath, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(Keypath, Value)> for Combination {
    fn from_iter<I: IntoIterator<Item = (Keypath, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Product of every group's length, saturating on overflow.
#[must_use]
pub fn combination_count(groups: &Groups) -> usize {
    groups
        .values()
        .map(Group::len)
        .fold(1, usize::saturating_mul)
}

/// Cartesian product across groups, zipped within each group.
///
/// Groups are taken in identifier order with the first group varying
/// slowest. With no groups the result is a single empty combination.
pub(super) fn cartesian(groups: &Groups) -> Vec<Combination> {
    let mut combinations = vec![Combination::default()];
    for group in groups.values() {
        let mut extended = Vec::with_capacity(combinations.len().saturating_mul(group.len()));
        for prefix in &combinations {
            for index in 0..group.len() {
                let mut combination = prefix.clone();
                combination.extend_from(group, index);
                extended.push(combination);
            }
        }
        combinations = extended;
    }
    combinations
}
