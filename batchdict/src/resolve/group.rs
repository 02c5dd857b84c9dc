//! Iteration groups: markers that advance in lockstep.

use std::collections::BTreeMap;
use std::fmt;

use crate::{BatchError, Keypath, Value};

/// Identifier shared by the markers of one iteration group.
///
/// Identifiers order lexicographically, and that order drives both the
/// cartesian product and label layout.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupId(String);

impl GroupId {
    /// Wrap `id` as a group identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for GroupId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Members of one iteration group, keyed by base keypath (marker segment
/// removed).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    members: BTreeMap<Keypath, Vec<Value>>,
}

impl Group {
    /// Base keypaths and their value sequences, in keypath order.
    #[must_use]
    pub const fn members(&self) -> &BTreeMap<Keypath, Vec<Value>> {
        &self.members
    }

    /// Base keypaths of every member.
    pub fn paths(&self) -> impl Iterator<Item = &Keypath> {
        self.members.keys()
    }

    /// Number of members.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Number of lockstep positions, taken from the first member.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.values().next().map_or(0, Vec::len)
    }

    /// Returns `true` when the group has no positions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `index`-th value of every member.
    pub fn slice(&self, index: usize) -> impl Iterator<Item = (&Keypath, &Value)> {
        self.members
            .iter()
            .filter_map(move |(path, values)| values.get(index).map(|value| (path, value)))
    }

    pub(crate) fn insert(&mut self, path: Keypath, values: Vec<Value>) {
        self.members.insert(path, values);
    }

    /// Length mismatches against the first member.
    pub(crate) fn mismatches(&self, id: &GroupId) -> Vec<BatchError> {
        let expected = self.len();
        self.members
            .iter()
            .filter(|(_, values)| values.len() != expected)
            .map(|(path, values)| BatchError::GroupLengthMismatch {
                group: id.clone(),
                expected,
                found: values.len(),
                path: path.clone(),
            })
            .collect()
    }
}

/// Every group discovered in one resolution, in identifier order.
pub type Groups = BTreeMap<GroupId, Group>;
