//! Ordered-segment keypaths addressing locations inside a [`crate::Value`]
//! tree.
//!
//! A keypath is written as a `/`-delimited string such as `/a/ii/@1`.
//! Parsing drops empty segments, so `a/b`, `/a/b/` and `//a//b` all name
//! the same location. Every component in this crate consumes and produces
//! [`Keypath`] rather than raw strings.

mod marker;

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

pub use marker::{MARKER_SIGIL, Marker};

/// Separator placed between keypath segments in their string form.
pub const SEPARATOR: char = '/';

/// Location of one value inside a nested tree.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keypath {
    segments: Vec<String>,
}

impl Keypath {
    /// The empty keypath, addressing the tree root.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Parse a `/`-delimited keypath, skipping empty segments.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_segments(text.split(SEPARATOR))
    }

    /// Build a keypath from individual segments. Empty segments are
    /// dropped; segments are not split further.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments
                .into_iter()
                .map(Into::into)
                .filter(|segment| !segment.is_empty())
                .collect(),
        }
    }

    /// Segments in root-to-leaf order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` for the root keypath.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// The terminal segment, if any.
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Split into the parent keypath and the terminal segment.
    #[must_use]
    pub fn split_last(&self) -> Option<(Self, &str)> {
        let (last, parent) = self.segments.split_last()?;
        Some((
            Self {
                segments: parent.to_vec(),
            },
            last.as_str(),
        ))
    }

    /// Extend this keypath by one segment.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        if !segment.is_empty() {
            segments.push(segment.to_owned());
        }
        Self { segments }
    }

    /// Returns `true` when `prefix` names this location or one of its
    /// ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.segments.starts_with(&prefix.segments)
    }

    /// The iteration marker carried by the terminal segment, if any.
    #[must_use]
    pub fn marker(&self) -> Option<Marker<'_>> {
        self.last().and_then(Marker::parse)
    }

    /// Dotted form used in labels: `/a/ii` becomes `a.ii`.
    #[must_use]
    pub fn sanitized(&self) -> String {
        self.segments.join(".")
    }
}

impl fmt::Display for Keypath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("/");
        }
        for segment in &self.segments {
            write!(f, "{SEPARATOR}{segment}")?;
        }
        Ok(())
    }
}

impl FromStr for Keypath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for Keypath {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<&String> for Keypath {
    fn from(value: &String) -> Self {
        Self::parse(value)
    }
}

#[cfg(test)]
mod tests;
