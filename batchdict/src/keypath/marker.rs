//! Iteration marker segments.

/// Sigil that opens an iteration marker segment.
pub const MARKER_SIGIL: char = '@';

/// An iteration marker parsed from a keypath segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker<'a> {
    /// `@id`: joins the group named `id`.
    Named(&'a str),
    /// `@`: forms a fresh singleton group.
    Anonymous,
}

impl<'a> Marker<'a> {
    /// Parse `segment`, returning `None` when it is not a marker.
    #[must_use]
    pub fn parse(segment: &'a str) -> Option<Self> {
        let suffix = segment.strip_prefix(MARKER_SIGIL)?;
        Some(if suffix.is_empty() {
            Self::Anonymous
        } else {
            Self::Named(suffix)
        })
    }
}
