//! Identifier sources for anonymous `@` markers.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use tracing::trace;

use super::GroupId;
use crate::{BatchError, BatchResult};

/// Maximum consecutive collisions tolerated before resolution gives up.
pub const MAX_IDENTIFIER_ATTEMPTS: usize = 64;

/// Produces candidate identifiers for anonymous groups.
///
/// Candidates may repeat; the resolver discards any candidate already in use
/// and asks again.
pub trait IdentifierSource {
    /// Return the next candidate identifier.
    fn next_identifier(&mut self) -> String;
}

impl<F> IdentifierSource for F
where
    F: FnMut() -> String,
{
    fn next_identifier(&mut self) -> String {
        self()
    }
}

/// Counter-backed source yielding `~0`, `~1`, and so on.
///
/// The `~` prefix sorts after ASCII letters and digits, so anonymous groups
/// follow explicitly named ones.
#[derive(Clone, Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    /// Start counting at `first`.
    #[must_use]
    pub const fn starting_at(first: u64) -> Self {
        Self { next: first }
    }
}

impl IdentifierSource for SequentialIds {
    fn next_identifier(&mut self) -> String {
        let id = format!("~{}", self.next);
        self.next = self.next.wrapping_add(1);
        id
    }
}

/// Tracks identifiers issued or reserved during one resolution.
pub(super) struct IdentifierPool<'s> {
    source: &'s mut dyn IdentifierSource,
    taken: HashSet<GroupId>,
}

impl<'s> IdentifierPool<'s> {
    pub(super) fn new<I>(source: &'s mut dyn IdentifierSource, reserved: I) -> Self
    where
        I: IntoIterator<Item = GroupId>,
    {
        Self {
            source,
            taken: reserved.into_iter().collect(),
        }
    }

    /// Draw an identifier unused by any named or previously issued group.
    pub(super) fn fresh(&mut self) -> BatchResult<GroupId> {
        for _ in 0..MAX_IDENTIFIER_ATTEMPTS {
            let candidate = GroupId::from(self.source.next_identifier());
            if self.taken.insert(candidate.clone()) {
                return Ok(candidate);
            }
            trace!(identifier = %candidate, "discarding colliding anonymous identifier");
        }
        Err(Arc::new(BatchError::IdentifierExhausted {
            attempts: MAX_IDENTIFIER_ATTEMPTS,
        }))
    }
}

impl fmt::Debug for IdentifierPool<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentifierPool")
            .field("taken", &self.taken)
            .finish_non_exhaustive()
    }
}
