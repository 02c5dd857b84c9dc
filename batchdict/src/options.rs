//! Options controlling one expansion.

use std::fmt;

use crate::resolve::{IdentifierSource, SequentialIds};

/// Settings for [`crate::Batch::with_options`] and [`crate::resolve()`].
///
/// # Examples
///
/// ```
/// use batchdict::{BatchOptions, SequentialIds};
///
/// let options = BatchOptions::new()
///     .with_combination_limit(10_000)
///     .with_identifiers(SequentialIds::starting_at(100));
/// assert_eq!(options.combination_limit(), Some(10_000));
/// ```
pub struct BatchOptions {
    combination_limit: Option<usize>,
    identifiers: Box<dyn IdentifierSource>,
}

impl BatchOptions {
    /// Options with no combination limit and sequential anonymous
    /// identifiers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail resolution when more than `limit` combinations would be built.
    #[must_use]
    pub fn with_combination_limit(mut self, limit: usize) -> Self {
        self.combination_limit = Some(limit);
        self
    }

    /// Draw anonymous group identifiers from `source`.
    #[must_use]
    pub fn with_identifiers(mut self, source: impl IdentifierSource + 'static) -> Self {
        self.identifiers = Box::new(source);
        self
    }

    /// The configured combination limit, if any.
    #[must_use]
    pub const fn combination_limit(&self) -> Option<usize> {
        self.combination_limit
    }

    pub(crate) fn identifiers_mut(&mut self) -> &mut dyn IdentifierSource {
        self.identifiers.as_mut()
    }
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            combination_limit: None,
            identifiers: Box::new(SequentialIds::default()),
        }
    }
}

impl fmt::Debug for BatchOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BatchOptions")
            .field("combination_limit", &self.combination_limit)
            .finish_non_exhaustive()
    }
}
