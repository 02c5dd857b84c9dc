//! Runtime loading entrypoint for batch trees.

use std::path::Path;

use tracing::debug;

use super::parser::parse_tree;
use crate::{BatchError, BatchResult, Value};

/// Load a tree from a file, selecting the parser based on extension.
///
/// Returns `Ok(None)` if the file does not exist.
///
/// # Examples
///
/// ```rust,no_run
/// use batchdict::{Batch, file::load_tree};
/// use std::path::Path;
///
/// # fn run() -> batchdict::BatchResult<()> {
/// if let Some(tree) = load_tree(Path::new("sweep.toml"))? {
///     let batch = Batch::new(tree)?;
///     for (label, _config) in batch.iter() {
///         println!("{label}");
///     }
/// }
/// # Ok(())
/// # }
/// ```
///
/// # Errors
///
/// Returns [`BatchError::File`] if reading or parsing the file fails.
pub fn load_tree(path: &Path) -> BatchResult<Option<Value>> {
    if !path.is_file() {
        debug!(path = %path.display(), "batch file not found");
        return Ok(None);
    }
    let data = std::fs::read_to_string(path).map_err(|e| BatchError::file(path, e))?;
    let tree = parse_tree(path, &data)?;
    debug!(path = %path.display(), "loaded batch tree");
    Ok(Some(tree))
}
