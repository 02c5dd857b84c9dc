//! Format-specific parsing of batch trees.

use figment::{
    Figment,
    providers::{Format, Json, Toml},
};

use std::path::Path;

use crate::{BatchError, BatchResult, Value};
#[cfg(feature = "yaml")]
use super::yaml::SaphyrYaml;

/// Parse `data` into a tree, choosing the format from `path`'s extension.
///
/// `.json` selects JSON and `.yaml`/`.yml` select YAML (with the `yaml`
/// feature); anything else is read as TOML. `path` is only used for format
/// selection and error messages.
///
/// # Errors
///
/// Returns [`BatchError::File`] when the document fails to parse or the
/// format's feature is disabled.
///
/// # Examples
///
/// ```rust
/// use batchdict::{Keypath, Value, access, file::parse_tree};
/// use std::path::Path;
///
/// let tree = parse_tree(Path::new("sweep.toml"), "[lr]\n\"@\" = [0.1, 0.01]\n")?;
/// assert!(access::get(&tree, &Keypath::parse("/lr/@")).is_some());
/// # Ok::<_, std::sync::Arc<batchdict::BatchError>>(())
/// ```
pub fn parse_tree(path: &Path, data: &str) -> BatchResult<Value> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let figment = match ext.as_deref() {
        Some("json") => Figment::from(Json::string(data)),
        Some("yaml" | "yml") => {
            #[cfg(feature = "yaml")]
            {
                Figment::from(SaphyrYaml::string(path.to_path_buf(), data.to_owned()))
            }
            #[cfg(not(feature = "yaml"))]
            {
                return Err(BatchError::file(
                    path,
                    std::io::Error::other(
                        "yaml feature disabled: enable the 'yaml' feature to support this file format",
                    ),
                ));
            }
        }
        _ => {
            // Validate with `toml` first so syntax errors carry line context.
            toml::from_str::<toml::Value>(data).map_err(|e| BatchError::file(path, e))?;
            Figment::from(Toml::string(data))
        }
    };
    figment
        .extract::<Value>()
        .map_err(|e| BatchError::file(path, e.to_string()))
}
