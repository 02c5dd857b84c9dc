//! Shared helpers for running file-backed tests inside `figment::Jail`.
//!
//! The jail changes into a fresh temporary directory for the duration of
//! the closure, so tests can create batch files with relative paths.

use anyhow::{Result, anyhow};
use figment::Jail;
use std::cell::RefCell;

/// Runs `f` inside a [`figment::Jail`], returning the closure's output.
///
/// # Errors
///
/// Returns an error when the closure fails or the jail cannot be set up.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut Jail) -> Result<T>,
{
    let output = RefCell::new(None);
    let error: RefCell<Option<anyhow::Error>> = RefCell::new(None);
    Jail::try_with(|j| {
        match f(j) {
            Ok(result) => {
                output.replace(Some(result));
            }
            Err(err) => {
                error.replace(Some(err));
            }
        }
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    if let Some(err) = error.into_inner() {
        return Err(err);
    }
    output
        .into_inner()
        .ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Write `contents` to `name` inside the active jail.
///
/// # Errors
///
/// Returns an error when the file cannot be created.
pub fn write_file(jail: &Jail, name: &str, contents: &str) -> Result<()> {
    jail.create_file(name, contents)
        .map(drop)
        .map_err(|err| anyhow!(err.to_string()))
}
