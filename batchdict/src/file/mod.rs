//! Helpers for reading batch trees from configuration files.

mod loader;
mod parser;
#[cfg(feature = "yaml")]
mod yaml;

pub use loader::load_tree;
pub use parser::parse_tree;
#[cfg(feature = "yaml")]
pub use yaml::SaphyrYaml;
