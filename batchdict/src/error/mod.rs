//! Error types produced while expanding batch configurations.

mod aggregate;
mod constructors;
mod types;

pub use aggregate::AggregatedErrors;
pub(crate) use constructors::into_result;
pub use types::BatchError;
