//! rdash-types: Shared data types for the rdash telemetry dashboard.
//!
//! This crate contains pure data types (typed values, the fetch error
//! taxonomy, the upstream variable registry) shared across all rdash
//! crates. It performs no I/O, making it suitable as a foundation layer.

pub mod error;
pub mod registry;
pub mod value;

// Re-export commonly used types at the crate root for convenience
pub use error::{FetchError, FetchErrorKind};
pub use registry::{all_names, find_variable, variables_in_group, VariableGroup, VariableMeta, VARIABLES};
pub use value::{classify, TypedValue};
