//! Binary message schema model and the registry that indexes it.

pub mod registry;
pub mod types;

pub use registry::*;
pub use types::*;
