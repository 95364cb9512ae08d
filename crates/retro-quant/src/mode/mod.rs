//! Declarative graphics-mode descriptions and the named-mode registry.

mod c64;
mod registry;
mod spec;

pub use c64::builtin_modes;
pub use registry::{ModeRegistry, DEFAULT_MODE};
pub use spec::ModeSpec;
