pub mod config;

pub use config::{load_registry, LayerConfig, ModeConfig, ModesConfig};
