//! JSON configuration for the `ppm_edge` tool.

pub mod edge;

pub use edge::{load_config, EdgeOutputConfig, EdgeToolConfig};
