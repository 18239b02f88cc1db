#![doc = include_str!("../README.md")]

pub mod config;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;
pub mod pipeline;

// --- High-level re-exports -------------------------------------------------

pub use crate::edges::{sobel_filter, sobel_filter_with_options, BorderMode, EdgeOptions, Magnitude};
pub use crate::error::{ConfigError, EdgeError, Error, PpmError, Result};
pub use crate::image::{Channel, GrayImageU8, ImageU8, RgbPlanes};
pub use crate::pipeline::{filter_rgb, EdgePipeline, PipelineOptions};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use ppm_edge::prelude::*;
/// use std::path::Path;
///
/// # fn main() -> ppm_edge::Result<()> {
/// let image = read_ppm(Path::new("touji.ppm"))?;
/// let edges = filter_rgb(&image, &PipelineOptions::default());
/// write_ppm(Path::new("touji_edges.ppm"), &edges)?;
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::{read_ppm, write_ppm};
    pub use crate::image::{GrayImageU8, ImageU8, ImageView, RgbPlanes};
    pub use crate::{filter_rgb, sobel_filter, EdgeOptions, EdgePipeline, PipelineOptions};
}
