//! Edge filtering: Sobel gradient magnitude with pluggable border policy.
//!
//! - `sobel`: the 3×3 convolution and per-pixel magnitude.
//! - `border`: clamp-to-edge (default) and zero-padding sampling.
//! - `options`: serde-friendly knobs selecting border and magnitude formula.
//!
//! The filter is a pure function of its input: no I/O, no logging, no state.

pub mod border;
pub mod options;
pub mod sobel;

pub use border::{clamp_coord, BorderMode};
pub use options::{EdgeOptions, Magnitude};
pub use sobel::{gradient_at, sobel_filter, sobel_filter_with_options};
