#![allow(dead_code)]

pub mod synthetic_image;

use tempfile::TempDir;

/// Per-test scratch directory, removed when the guard drops, including when
/// an assertion panics.
pub fn scratch_dir(name: &str) -> TempDir {
    tempfile::Builder::new()
        .prefix(&format!("ppm_edge_{name}_"))
        .tempdir()
        .unwrap()
}
