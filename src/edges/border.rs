//! Boundary policies for neighbourhood reads.
use crate::image::{ImageU8, ImageView};
use serde::{Deserialize, Serialize};

/// How samples outside the image are produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderMode {
    /// Reuse the nearest edge pixel (clamp-to-edge).
    #[default]
    Replicate,
    /// Treat the exterior as black.
    Zero,
}

/// Clamp a possibly out-of-range coordinate into `0..len`. `len` must be > 0.
#[inline]
pub fn clamp_coord(c: isize, len: usize) -> usize {
    if c < 0 {
        0
    } else if c as usize >= len {
        len - 1
    } else {
        c as usize
    }
}

impl BorderMode {
    /// Sample at `(x, y)`, which may lie up to any distance outside the image.
    #[inline]
    pub fn sample(self, img: &ImageU8<'_>, x: isize, y: isize) -> u8 {
        let (w, h) = (img.width(), img.height());
        match self {
            BorderMode::Replicate => img.get(clamp_coord(x, w), clamp_coord(y, h)),
            BorderMode::Zero => {
                if x < 0 || y < 0 || x as usize >= w || y as usize >= h {
                    0
                } else {
                    img.get(x as usize, y as usize)
                }
            }
        }
    }
}
