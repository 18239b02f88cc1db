//! Sobel gradient-magnitude filter on 8-bit single-channel images.
//!
//! - Convolves the horizontal/vertical 3×3 kernel pair with integer
//!   arithmetic; borders follow [`BorderMode`] (replicate by default).
//! - Combines the responses with [`Magnitude`] (`|gx| + |gy|` by default) and
//!   saturates at 255.
//!
//! Complexity: O(W·H·9); memory: one output buffer.
use super::border::BorderMode;
use super::options::EdgeOptions;
use crate::image::{GrayImageU8, ImageU8, ImageView, ImageViewMut};

type Kernel3 = [[i32; 3]; 3];

pub const SOBEL_HORIZONTAL: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
pub const SOBEL_VERTICAL: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Raw `(gx, gy)` responses at `(x, y)`. Kernel cell `[ky + 1][kx + 1]`
/// weighs the source pixel at offset `(kx, ky)`.
#[inline]
pub fn gradient_at(src: &ImageU8<'_>, x: usize, y: usize, border: BorderMode) -> (i32, i32) {
    let mut gx = 0i32;
    let mut gy = 0i32;
    for (row, (h_row, v_row)) in SOBEL_HORIZONTAL.iter().zip(&SOBEL_VERTICAL).enumerate() {
        let sy = y as isize + row as isize - 1;
        for col in 0..3 {
            let sx = x as isize + col as isize - 1;
            let v = i32::from(border.sample(src, sx, sy));
            gx += h_row[col] * v;
            gy += v_row[col] * v;
        }
    }
    (gx, gy)
}

/// Sobel edge magnitude with replicated borders and L1 magnitude.
pub fn sobel_filter(src: ImageU8<'_>) -> GrayImageU8 {
    sobel_filter_with_options(src, &EdgeOptions::default())
}

/// Sobel edge magnitude with explicit border and magnitude policy.
pub fn sobel_filter_with_options(src: ImageU8<'_>, opts: &EdgeOptions) -> GrayImageU8 {
    let mut out = GrayImageU8::zeros_like(&src);
    for y in 0..src.height() {
        for (x, dst) in out.row_mut(y).iter_mut().enumerate() {
            let (gx, gy) = gradient_at(&src, x, y, opts.border);
            *dst = opts.magnitude.combine(gx, gy);
        }
    }
    out
}
