//! 8-bit single-channel images in row-major layout.
//!
//! `ImageU8` borrows its samples, `GrayImageU8` owns them. Both can only be
//! built through constructors that check `data.len() == width * height` and
//! reject zero dimensions, so downstream code never indexes out of bounds.
use super::traits::{ImageView, ImageViewMut};
use crate::error::EdgeError;

fn check_shape(width: usize, height: usize, len: usize) -> Result<(), EdgeError> {
    if width == 0 || height == 0 {
        return Err(EdgeError::EmptyImage { width, height });
    }
    let expected = width
        .checked_mul(height)
        .ok_or(EdgeError::TooLarge { width, height })?;
    if expected != len {
        return Err(EdgeError::DimensionMismatch {
            expected,
            actual: len,
        });
    }
    Ok(())
}

/// Borrowed, validated view over `w * h` samples.
#[derive(Clone, Copy, Debug)]
pub struct ImageU8<'a> {
    w: usize,
    h: usize,
    data: &'a [u8],
}

impl<'a> ImageU8<'a> {
    pub fn new(data: &'a [u8], w: usize, h: usize) -> Result<Self, EdgeError> {
        check_shape(w, h, data.len())?;
        Ok(Self { w, h, data })
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.w + x]
    }
}

impl<'a> ImageView for ImageU8<'a> {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.w;
        &self.data[start..start + self.w]
    }
}

/// Owned 8-bit grayscale buffer with borrowed view conversion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Take ownership of raw row-major samples.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Result<Self, EdgeError> {
        check_shape(width, height, data.len())?;
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Zero-filled buffer shaped like an already validated view.
    pub(crate) fn zeros_like(view: &ImageU8<'_>) -> Self {
        Self {
            width: view.w,
            height: view.h,
            data: vec![0; view.w * view.h],
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.data[y * self.width + x]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, v: u8) {
        let i = y * self.width + x;
        self.data[i] = v;
    }

    /// Image dimensions as `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Borrow as a read-only `ImageU8` view
    pub fn as_view(&self) -> ImageU8<'_> {
        ImageU8 {
            w: self.width,
            h: self.height,
            data: &self.data,
        }
    }
}

impl ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }
}

impl ImageViewMut for GrayImageU8 {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let start = y * self.width;
        let end = start + self.width;
        &mut self.data[start..end]
    }
}
