//! Three independent colour planes sharing one set of dimensions.
use super::u8::GrayImageU8;
use super::ImageView;
use crate::error::EdgeError;
use serde::Serialize;

/// Colour channel selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    pub const ALL: [Channel; 3] = [Channel::R, Channel::G, Channel::B];
}

/// An RGB image stored planar: one `GrayImageU8` per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RgbPlanes {
    r: GrayImageU8,
    g: GrayImageU8,
    b: GrayImageU8,
    maxval: u8,
}

impl RgbPlanes {
    /// Assemble from three planes, which must agree in size. `maxval` is 255.
    pub fn from_planes(r: GrayImageU8, g: GrayImageU8, b: GrayImageU8) -> Result<Self, EdgeError> {
        let expected = r.dimensions();
        for plane in [&g, &b] {
            if plane.dimensions() != expected {
                return Err(EdgeError::PlaneMismatch {
                    expected,
                    actual: plane.dimensions(),
                });
            }
        }
        Ok(Self {
            r,
            g,
            b,
            maxval: u8::MAX,
        })
    }

    /// Planes derived one-to-one from an existing `RgbPlanes`.
    pub(crate) fn from_matching_planes(r: GrayImageU8, g: GrayImageU8, b: GrayImageU8) -> Self {
        debug_assert!(r.dimensions() == g.dimensions() && g.dimensions() == b.dimensions());
        Self {
            r,
            g,
            b,
            maxval: u8::MAX,
        }
    }

    /// Split interleaved `R G B R G B ...` samples into planes.
    pub fn from_interleaved(
        width: usize,
        height: usize,
        samples: &[u8],
        maxval: u8,
    ) -> Result<Self, EdgeError> {
        let pixels = samples.len() / 3;
        if samples.len() % 3 != 0 || Some(pixels) != width.checked_mul(height) {
            return Err(EdgeError::DimensionMismatch {
                expected: width.saturating_mul(height).saturating_mul(3),
                actual: samples.len(),
            });
        }
        let mut r = Vec::with_capacity(pixels);
        let mut g = Vec::with_capacity(pixels);
        let mut b = Vec::with_capacity(pixels);
        for px in samples.chunks_exact(3) {
            r.push(px[0]);
            g.push(px[1]);
            b.push(px[2]);
        }
        Ok(Self {
            r: GrayImageU8::new(width, height, r)?,
            g: GrayImageU8::new(width, height, g)?,
            b: GrayImageU8::new(width, height, b)?,
            maxval,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.r.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.r.height()
    }

    /// Declared maximum sample value of the source file (255 for filter output).
    #[inline]
    pub fn maxval(&self) -> u8 {
        self.maxval
    }

    pub fn channel(&self, channel: Channel) -> &GrayImageU8 {
        match channel {
            Channel::R => &self.r,
            Channel::G => &self.g,
            Channel::B => &self.b,
        }
    }

    pub fn planes(&self) -> [&GrayImageU8; 3] {
        [&self.r, &self.g, &self.b]
    }

    /// Sample triple at `(x, y)`.
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 3] {
        [self.r.get(x, y), self.g.get(x, y), self.b.get(x, y)]
    }
}
