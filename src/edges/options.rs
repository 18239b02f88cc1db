use super::border::BorderMode;
use serde::{Deserialize, Serialize};

/// Formula combining the horizontal and vertical responses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Magnitude {
    /// `|gx| + |gy|`
    #[default]
    L1,
    /// `floor(sqrt(gx² + gy²))`
    Euclidean,
}

impl Magnitude {
    /// Combine the two responses and saturate to the 8-bit range.
    #[inline]
    pub fn combine(self, gx: i32, gy: i32) -> u8 {
        let raw = match self {
            Magnitude::L1 => gx.unsigned_abs() + gy.unsigned_abs(),
            Magnitude::Euclidean => {
                let sq = i64::from(gx) * i64::from(gx) + i64::from(gy) * i64::from(gy);
                (sq as f64).sqrt() as u32
            }
        };
        raw.min(u32::from(u8::MAX)) as u8
    }
}

/// Knobs for the Sobel edge filter. Defaults reproduce the reference output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeOptions {
    pub border: BorderMode,
    pub magnitude: Magnitude,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn l1_saturates_instead_of_wrapping() {
        assert_eq!(Magnitude::L1.combine(100, -100), 200);
        assert_eq!(Magnitude::L1.combine(-1020, 1020), 255);
        assert_eq!(Magnitude::L1.combine(0, 256), 255);
    }

    #[test]
    fn euclidean_truncates() {
        assert_eq!(Magnitude::Euclidean.combine(3, 4), 5);
        assert_eq!(Magnitude::Euclidean.combine(50, 50), 70);
        assert_eq!(Magnitude::Euclidean.combine(1020, 1020), 255);
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: EdgeOptions = serde_json::from_str(r#"{"magnitude": "euclidean"}"#).unwrap();
        assert_eq!(opts.border, BorderMode::Replicate);
        assert_eq!(opts.magnitude, Magnitude::Euclidean);

        let opts: EdgeOptions = serde_json::from_str(r#"{"border": "zero"}"#).unwrap();
        assert_eq!(opts.border, BorderMode::Zero);
        assert_eq!(opts.magnitude, Magnitude::L1);
    }
}
