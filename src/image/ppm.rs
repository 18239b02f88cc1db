//! Plain-text PPM (`P3`) codec.
//!
//! The reader is token based: any run of whitespace separates tokens and a
//! `#` starts a comment that runs to the end of the line, wherever it
//! appears. Header layout is therefore free-form, and the number of samples
//! is checked against the declared dimensions.
//!
//! The writer always emits `maxval = 255` and one `R G B` line per pixel.
use super::rgb::RgbPlanes;
use super::ImageView;
use crate::error::PpmError;
use log::warn;
use std::io::{self, Write};

const MAGIC: &str = "P3";

/// Whitespace/comment aware token stream over a PPM document.
struct Tokens<'a> {
    rest: &'a str,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self { rest: text }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            self.rest = self.rest.trim_start();
            if let Some(comment) = self.rest.strip_prefix('#') {
                self.rest = comment.find('\n').map_or("", |i| &comment[i + 1..]);
                continue;
            }
            if self.rest.is_empty() {
                return None;
            }
            let end = self
                .rest
                .find(|c: char| c.is_whitespace() || c == '#')
                .unwrap_or(self.rest.len());
            let (token, rest) = self.rest.split_at(end);
            self.rest = rest;
            return Some(token);
        }
    }
}

fn parse_number(token: &str) -> Result<u32, PpmError> {
    token.parse::<u32>().map_err(|_| PpmError::InvalidToken {
        token: token.to_string(),
    })
}

fn header_field(tokens: &mut Tokens<'_>, name: &'static str) -> Result<u32, PpmError> {
    let token = tokens.next().ok_or(PpmError::MissingHeader(name))?;
    parse_number(token)
}

/// Parse a `P3` document into three channel planes.
pub fn parse_ppm(text: &str) -> Result<RgbPlanes, PpmError> {
    let mut tokens = Tokens::new(text);

    let magic = tokens.next().ok_or(PpmError::MissingHeader("magic"))?;
    if magic != MAGIC {
        return Err(PpmError::BadMagic(magic.to_string()));
    }

    let width = header_field(&mut tokens, "width")? as usize;
    let height = header_field(&mut tokens, "height")? as usize;
    let maxval = header_field(&mut tokens, "maxval")?;
    if maxval == 0 || maxval > u32::from(u8::MAX) {
        return Err(PpmError::UnsupportedMaxval(maxval));
    }
    if maxval < u32::from(u8::MAX) {
        warn!("maxval {maxval} below 255; samples are kept unscaled");
    }

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or(PpmError::TooLarge { width, height })?;

    // Each sample needs at least two bytes of text, so the document length
    // bounds the allocation even when the header lies about the size.
    let mut samples = Vec::with_capacity(expected.min(text.len() / 2 + 1));
    for index in 0..expected {
        let token = tokens.next().ok_or(PpmError::Truncated {
            expected,
            found: index,
        })?;
        let value = parse_number(token)?;
        if value > maxval {
            return Err(PpmError::SampleOutOfRange {
                index,
                value,
                maxval,
            });
        }
        samples.push(value as u8);
    }

    let extra = tokens.count();
    if extra > 0 {
        return Err(PpmError::TrailingData { extra });
    }

    Ok(RgbPlanes::from_interleaved(
        width,
        height,
        &samples,
        maxval as u8,
    )?)
}

/// Serialize planes as `P3` text with `maxval = 255`.
pub fn encode_ppm<W: Write>(mut out: W, image: &RgbPlanes) -> io::Result<()> {
    writeln!(out, "{MAGIC}")?;
    writeln!(out, "{} {}", image.width(), image.height())?;
    writeln!(out, "{}", u8::MAX)?;
    let [r, g, b] = image.planes();
    for ((r_row, g_row), b_row) in r.rows().zip(g.rows()).zip(b.rows()) {
        for ((r, g), b) in r_row.iter().zip(g_row).zip(b_row) {
            writeln!(out, "{r} {g} {b}")?;
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Channel;

    #[test]
    fn parses_minimal_document() {
        let img = parse_ppm("P3\n2 1\n255\n10 20 30\n40 50 60\n").unwrap();
        assert_eq!((img.width(), img.height()), (2, 1));
        assert_eq!(img.channel(Channel::R).data(), &[10, 40]);
        assert_eq!(img.channel(Channel::B).data(), &[30, 60]);
    }

    #[test]
    fn tolerates_comments_and_irregular_whitespace() {
        let text = "P3 # plain ppm\n# created by hand\n#second comment\n  2\t2 \r\n\
                    # maxval follows\n255\n1 2 3   4 5 6 # first row\n7 8\n9 10 11 12";
        let img = parse_ppm(text).unwrap();
        assert_eq!(img.pixel(0, 0), [1, 2, 3]);
        assert_eq!(img.pixel(1, 0), [4, 5, 6]);
        assert_eq!(img.pixel(0, 1), [7, 8, 9]);
        assert_eq!(img.pixel(1, 1), [10, 11, 12]);
    }

    #[test]
    fn comment_glued_to_token_ends_it() {
        let img = parse_ppm("P3\n1 1#size\n255\n1 2 3").unwrap();
        assert_eq!(img.pixel(0, 0), [1, 2, 3]);
    }

    #[test]
    fn rejects_wrong_magic() {
        let err = parse_ppm("P6\n1 1\n255\n0 0 0").unwrap_err();
        assert!(matches!(err, PpmError::BadMagic(ref m) if m == "P6"));
    }

    #[test]
    fn rejects_missing_header_fields() {
        let err = parse_ppm("P3\n4 # no height\n").unwrap_err();
        assert!(matches!(err, PpmError::MissingHeader("height")));
        let err = parse_ppm("").unwrap_err();
        assert!(matches!(err, PpmError::MissingHeader("magic")));
    }

    #[test]
    fn reports_truncated_pixel_data() {
        let err = parse_ppm("P3\n2 2\n255\n1 2 3 4 5 6 7").unwrap_err();
        assert!(matches!(
            err,
            PpmError::Truncated {
                expected: 12,
                found: 7
            }
        ));
    }

    #[test]
    fn rejects_trailing_tokens() {
        let err = parse_ppm("P3\n1 1\n255\n1 2 3 4 5").unwrap_err();
        assert!(matches!(err, PpmError::TrailingData { extra: 2 }));
    }

    #[test]
    fn rejects_samples_above_maxval() {
        let err = parse_ppm("P3\n1 1\n100\n1 101 3").unwrap_err();
        assert!(matches!(
            err,
            PpmError::SampleOutOfRange {
                index: 1,
                value: 101,
                maxval: 100
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_and_negative_tokens() {
        let err = parse_ppm("P3\n1 1\n255\n1 -2 3").unwrap_err();
        assert!(matches!(err, PpmError::InvalidToken { ref token } if token == "-2"));
        let err = parse_ppm("P3\nwide 1\n255\n").unwrap_err();
        assert!(matches!(err, PpmError::InvalidToken { ref token } if token == "wide"));
    }

    #[test]
    fn rejects_unsupported_maxval_and_empty_images() {
        assert!(matches!(
            parse_ppm("P3\n1 1\n65535\n1 2 3"),
            Err(PpmError::UnsupportedMaxval(65535))
        ));
        assert!(matches!(
            parse_ppm("P3\n1 1\n0\n0 0 0"),
            Err(PpmError::UnsupportedMaxval(0))
        ));
        assert!(matches!(
            parse_ppm("P3\n0 3\n255\n"),
            Err(PpmError::Dimensions(_))
        ));
    }

    #[test]
    fn encoded_text_has_reference_layout() {
        let img = RgbPlanes::from_interleaved(2, 1, &[0, 128, 255, 7, 8, 9], 255).unwrap();
        let mut buf = Vec::new();
        encode_ppm(&mut buf, &img).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "P3\n2 1\n255\n0 128 255\n7 8 9\n"
        );
    }

    #[test]
    fn encoded_text_parses_back() {
        let samples: Vec<u8> = (0..3 * 4 * 3).map(|i| (i * 7 % 256) as u8).collect();
        let img = RgbPlanes::from_interleaved(4, 3, &samples, 255).unwrap();
        let mut buf = Vec::new();
        encode_ppm(&mut buf, &img).unwrap();
        let parsed = parse_ppm(std::str::from_utf8(&buf).unwrap()).unwrap();
        assert_eq!(parsed, img);
    }
}
