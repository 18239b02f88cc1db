//! Error types for buffers, the P3 codec and tool configuration.
use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Shape violations caught before any filtering happens.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EdgeError {
    #[error("image dimensions must be positive, got {width}x{height}")]
    EmptyImage { width: usize, height: usize },

    #[error("buffer holds {actual} samples, expected {expected} for the declared dimensions")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("image of {width}x{height} pixels does not fit in memory")]
    TooLarge { width: usize, height: usize },

    #[error("channel planes disagree in size: {expected:?} vs {actual:?}")]
    PlaneMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },
}

/// Failures while reading or writing plain-text PPM.
#[derive(Debug, thiserror::Error)]
pub enum PpmError {
    #[error("failed to access {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("{} is not a text file: invalid UTF-8 at byte {valid_up_to}", .path.display())]
    NotText { path: PathBuf, valid_up_to: usize },

    #[error("not a plain-text PPM: expected magic `P3`, found `{0}`")]
    BadMagic(String),

    #[error("header ended before the {0} field")]
    MissingHeader(&'static str),

    #[error("invalid token `{token}`")]
    InvalidToken { token: String },

    #[error("maxval {0} is outside the supported range 1..=255")]
    UnsupportedMaxval(u32),

    #[error("image of {width}x{height} pixels is too large")]
    TooLarge { width: usize, height: usize },

    #[error("sample {index} has value {value}, above maxval {maxval}")]
    SampleOutOfRange { index: usize, value: u32, maxval: u32 },

    #[error("pixel data truncated: expected {expected} samples, found {found}")]
    Truncated { expected: usize, found: usize },

    #[error("{extra} unexpected tokens after the pixel data")]
    TrailingData { extra: usize },

    #[error(transparent)]
    Dimensions(#[from] EdgeError),
}

/// Failures while loading a JSON tool configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Ppm(#[from] PpmError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to serialize JSON for {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
