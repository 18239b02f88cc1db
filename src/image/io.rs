//! File I/O helpers for PPM images and JSON.
//!
//! - `read_ppm`: load a plain-text PPM into `RgbPlanes`.
//! - `write_ppm`: write `RgbPlanes` as plain-text PPM.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::ppm::{encode_ppm, parse_ppm};
use super::rgb::RgbPlanes;
use crate::error::{Error, PpmError};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::Path;
use std::str;

/// Load a plain-text PPM from disk.
pub fn read_ppm(path: &Path) -> Result<RgbPlanes, PpmError> {
    let bytes = fs::read(path).map_err(|source| PpmError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let text = str::from_utf8(&bytes).map_err(|e| PpmError::NotText {
        path: path.to_path_buf(),
        valid_up_to: e.valid_up_to(),
    })?;
    parse_ppm(text)
}

/// Save planes as plain-text PPM, creating parent directories.
pub fn write_ppm(path: &Path, image: &RgbPlanes) -> Result<(), PpmError> {
    let io_err = |source| PpmError::Io {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(io_err)?;
    let file = File::create(path).map_err(io_err)?;
    encode_ppm(BufWriter::new(file), image).map_err(io_err)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    let write_err = |source| Error::Write {
        path: path.to_path_buf(),
        source,
    };
    ensure_parent_dir(path).map_err(write_err)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| Error::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(write_err)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
