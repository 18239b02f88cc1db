use crate::error::ConfigError;
use crate::pipeline::PipelineOptions;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    pub input: PathBuf,
    pub output: EdgeOutputConfig,
    #[serde(default)]
    pub pipeline: PipelineOptions,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    pub image: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_config(json: &str) -> Result<EdgeToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
