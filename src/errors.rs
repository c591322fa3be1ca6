use std::io;

use thiserror::Error;

/// Failures that can surface while detecting or reporting a version request.
#[derive(Debug, Error)]
pub enum VersionFlagError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid boolean value `{value}` for flag `{flag}`")]
    InvalidBoolValue { flag: String, value: String },
}
