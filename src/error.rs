//! Crate-level error types.

use std::fmt;

/// Errors produced by the plasview crate.
#[derive(Debug)]
pub enum PlasviewError {
    /// Malformed dataset text.
    DatasetParse(csv::Error),
    /// Network failure while fetching a structure payload.
    StructureFetch(String),
    /// The rendering engine rejected a structure payload.
    StructureLoad(String),
    /// Failure constructing the rendering stage.
    Stage(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for PlasviewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DatasetParse(e) => write!(f, "dataset parse error: {e}"),
            Self::StructureFetch(msg) => {
                write!(f, "structure fetch error: {msg}")
            }
            Self::StructureLoad(msg) => {
                write!(f, "structure load error: {msg}")
            }
            Self::Stage(msg) => write!(f, "stage error: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for PlasviewError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DatasetParse(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<csv::Error> for PlasviewError {
    fn from(e: csv::Error) -> Self {
        Self::DatasetParse(e)
    }
}

impl From<std::io::Error> for PlasviewError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
