//! Dataset loading entry points.
//!
//! # Responsibility
//! - Decode an authored JSON case document into records.
//! - Keep file and parse failures at this boundary; the query engine never
//!   sees them.
//!
//! # Invariants
//! - Missing optional record fields are tolerated.
//! - Record order in the document is preserved.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod load;

pub use load::{load_cases, parse_cases};

pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug)]
pub enum DatasetError {
    /// Dataset file cannot be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Document is not a valid case array.
    Parse(serde_json::Error),
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read dataset `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid dataset document: {err}"),
        }
    }
}

impl Error for DatasetError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}
