//! Failure taxonomy for the ARC schema gate.
//!
//! Every variant is terminal for a run; the workflow never retries or skips a
//! proposal that fails here.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArcError {
    #[error("read ARC root {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not find {}", .path.display())]
    MissingDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is missing '{field}'", .path.display())]
    MissingField { path: PathBuf, field: &'static str },

    #[error(
        "ARC directory ID ({expected}) does not match the ARC ID in {} ({actual})",
        .path.display()
    )]
    IdMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("ARC {field} cannot be empty in {}", .path.display())]
    EmptyField { path: PathBuf, field: &'static str },

    #[error("ARC {field} ({value}) in {} is not an accepted {field}", .path.display())]
    InvalidEnum {
        path: PathBuf,
        field: &'static str,
        value: String,
    },

    #[error("{} is empty", .path.display())]
    EmptyBody { path: PathBuf },

    #[error(
        "ARC {id} is defined by both {} and {}",
        .first.display(),
        .second.display()
    )]
    DuplicateId {
        id: u32,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("write {}", .path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
