//! Error set that can occur while generating code during the build step.
use std::env::VarError;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
/// Errors returned by the build script (JSON parsing, code generation, etc.).
pub(crate) enum BuildError {
    #[error("invalid bit length for field {field} of PGN {pgn}: {comment}")]
    BitLengthErr {
        pgn: u32,
        field: String,
        comment: &'static str,
    },

    #[error("OUT_DIR error: {source}")]
    OutDirErr {
        #[source]
        source: VarError,
    },

    #[error("invalid JSON: {0}")]
    ParseJson(#[from] serde_json::Error),

    #[error("failed to read file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write file {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to emit generated source: {source}")]
    WritelnErr {
        #[from]
        source: std::fmt::Error,
    },

    #[error("failed to emit generated source: {source}")]
    WritelnIoErr {
        #[from]
        source: io::Error,
    },

    #[error("PGN {pgn} field {field} references unknown lookup table {table}")]
    UnknownLookupTable { pgn: u32, field: String, table: String },
}
