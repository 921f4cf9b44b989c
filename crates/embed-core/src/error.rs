//! Error types for the embed pipeline.
//!
//! Every error aborts the whole run; there is no skip-and-continue mode.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EmbedError {
    /// Directory or file could not be read, or the artifact could not be written.
    #[error("filesystem error at {path:?}: {source}")]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File content could not be decoded as text.
    #[error("could not decode {path:?} as text: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Two source files reduce to the same generated identifier.
    #[error("duplicate shader identifier '{identifier}'")]
    DuplicateIdentifier { identifier: String },
}
