//! Error type shared by every stage of a run.
//!
//! Each variant is fatal: nothing in the crate recovers from one, the
//! batch stops at the first error and the caller decides how to exit.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The run folder (or one of its parents) could not be created
    #[error("failed to create run folder {}: {source}", .path.display())]
    CreateRunFolder {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Traversal of the input root failed (permissions, missing root, I/O)
    #[error("failed to walk {}: {source}", .path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },

    /// The source file could not be opened or decoded
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// An output file could not be created
    #[error("failed to create {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Encoding or flushing an output file failed
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl Error {
    /// Path of the file or directory the error is about.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Error::CreateRunFolder { path, .. }
            | Error::Walk { path, .. }
            | Error::Decode { path, .. }
            | Error::CreateOutput { path, .. }
            | Error::Encode { path, .. } => path,
        }
    }
}
