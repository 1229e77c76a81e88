//! Writes a [`Note`] to disk.
//!
//! The destination is created or truncated; its parent directory must
//! already exist. There is no locking, so concurrent writers race and the
//! last one wins.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::note::Note;

/// Failure to put a note on disk.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The destination could not be created or truncated.
    #[error("failed to open {} for writing", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file opened but its bytes could not be written out.
    #[error("failed to write note to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl WriteError {
    /// Destination the failed write was aimed at.
    pub fn path(&self) -> &Path {
        match self {
            Self::Open { path, .. } | Self::Write { path, .. } => path,
        }
    }

    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Open { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

/// Outcome of a successful [`write_note`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Written {
    pub path: PathBuf,
    pub bytes: usize,
}

impl Written {
    /// The line printed once the note is on disk.
    pub fn confirmation(&self) -> String {
        format!("Nota salva com sucesso em: {}", self.path.display())
    }
}

/// Write the note's content to its destination as UTF-8.
///
/// # Errors
/// Returns [`WriteError::Open`] if the destination cannot be created or
/// truncated (missing directory, permissions), and [`WriteError::Write`] if
/// the bytes cannot be written out.
pub fn write_note(note: &Note<'_>) -> Result<Written, WriteError> {
    let path = note.destination();
    debug!(path = %path.display(), "opening note destination");

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|source| {
            warn!(path = %path.display(), error = %source, "open failed");
            WriteError::Open {
                path: path.to_path_buf(),
                source,
            }
        })?;

    let content = note.content().as_bytes();
    file.write_all(content)
        .and_then(|()| file.flush())
        .map_err(|source| {
            warn!(path = %path.display(), error = %source, "write failed");
            WriteError::Write {
                path: path.to_path_buf(),
                source,
            }
        })?;
    drop(file);

    debug!(path = %path.display(), bytes = content.len(), "note written");
    Ok(Written {
        path: path.to_path_buf(),
        bytes: content.len(),
    })
}
