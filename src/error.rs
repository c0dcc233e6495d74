//! Error types surfaced by a walk
//!
//! Filesystem failures never show up here: an unreadable directory is skipped
//! where it is found. The only thing a caller can see fail is the sink the
//! entries are written to.

use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Output(#[from] io::Error),
}

impl Error {
    /// True when the reader on the other end of the sink went away
    /// (e.g. `filewalker | head`).
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Error::Output(e) => e.kind() == io::ErrorKind::BrokenPipe,
        }
    }
}
