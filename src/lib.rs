//! Filewalker - recursively list every file and directory under a path

pub mod error;
pub mod logging;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use output::{EntryCollector, LineFormatter};
pub use tree::{EntryKind, PathEntry, WalkOutput, WalkSummary, Walker, WalkerConfig, walk};
