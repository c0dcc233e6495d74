//! Directory tree walking logic
//!
//! - `Walker`: depth-first traversal that streams `PathEntry` values to a
//!   `WalkOutput` sink, labelling each directory after its subtree.
//! - `traversal`: listing and root resolution helpers that absorb I/O errors.

mod config;
mod entry;
mod traversal;
mod walker;

pub use config::WalkerConfig;
pub use entry::{EntryKind, PathEntry};
pub use walker::{WalkOutput, WalkSummary, Walker, walk};
