//! Walker - depth-first traversal with post-order directory labels

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::Result;
use crate::output::EntryCollector;

use super::config::WalkerConfig;
use super::entry::PathEntry;
use super::traversal::{absolute_root, read_entries};

/// Callback for walk output - receives each entry as soon as it is classified.
pub trait WalkOutput {
    fn output_entry(&mut self, entry: &PathEntry) -> io::Result<()>;

    /// Called once after the last entry of a walk.
    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        Ok(())
    }
}

/// Number of entries a walk emitted. The root is not counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkSummary {
    pub dirs: usize,
    pub files: usize,
}

impl WalkSummary {
    pub fn total(&self) -> usize {
        self.dirs + self.files
    }
}

/// One directory waiting on the work stack.
struct Frame {
    path: PathBuf,
    /// The root is never printed.
    labelled: bool,
    pending: std::vec::IntoIter<PathBuf>,
}

impl Frame {
    fn new(path: PathBuf, labelled: bool, listing: Vec<PathBuf>) -> Self {
        Self {
            path,
            labelled,
            pending: listing.into_iter(),
        }
    }
}

/// Tree walker that streams entries to a [`WalkOutput`].
///
/// Pending directories live on a heap-allocated stack rather than the call
/// stack, so arbitrarily deep trees are fine. Files are emitted as they are
/// reached; a directory's own entry is emitted once everything beneath it has
/// been emitted.
///
/// Nothing is emitted for a root that is missing, is not a directory, or
/// cannot be read. A subdirectory that cannot be read is still reported, just
/// without any children.
pub struct Walker {
    config: WalkerConfig,
}

impl Walker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Walk `root` and feed every descendant to `output`.
    ///
    /// Filesystem errors are never returned; only a failing sink is.
    pub fn walk<O: WalkOutput>(&self, root: &Path, output: &mut O) -> Result<WalkSummary> {
        let mut summary = WalkSummary::default();

        let Some(root) = absolute_root(root) else {
            output.finish(&summary)?;
            return Ok(summary);
        };
        let Some(listing) = read_entries(&root, &self.config) else {
            output.finish(&summary)?;
            return Ok(summary);
        };

        let mut stack = vec![Frame::new(root, false, listing)];

        while let Some(frame) = stack.last_mut() {
            match frame.pending.next() {
                Some(entry_path) => {
                    if entry_path.is_dir() {
                        let listing = read_entries(&entry_path, &self.config).unwrap_or_default();
                        trace!(path = %entry_path.display(), children = listing.len(), "descending");
                        stack.push(Frame::new(entry_path, true, listing));
                    } else {
                        output.output_entry(&PathEntry::file(entry_path))?;
                        summary.files += 1;
                    }
                }
                None => {
                    if let Some(done) = stack.pop() {
                        if done.labelled {
                            output.output_entry(&PathEntry::directory(done.path))?;
                            summary.dirs += 1;
                        }
                    }
                }
            }
        }

        debug!(dirs = summary.dirs, files = summary.files, "walk complete");
        output.finish(&summary)?;
        Ok(summary)
    }

    /// Walk `root` and return the entries in emission order.
    pub fn collect(&self, root: &Path) -> Vec<PathEntry> {
        let mut collector = EntryCollector::new();
        // The collector's sink methods cannot fail.
        let _ = self.walk(root, &mut collector);
        collector.into_entries()
    }
}

impl Default for Walker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}

/// Walk `root` with the default configuration.
pub fn walk<O: WalkOutput>(root: &Path, output: &mut O) -> Result<WalkSummary> {
    Walker::default().walk(root, output)
}
