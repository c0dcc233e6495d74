//! Configuration types for the walker

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Order each directory listing by file name before descending.
    /// Off by default: entries come in whatever order the filesystem
    /// returns them.
    pub sort: bool,
}

impl WalkerConfig {
    pub fn sorted() -> Self {
        Self { sort: true }
    }
}
