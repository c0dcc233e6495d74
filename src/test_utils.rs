//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests, benchmarks, and the `test-utils`
//! feature.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped.
pub struct TestTree {
    #[allow(dead_code)]
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        // A child process started inside the tree sees the resolved path as
        // its cwd, so hand out the same form here.
        let root = dir.path().canonicalize().expect("Failed to resolve temp dir");
        Self { dir, root }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Add a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and any missing parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Build a balanced tree `depth` levels deep with `width` subdirectories
    /// and `width` files in every directory.
    pub fn populate(&self, depth: usize, width: usize) {
        fn fill(dir: &Path, depth: usize, width: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{}.txt", i)), "x").expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{}", i));
                fs::create_dir(&sub).expect("Failed to create dir");
                fill(&sub, depth - 1, width);
            }
        }
        fill(&self.root, depth, width);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Permission helpers for unreadable-directory tests.
#[cfg(unix)]
pub mod perms {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Drops read/execute permission on a directory and restores it when
    /// dropped so the temp dir can be cleaned up.
    pub struct Locked {
        path: PathBuf,
    }

    impl Locked {
        pub fn new(path: &Path) -> Self {
            let mut perms = fs::metadata(path)
                .expect("Failed to stat dir")
                .permissions();
            perms.set_mode(0o000);
            fs::set_permissions(path, perms).expect("Failed to set permissions");
            Self {
                path: path.to_path_buf(),
            }
        }

        /// Root and CAP_DAC_OVERRIDE ignore the mode bits; tests that depend
        /// on a denied listing check this first.
        pub fn is_enforced(&self) -> bool {
            fs::read_dir(&self.path).is_err()
        }
    }

    impl Drop for Locked {
        fn drop(&mut self) {
            if let Ok(meta) = fs::metadata(&self.path) {
                let mut perms = meta.permissions();
                perms.set_mode(0o755);
                let _ = fs::set_permissions(&self.path, perms);
            }
        }
    }
}
