//! Test harness for filewalker integration tests

#![allow(dead_code)]

use std::collections::HashSet;
use std::path::Path;
use std::process::Command;

pub use filewalker::test_utils::TestTree;

pub fn run_filewalker(dir: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = env!("CARGO_BIN_EXE_filewalker");
    let output = Command::new(binary)
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run filewalker");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// Output lines as a set, for comparisons that must not depend on listing order.
pub fn line_set(stdout: &str) -> HashSet<String> {
    stdout.lines().map(str::to_string).collect()
}

pub fn file_line(path: &Path) -> String {
    format!("File:{}", path.display())
}

pub fn dir_line(path: &Path) -> String {
    format!("Dir:{}", path.display())
}

/// Index of `line` in the output, panicking with the full output if absent.
pub fn line_index(stdout: &str, line: &str) -> usize {
    stdout
        .lines()
        .position(|l| l == line)
        .unwrap_or_else(|| panic!("missing line {:?} in:\n{}", line, stdout))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_harness_creates_temp_dir() {
        let tree = TestTree::new();
        assert!(tree.path().exists());
    }

    #[test]
    fn test_harness_line_helpers() {
        let p = Path::new("/x/y");
        assert_eq!(file_line(p), "File:/x/y");
        assert_eq!(dir_line(p), "Dir:/x/y");
        assert_eq!(line_index("a\nb\n", "b"), 1);
    }
}
