//! Streaming line formatter
//!
//! This module provides `LineFormatter` which writes one `Dir:`/`File:` line
//! per entry as the walker produces it.

use std::io::{self, BufWriter, StdoutLock, Write};

use crate::tree::{PathEntry, WalkOutput, WalkSummary};

/// Writes each entry on its own line. Implements the WalkOutput trait for use
/// with Walker.
pub struct LineFormatter<W: Write> {
    out: W,
}

impl<W: Write> LineFormatter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl LineFormatter<BufWriter<StdoutLock<'static>>> {
    /// Buffered, locked stdout. Flushed by `finish`.
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> WalkOutput for LineFormatter<W> {
    /// The path is written as raw OS bytes, so names that are not valid
    /// UTF-8 come out unchanged rather than with replacement characters.
    fn output_entry(&mut self, entry: &PathEntry) -> io::Result<()> {
        write!(self.out, "{}:", entry.kind().label())?;
        self.out.write_all(entry.path().as_os_str().as_encoded_bytes())?;
        self.out.write_all(b"\n")
    }

    fn finish(&mut self, _summary: &WalkSummary) -> io::Result<()> {
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_one_line_per_entry() {
        let mut formatter = LineFormatter::new(Vec::new());
        formatter
            .output_entry(&PathEntry::file(PathBuf::from("/r/b/c.txt")))
            .unwrap();
        formatter
            .output_entry(&PathEntry::directory(PathBuf::from("/r/b")))
            .unwrap();
        formatter.finish(&WalkSummary { dirs: 1, files: 1 }).unwrap();

        let text = String::from_utf8(formatter.into_inner()).unwrap();
        assert_eq!(text, "File:/r/b/c.txt\nDir:/r/b\n");
    }

    #[test]
    #[cfg(unix)]
    fn test_non_utf8_name_written_verbatim() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from("/r").join(OsStr::from_bytes(b"bad\xffname"));
        let mut formatter = LineFormatter::new(Vec::new());
        formatter.output_entry(&PathEntry::file(path)).unwrap();

        assert_eq!(formatter.into_inner(), b"File:/r/bad\xffname\n".to_vec());
    }

    #[test]
    fn test_finish_writes_nothing() {
        let mut formatter = LineFormatter::new(Vec::new());
        formatter.finish(&WalkSummary::default()).unwrap();
        assert!(formatter.into_inner().is_empty());
    }
}
