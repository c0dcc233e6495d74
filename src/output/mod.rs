//! Walk output sinks
//!
//! - `streaming` - `LineFormatter`, the `Dir:`/`File:` line writer used by the CLI
//! - `collect` - `EntryCollector`, gathers entries in memory

mod collect;
mod streaming;

pub use collect::EntryCollector;
pub use streaming::LineFormatter;
