//! CLI entry point for filewalker

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser};
use filewalker::logging::init_logging;
use filewalker::{LineFormatter, Walker, WalkerConfig};

#[derive(Parser, Debug)]
#[command(name = "filewalker")]
#[command(about = "Recursively list every file and directory under a path")]
#[command(version)]
struct Args {
    /// Directory to walk
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Order entries by name within each directory
    #[arg(long = "sort")]
    sort: bool,

    /// Log diagnostics to stderr (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let walker = Walker::new(WalkerConfig { sort: args.sort });
    let mut formatter = LineFormatter::stdout();

    if let Err(e) = walker.walk(&args.path, &mut formatter) {
        if e.is_broken_pipe() {
            return;
        }
        eprintln!("filewalker: error writing output: {}", e);
        process::exit(1);
    }
}
