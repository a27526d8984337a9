//! CLI entry point for the tile reassembly solver

use clap::Parser;
use tilestitch::io::cli::{Cli, FileProcessor};

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
