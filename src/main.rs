//! CLI entry point for the edge-matching tile solver

use clap::Parser;
use tilejigsaw::io::cli::{Cli, PuzzleRunner};
use tilejigsaw::io::logging::init_logging;

fn main() -> tilejigsaw::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;
    let runner = PuzzleRunner::new(cli);
    runner.process()
}
