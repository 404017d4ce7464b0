//! Command-line interface for solving a tile file

use crate::algorithm::solver::{Solution, Solver};
use crate::analysis::patterns::Pattern;
use crate::io::configuration::DEFAULT_EXPORT_SCALE;
use crate::io::error::Result;
use crate::io::image::export_scan_as_png;
use crate::io::input::{read_pattern, read_tiles};
use crate::io::progress::SearchProgress;
use crate::io::visualization::{render_layout, render_overlay};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilejigsaw")]
#[command(
    author,
    version,
    about = "Reassemble edge-matched tiles and search the image for a pattern"
)]
/// Command-line arguments for the tile solver
pub struct Cli {
    /// Tile file to solve
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// ASCII art file replacing the default sea monster pattern
    #[arg(short, long, value_name = "FILE")]
    pub pattern: Option<PathBuf>,

    /// Write the oriented image as a PNG with pattern pixels highlighted
    #[arg(short, long, value_name = "FILE")]
    pub export: Option<PathBuf>,

    /// Output pixels per image pixel for PNG export
    #[arg(short, long, default_value_t = DEFAULT_EXPORT_SCALE)]
    pub scale: u32,

    /// Print the tile layout and the image with pattern pixels marked
    #[arg(short, long)]
    pub render: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Loads the input, solves it and reports the answers
pub struct PuzzleRunner {
    cli: Cli,
    progress: SearchProgress,
}

impl PuzzleRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress = if cli.should_show_progress() {
            SearchProgress::new()
        } else {
            SearchProgress::hidden()
        };

        Self { cli, progress }
    }

    /// Load the pattern named on the command line, or the sea monster
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern file cannot be read or marks no pixels
    pub fn load_pattern(&self) -> Result<Pattern> {
        self.cli
            .pattern
            .as_deref()
            .map_or_else(|| Ok(Pattern::sea_monster()), read_pattern)
    }

    /// Solve the input file without printing
    ///
    /// # Errors
    ///
    /// Returns an error if the input or pattern cannot be loaded, the puzzle
    /// has no solution, or the PNG export fails
    pub fn run(&self) -> Result<Solution> {
        let start_time = Instant::now();

        self.progress.stage("parsing");
        let tiles = read_tiles(&self.cli.input)?;
        let pattern = self.load_pattern()?;

        self.progress.stage("assembling");
        let solved =
            Solver::new(&tiles, &pattern).solve_with(|attempt| self.progress.record(attempt));
        self.progress.finish();
        log::debug!("{} anchor attempts", self.progress.position());
        let solution = solved?;

        if let Some(path) = &self.cli.export {
            export_scan_as_png(&solution.scan, &solution.pattern, self.cli.scale, path)?;
        }

        log::info!(
            "solved {} in {:.2?}",
            self.cli.input.display(),
            start_time.elapsed()
        );
        Ok(solution)
    }

    /// Answer lines, plus the rendered layout and overlay when requested
    pub fn report(&self, solution: &Solution) -> Vec<String> {
        let mut lines = summary_lines(solution);
        if self.cli.render {
            lines.push(String::new());
            lines.push(render_layout(&solution.grid));
            lines.push(String::new());
            lines.push(render_overlay(&solution.scan, &solution.pattern));
        }
        lines
    }

    /// Solve and print the report to standard output
    ///
    /// # Errors
    ///
    /// See [`PuzzleRunner::run`]
    // Printing the answers is the binary's purpose
    #[allow(clippy::print_stdout)]
    pub fn process(&self) -> Result<()> {
        let solution = self.run()?;
        for line in self.report(&solution) {
            println!("{line}");
        }
        Ok(())
    }
}

/// The two answer lines
pub fn summary_lines(solution: &Solution) -> Vec<String> {
    vec![
        format!("Part 1: {}", solution.corner_product),
        format!("Part 2: {}", solution.roughness),
    ]
}
