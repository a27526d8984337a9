//! Command-line interface and batch file processing

use clap::Parser;
use std::path::{Path, PathBuf};

use crate::algorithm::executor::{Solution, solve_input};
use crate::analysis::pattern::Pattern;
use crate::analysis::search;
use crate::io::configuration::{INPUT_EXTENSION, RENDER_SUFFIX, SEA_MONSTER};
use crate::io::error::{Result, SolverError};
use crate::io::image::export_composite_png;
use crate::io::progress::ProgressManager;

#[derive(Parser)]
#[command(name = "tilestitch")]
#[command(
    author,
    version,
    about = "Reassemble scrambled image tiles and search the result for a pixel pattern"
)]
/// Command-line arguments for the tile reassembly solver
pub struct Cli {
    /// Puzzle input file, or a directory whose .txt files are each solved
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Export the assembled composite as a PNG next to the input
    #[arg(short, long)]
    pub render: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates solving one or many puzzle inputs with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Solve every collected input file in order
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, reading, solving, or
    /// rendering fails; the first failing file aborts the batch.
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let multiple = files.len() > 1;
        for file in &files {
            self.process_file(file, multiple)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            Ok(vec![self.cli.target.clone()])
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|ext| ext.to_str()) == Some(INPUT_EXTENSION) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(SolverError::InvalidTarget {
                path: self.cli.target.clone(),
                reason: "target must be an existing file or directory",
            })
        }
    }

    fn process_file(&mut self, input_path: &Path, multiple: bool) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let input =
            std::fs::read_to_string(input_path).map_err(|source| SolverError::FileSystem {
                path: input_path.to_path_buf(),
                operation: "read",
                source,
            })?;

        let solution = solve_input(&input)?;
        Self::print_solution(input_path, &solution, multiple);

        if self.cli.render {
            let pattern = Pattern::from_rows(&SEA_MONSTER)?;
            let covered = search::coverage(&solution.composite, &pattern, &solution.matches);
            export_composite_png(
                &solution.composite,
                &covered,
                &Self::render_path(input_path),
            )?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    // Results go to stdout; this is the program's one output channel
    #[allow(clippy::print_stdout)]
    fn print_solution(input_path: &Path, solution: &Solution, multiple: bool) {
        if multiple {
            println!("{}:", input_path.display());
        }
        println!("Part 1: {}", solution.corner_checksum);
        println!("Part 2: {}", solution.roughness);
    }

    /// Path for the rendered composite next to the input file
    pub fn render_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let render_name = format!("{}{RENDER_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(render_name)
        } else {
            PathBuf::from(render_name)
        }
    }
}
