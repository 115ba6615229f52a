//! Splits every image under an input tree into four quadrant thumbnails.
//!
//! A run creates one timestamped folder under the results root, walks the
//! input root and writes `<name>_part1.png` .. `<name>_part4.png` for each
//! `.jpg`, `.jpeg` or `.png` file it finds. The first error stops the run.

pub mod config;
pub mod error;
pub mod geometry;
pub mod run;
pub mod transform;
pub mod walk;

pub use config::RunConfig;
pub use error::{Error, Result};
pub use geometry::{quadrants, Rect};
pub use run::{short_hash, RunFolder};
pub use transform::{output_file_name, process_image, split_image, OutputEncoding};
pub use walk::{is_candidate, process_tree, RunSummary};

/// Creates a fresh run folder for the current second and processes the tree.
pub fn run(config: &RunConfig) -> Result<RunSummary> {
    let run_folder = RunFolder::now(&config.results_root);
    run_folder.create()?;

    process_tree(config, &run_folder)
}
