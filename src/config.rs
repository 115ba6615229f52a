use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_ROOT: &str = "./images";
pub const DEFAULT_RESULTS_ROOT: &str = "results";
pub const THUMBNAIL_EDGE: u32 = 120;
pub const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Everything a run needs to know about where to read and write.
///
/// The binary always uses `RunConfig::default()`; other values exist so the
/// library can be pointed at scratch directories.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub input_root: PathBuf,
    pub results_root: PathBuf,
    /// Width and height of every output thumbnail.
    pub thumbnail_edge: u32,
    /// Lowercase extensions without the leading dot.
    pub extensions: Vec<String>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::with_roots(DEFAULT_INPUT_ROOT, DEFAULT_RESULTS_ROOT)
    }
}

impl RunConfig {
    pub fn with_roots(input_root: impl AsRef<Path>, results_root: impl AsRef<Path>) -> Self {
        Self {
            input_root: input_root.as_ref().to_path_buf(),
            results_root: results_root.as_ref().to_path_buf(),
            thumbnail_edge: THUMBNAIL_EDGE,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
        }
    }
}
