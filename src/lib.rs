//! Notelogo
//!
//! Procedurally draws the notepad logo (dark frame, white panel, five text
//! lines with one highlighted) at any supported resolution and writes the
//! results as transparent PNG files.
//!
//! # Features
//!
//! - **Deterministic**: the layout is a pure function of the canvas size, and
//!   the rasterizer does no anti-aliasing, so output is bit-exact everywhere
//! - **Batch output**: renders a set of sizes in parallel and reports results in order
//! - **Manifest**: optional JSON listing of written files with SHA-256 digests
//!
//! # Example
//!
//! ```no_run
//! use notelogo::{IconSetConfig, output};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = IconSetConfig {
//!     out_dir: "icons".into(),
//!     ..Default::default()
//! };
//! for icon in output::write_icons(&config)? {
//!     println!("Created {}", icon.file);
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod output;
pub mod rendering;

pub use rendering::layout::{layout_logo, LogoLayout, MAX_SIZE, MIN_SIZE};
pub use rendering::paint::Palette;
pub use rendering::{check_size, render, render_png, RenderedIcon};

/// Sizes written by a default run, in output order.
pub const DEFAULT_SIZES: [u32; 4] = [1024, 128, 48, 16];

/// One icon to produce: a canvas size and the file it is saved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTarget {
    pub size: u32,
    pub file_name: String,
}

impl IconTarget {
    pub fn new(size: u32, file_name: impl Into<String>) -> Self {
        Self {
            size,
            file_name: file_name.into(),
        }
    }

    /// Target named by the stock convention: `logo-1024.png` for the large
    /// master, `logo{size}.png` for everything else.
    ///
    /// ```
    /// assert_eq!(notelogo::IconTarget::for_size(1024).file_name, "logo-1024.png");
    /// assert_eq!(notelogo::IconTarget::for_size(48).file_name, "logo48.png");
    /// ```
    pub fn for_size(size: u32) -> Self {
        let file_name = if size == 1024 {
            "logo-1024.png".to_string()
        } else {
            format!("logo{}.png", size)
        };
        Self::new(size, file_name)
    }
}

/// Configuration for a batch of icons
///
/// The defaults reproduce the stock icon set: sizes 1024, 128, 48 and 16
/// written to the current directory, one worker per CPU, no manifest.
///
/// # Examples
///
/// ```
/// let cfg = notelogo::IconSetConfig::default();
/// assert_eq!(cfg.targets.len(), 4);
/// assert_eq!(cfg.targets[1].file_name, "logo128.png");
/// ```
#[derive(Debug, Clone)]
pub struct IconSetConfig {
    /// Directory the PNG files are written to (created if missing)
    pub out_dir: PathBuf,
    /// Icons to render, in reporting order
    pub targets: Vec<IconTarget>,
    /// Maximum number of icons rendered concurrently
    pub jobs: usize,
    /// Optional manifest path, relative to `out_dir` unless absolute
    pub manifest: Option<PathBuf>,
}

impl Default for IconSetConfig {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            targets: DEFAULT_SIZES.iter().copied().map(IconTarget::for_size).collect(),
            jobs: num_cpus::get(),
            manifest: None,
        }
    }
}

impl IconSetConfig {
    /// Replace the targets with conventionally named icons for `sizes`.
    pub fn with_sizes(mut self, sizes: &[u32]) -> Self {
        self.targets = sizes.iter().copied().map(IconTarget::for_size).collect();
        self
    }

    /// Reject configurations that cannot produce a well-defined set of files.
    ///
    /// Sizes are checked here so a bad target fails the batch before any file is written.
    pub fn validate(&self) -> Result<()> {
        if self.targets.is_empty() {
            return Err(Error::ConfigError("no icon targets".into()));
        }
        if self.jobs == 0 {
            return Err(Error::ConfigError("jobs must be at least 1".into()));
        }
        for (i, t) in self.targets.iter().enumerate() {
            check_size(t.size)?;
            if t.file_name.trim().is_empty() {
                return Err(Error::ConfigError(format!("target {} has an empty file name", i)));
            }
            if self.targets[..i].iter().any(|o| o.file_name == t.file_name) {
                return Err(Error::ConfigError(format!(
                    "file name {} is used by more than one target",
                    t.file_name
                )));
            }
        }
        Ok(())
    }
}
