//! Core library for generating video contact sheets with ffmpeg, ffprobe,
//! and ImageMagick.
//!
//! This crate provides video file discovery, filename sanitization, sample
//! planning, and the orchestration of the external tools that do the actual
//! decoding and image composition.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use filmstrip_core::{
//!     generate_sheets, find_video_files, CoreConfig, CrateFfprobeExecutor,
//!     MagickCompositor, SidecarExtractor,
//! };
//! use std::path::PathBuf;
//!
//! let config = CoreConfig::new(PathBuf::from("/path/to/videos"));
//! std::fs::create_dir_all(&config.output_dir).unwrap();
//!
//! filmstrip_core::external::verify_dependencies().unwrap();
//! let files = find_video_files(&config.input_dir).unwrap();
//!
//! let results = generate_sheets(
//!     &CrateFfprobeExecutor::new(),
//!     &SidecarExtractor,
//!     &MagickCompositor,
//!     &config,
//!     &files,
//! ).unwrap();
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod external;
pub mod planning;
pub mod processing;
pub mod sanitize;
pub mod temp_files;
pub mod utils;

// Re-exports for public API
pub use config::CoreConfig;
pub use discovery::find_video_files;
pub use error::{CoreError, CoreResult};
pub use external::{
    CrateFfprobeExecutor, FfprobeExecutor, FrameExtractor, MagickCompositor, SheetCompositor,
    SidecarExtractor,
};
pub use processing::generate_sheets;
pub use sanitize::sanitize_name;
pub use utils::{format_bytes, format_duration, parse_hms};

use std::path::PathBuf;
use std::time::Duration;

/// Result of one contact-sheet job, returned by
/// [`generate_sheets`] for each successfully processed video file.
#[derive(Debug, Clone)]
pub struct SheetResult {
    /// Source video filename (with extension)
    pub filename: String,
    /// Container duration reported by the probe, in seconds
    pub duration_secs: f64,
    /// Wall-clock time spent on this file
    pub elapsed: Duration,
    /// Final path of the written contact sheet
    pub output_path: PathBuf,
    /// Size of the written sheet in bytes
    pub output_size: u64,
}
