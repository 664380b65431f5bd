//! Configuration structure and shared constants for the filmstrip-core library.
//!
//! The pipeline is intentionally not user-configurable beyond the input
//! directory; the constants here exist so the sampling arity, output naming,
//! and annotation style are stated once and shared by the planner, the
//! compositor, and the tests.

use std::path::PathBuf;

/// Number of frames sampled per video and tiled into the contact sheet.
///
/// Sample offsets sit at `i * duration / (SAMPLE_FRAME_COUNT + 1)` for
/// `i = 1..=SAMPLE_FRAME_COUNT`, so the very start and end of the clip are
/// never sampled (those are often black frames, logos, or credits).
pub const SAMPLE_FRAME_COUNT: usize = 5;

/// File extensions (lowercase) eligible for processing.
pub const VIDEO_EXTENSIONS: [&str; 3] = ["mp4", "mov", "mkv"];

/// Name of the output directory created under the input root.
pub const OUTPUT_DIR_NAME: &str = "thumbs";

/// Suffix appended to the sanitized video name to form the output filename.
pub const OUTPUT_SUFFIX: &str = "_thumb.jpg";

/// Prefix for per-job scratch directories in the host temp area.
pub const SCRATCH_PREFIX: &str = "thumbs_";

/// JPEG quality passed to ffmpeg's `-q:v` for extracted frames (2 = high).
pub const FRAME_JPEG_QUALITY: &str = "2";

// ---- Annotation style (ImageMagick -annotate) ----

/// Corner the duration text is anchored to.
pub const ANNOTATION_GRAVITY: &str = "NorthWest";

/// Point size of the duration text.
pub const ANNOTATION_POINTSIZE: &str = "72";

/// Fill color of the duration text.
pub const ANNOTATION_FILL: &str = "white";

/// Background box color behind the duration text.
pub const ANNOTATION_UNDERCOLOR: &str = "black";

/// Pixel offset of the text from the anchor corner.
pub const ANNOTATION_OFFSET: &str = "+10+10";

/// Label rendered before the formatted duration.
pub const ANNOTATION_LABEL: &str = "Duração: ";

/// Paths the batch driver works with.
///
/// Created by the consumer of the library (filmstrip-cli) and passed to
/// [`generate_sheets`](crate::processing::generate_sheets).
#[derive(Debug, Clone)]
pub struct CoreConfig {
    /// Directory scanned recursively for video files
    pub input_dir: PathBuf,

    /// Directory where finished contact sheets are written
    pub output_dir: PathBuf,
}

impl CoreConfig {
    /// Builds a config for the given input root, placing the output
    /// directory at `<input>/thumbs`.
    pub fn new(input_dir: PathBuf) -> Self {
        let output_dir = input_dir.join(OUTPUT_DIR_NAME);
        Self {
            input_dir,
            output_dir,
        }
    }
}
