//! Interactions with external CLI tools.
//!
//! This module encapsulates everything that shells out: ffprobe for duration
//! probing, ffmpeg for frame extraction, and ImageMagick for tiling and
//! annotation. Each tool sits behind a trait so the batch pipeline can be
//! driven by mock implementations in tests.

use crate::error::{CoreError, CoreResult};

use colored::Colorize;
use log::info;
use std::io;
use std::process::{Command, Stdio};

/// Traits and implementation for probing container duration via ffprobe
pub mod ffprobe_executor;

/// Traits and implementation for extracting still frames via ffmpeg
pub mod ffmpeg_executor;

/// Traits and implementation for tiling/annotating sheets via ImageMagick
pub mod magick_executor;

/// Mock implementations of the tool traits (feature = "test-mocks")
pub mod mocks;

pub use ffmpeg_executor::{FrameExtractor, SidecarExtractor};
pub use ffprobe_executor::{CrateFfprobeExecutor, FfprobeExecutor};
pub use magick_executor::{MagickCompositor, SheetCompositor, MAGICK_BIN};

/// Verifies that every external tool the pipeline shells out to is present.
///
/// Called once before a batch run starts; a missing tool is fatal for the
/// whole run, unlike per-file tool failures which are absorbed and logged.
pub fn verify_dependencies() -> CoreResult<()> {
    info!("{}", "Checking for required external commands...".cyan());
    for tool in ["ffmpeg", "ffprobe", MAGICK_BIN] {
        check_dependency(tool)?;
        info!("  {} {tool} found.", "[OK]".green().bold());
    }
    info!("{}", "External dependency check passed.".green());
    Ok(())
}

/// Checks that a required external command is available and executable.
///
/// Runs the command with a `-version` argument, discarding its output.
///
/// # Returns
///
/// * `Ok(())` - the command ran
/// * `Err(CoreError::DependencyNotFound)` - the command is not on PATH
/// * `Err(CoreError::CommandStart)` - the command exists but failed to start
pub(crate) fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let result = Command::new(cmd_name)
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match result {
        Ok(_) => {
            log::debug!("Found dependency: {cmd_name}");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("Dependency '{cmd_name}' not found.");
            Err(CoreError::DependencyNotFound(cmd_name.to_string()))
        }
        Err(e) => {
            log::error!("Failed to start dependency check command '{cmd_name}': {e}");
            Err(CoreError::CommandStart(cmd_name.to_string(), e))
        }
    }
}
