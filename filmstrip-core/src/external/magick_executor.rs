//! ImageMagick integration for tiling and annotation.
//!
//! Two invocations per job: one `+append` to concatenate the extracted
//! frames left-to-right into a single sheet, and one `-annotate` to burn the
//! formatted duration text into a corner of that sheet in place.

use crate::config::{
    ANNOTATION_FILL, ANNOTATION_GRAVITY, ANNOTATION_OFFSET, ANNOTATION_POINTSIZE,
    ANNOTATION_UNDERCOLOR,
};
use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};

use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Name of the ImageMagick binary invoked for composition and annotation.
pub const MAGICK_BIN: &str = "magick";

/// Composes extracted frames into a contact sheet and annotates it.
pub trait SheetCompositor {
    /// Horizontally concatenates `frame_paths` (left to right, in order)
    /// into a single image at `output_path`.
    fn append_frames(&self, frame_paths: &[PathBuf], output_path: &Path) -> CoreResult<()>;

    /// Overlays `text` onto the image at `image_path`, rewriting it in place.
    fn annotate_duration(&self, image_path: &Path, text: &str) -> CoreResult<()>;
}

/// Production implementation shelling out to the `magick` binary.
#[derive(Debug, Clone, Default)]
pub struct MagickCompositor;

impl SheetCompositor for MagickCompositor {
    fn append_frames(&self, frame_paths: &[PathBuf], output_path: &Path) -> CoreResult<()> {
        log::debug!(
            "Tiling {} frame(s) into {}",
            frame_paths.len(),
            output_path.display()
        );
        let mut cmd = Command::new(MAGICK_BIN);
        cmd.args(frame_paths).arg("+append").arg(output_path);
        run_magick(cmd, "magick (+append)")
    }

    fn annotate_duration(&self, image_path: &Path, text: &str) -> CoreResult<()> {
        log::debug!("Annotating {} with {text:?}", image_path.display());
        let mut cmd = Command::new(MAGICK_BIN);
        cmd.arg(image_path)
            .args(["-gravity", ANNOTATION_GRAVITY])
            .args(["-pointsize", ANNOTATION_POINTSIZE])
            .args(["-fill", ANNOTATION_FILL])
            .args(["-undercolor", ANNOTATION_UNDERCOLOR])
            .args(["-annotate", ANNOTATION_OFFSET])
            .arg(text)
            .arg(image_path);
        run_magick(cmd, "magick (-annotate)")
    }
}

fn run_magick(mut cmd: Command, context: &str) -> CoreResult<()> {
    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => CoreError::DependencyNotFound(MAGICK_BIN.to_string()),
            _ => command_start_error(context, e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(command_failed_error(context, output.status, stderr));
    }
    Ok(())
}
