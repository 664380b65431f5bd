//! FFmpeg integration for single-frame extraction.
//!
//! Each sample point becomes one ffmpeg invocation that seeks to the
//! timestamp and dumps exactly one JPEG frame into the job's scratch
//! directory. Every invocation's exit status is checked: a failed or
//! missing frame aborts the job before composition, so the compositor never
//! sees an incomplete frame set.

use crate::config::FRAME_JPEG_QUALITY;
use crate::error::{
    command_failed_error, command_start_error, command_wait_error, CoreError, CoreResult,
};

use ffmpeg_sidecar::command::FfmpegCommand;
use ffmpeg_sidecar::event::{FfmpegEvent, LogLevel};
use std::path::Path;

/// Extracts one still frame at a given seek timestamp.
pub trait FrameExtractor {
    /// Seeks to `seek_hms` (an `HH:MM:SS` string) in `input_path` and writes
    /// exactly one JPEG frame to `output_path`.
    fn extract_frame(&self, input_path: &Path, seek_hms: &str, output_path: &Path)
        -> CoreResult<()>;
}

/// Production implementation backed by ffmpeg-sidecar.
#[derive(Debug, Clone, Default)]
pub struct SidecarExtractor;

impl FrameExtractor for SidecarExtractor {
    fn extract_frame(
        &self,
        input_path: &Path,
        seek_hms: &str,
        output_path: &Path,
    ) -> CoreResult<()> {
        log::debug!(
            "Extracting frame at {} from {} to {}",
            seek_hms,
            input_path.display(),
            output_path.display()
        );

        let mut cmd = FfmpegCommand::new();
        cmd.hide_banner()
            .seek(seek_hms)
            .input(input_path.to_string_lossy().as_ref())
            .args(["-frames:v", "1", "-q:v", FRAME_JPEG_QUALITY])
            .overwrite()
            .output(output_path.to_string_lossy().as_ref());

        let mut child = cmd
            .spawn()
            .map_err(|e| command_start_error("ffmpeg (frame extract)", e))?;

        // Drain the event stream so a chatty stderr cannot stall the child;
        // keep error lines for the failure report.
        let mut error_lines: Vec<String> = Vec::new();
        let events = child.iter().map_err(|e| {
            CoreError::OperationFailed(format!("ffmpeg (frame extract) event stream: {e}"))
        })?;
        for event in events {
            match event {
                FfmpegEvent::Error(line) | FfmpegEvent::Log(LogLevel::Error, line) => {
                    error_lines.push(line);
                }
                _ => {}
            }
        }

        let status = child
            .wait()
            .map_err(|e| command_wait_error("ffmpeg (frame extract)", e))?;
        if !status.success() {
            return Err(command_failed_error(
                "ffmpeg (frame extract)",
                status,
                error_lines.join("\n"),
            ));
        }

        // ffmpeg can exit 0 without producing output when a seek lands past
        // the end of the stream.
        if !output_path.exists() {
            return Err(CoreError::FrameMissing(output_path.to_path_buf()));
        }

        Ok(())
    }
}
