//! FFprobe integration for duration probing.
//!
//! The only metadata the pipeline needs is the container duration in
//! seconds. The `ffprobe` crate shells out to the ffprobe binary and parses
//! its JSON; the `format.duration` field supplies the value.

use crate::error::{command_failed_error, command_start_error, CoreError, CoreResult};
use ffprobe::{ffprobe, FfProbeError};
use std::path::Path;

/// Probes a media file's container duration.
///
/// One attempt only; the batch driver treats any error (or a non-positive
/// value) as invalid input, skipping the file and continuing the batch.
pub trait FfprobeExecutor {
    /// Returns the container duration of `input_path` in seconds.
    fn probe_duration_secs(&self, input_path: &Path) -> CoreResult<f64>;
}

/// Production implementation backed by the `ffprobe` crate.
#[derive(Debug, Clone, Default)]
pub struct CrateFfprobeExecutor;

impl CrateFfprobeExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl FfprobeExecutor for CrateFfprobeExecutor {
    fn probe_duration_secs(&self, input_path: &Path) -> CoreResult<f64> {
        log::debug!(
            "Running ffprobe (via crate) for container duration on: {}",
            input_path.display()
        );
        match ffprobe(input_path) {
            Ok(metadata) => metadata
                .format
                .duration
                .as_deref()
                .and_then(|d| d.parse::<f64>().ok())
                .ok_or_else(|| {
                    CoreError::FfprobeParse(format!(
                        "No parsable duration in format section for {}",
                        input_path.display()
                    ))
                }),
            Err(err) => {
                log::warn!(
                    "ffprobe failed for container duration on {}: {err:?}",
                    input_path.display()
                );
                Err(map_ffprobe_error(err, "container duration"))
            }
        }
    }
}

fn map_ffprobe_error(err: FfProbeError, context: &str) -> CoreError {
    match err {
        FfProbeError::Io(io_err) => command_start_error(format!("ffprobe ({context})"), io_err),
        FfProbeError::Status(output) => {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            command_failed_error(format!("ffprobe ({context})"), output.status, stderr)
        }
        FfProbeError::Deserialize(err) => CoreError::FfprobeParse(format!(
            "ffprobe {context} output deserialization: {err}"
        )),
        _ => CoreError::FfprobeParse(format!("Unknown ffprobe error during {context}: {err:?}")),
    }
}
