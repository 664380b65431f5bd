//! Main contact-sheet orchestration.
//!
//! Runs the per-file pipeline sequentially over the discovered videos:
//! probe duration, plan sample points, extract one frame per point, tile the
//! frames into a sheet, burn in the duration text, and atomically move the
//! finished sheet into the output directory. A single file's failure is
//! logged and never halts the batch.

use crate::config::{CoreConfig, ANNOTATION_LABEL, OUTPUT_SUFFIX};
use crate::error::{CoreError, CoreResult};
use crate::external::{FfprobeExecutor, FrameExtractor, SheetCompositor};
use crate::planning::plan_sample_offsets;
use crate::sanitize::sanitize_name;
use crate::temp_files::create_scratch_dir;
use crate::utils::{format_duration, get_filename_safe};
use crate::SheetResult;

use colored::Colorize;
use log::{debug, error, info, warn};

use std::collections::hash_map::DefaultHasher;
use std::collections::HashSet;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Generates one contact sheet per input file.
///
/// Generic over the external-tool traits so tests can drive the pipeline
/// with mock implementations:
///
/// * `P`: [`FfprobeExecutor`] - duration probing
/// * `E`: [`FrameExtractor`] - per-sample frame extraction
/// * `C`: [`SheetCompositor`] - tiling and annotation
///
/// Files are processed strictly one after another; every external invocation
/// blocks until the tool exits. Per-file errors (unreadable media, invalid
/// duration, tool failures) are logged and skipped; only traversal-level
/// problems propagate to the caller.
///
/// # Returns
///
/// * `Ok(Vec<SheetResult>)` - one entry per successfully written sheet
pub fn generate_sheets<P: FfprobeExecutor, E: FrameExtractor, C: SheetCompositor>(
    prober: &P,
    extractor: &E,
    compositor: &C,
    config: &CoreConfig,
    files_to_process: &[PathBuf],
) -> CoreResult<Vec<SheetResult>> {
    let mut results: Vec<SheetResult> = Vec::new();
    let mut claimed_names: HashSet<String> = HashSet::new();

    for input_path in files_to_process {
        let file_start_time = Instant::now();

        let filename = match get_filename_safe(input_path) {
            Ok(name) => name,
            Err(e) => {
                error!("Skipping entry with unusable path: {e}");
                continue;
            }
        };

        info!("{} {}", "Processing:".cyan().bold(), filename.yellow());

        // Invalid input: log one warning, move on to the next file.
        let duration_secs = match prober.probe_duration_secs(input_path) {
            Ok(d) if d > 0.0 => d,
            Ok(d) => {
                warn!("Skipping {filename}: invalid container duration ({d}s)");
                info!("----------------------------------------");
                continue;
            }
            Err(e) => {
                warn!("Skipping {filename}: duration probe failed: {e}");
                info!("----------------------------------------");
                continue;
            }
        };
        debug!(
            "Container duration for {filename}: {duration_secs}s ({})",
            format_duration(duration_secs)
        );

        let safe_name = claim_output_name(input_path, &mut claimed_names);

        match build_sheet(
            extractor,
            compositor,
            config,
            input_path,
            &safe_name,
            duration_secs,
        ) {
            Ok(output_path) => {
                let output_size = fs::metadata(&output_path).map(|m| m.len()).unwrap_or(0);
                info!(
                    "{} {}",
                    "Sheet written:".green(),
                    output_path.display()
                );
                results.push(SheetResult {
                    filename,
                    duration_secs,
                    elapsed: file_start_time.elapsed(),
                    output_path,
                    output_size,
                });
            }
            Err(e) => {
                error!("Failed to build contact sheet for {filename}: {e}");
            }
        }
        info!("----------------------------------------");
    }

    Ok(results)
}

/// Runs the pipeline for a single video and returns the final sheet path.
///
/// The extracted frames live in a scratch directory that is removed when
/// this function returns, success or failure. The sheet is tiled and
/// annotated at a hidden staging path inside the output directory and only
/// renamed into place once fully finished, so a half-done sheet is never
/// visible at the public path.
fn build_sheet<E: FrameExtractor, C: SheetCompositor>(
    extractor: &E,
    compositor: &C,
    config: &CoreConfig,
    input_path: &Path,
    safe_name: &str,
    duration_secs: f64,
) -> CoreResult<PathBuf> {
    let scratch_dir = create_scratch_dir(safe_name)?;

    let offsets = plan_sample_offsets(duration_secs);
    let mut frame_paths: Vec<PathBuf> = Vec::with_capacity(offsets.len());
    for (index, offset) in offsets.iter().enumerate() {
        let seek = format_duration(*offset);
        let frame_path = scratch_dir.path().join(format!("thumb_{}.jpg", index + 1));
        extractor.extract_frame(input_path, &seek, &frame_path)?;
        if !frame_path.exists() {
            // Never compose from a missing frame.
            return Err(CoreError::FrameMissing(frame_path));
        }
        frame_paths.push(frame_path);
    }

    let final_path = config.output_dir.join(format!("{safe_name}{OUTPUT_SUFFIX}"));
    let staging_path = config
        .output_dir
        .join(format!(".{safe_name}{OUTPUT_SUFFIX}.tmp"));

    let finished: CoreResult<()> = (|| {
        compositor.append_frames(&frame_paths, &staging_path)?;
        let annotation = format!("{ANNOTATION_LABEL}{}", format_duration(duration_secs));
        compositor.annotate_duration(&staging_path, &annotation)?;
        // Staging and final path share a directory, so the rename is atomic.
        fs::rename(&staging_path, &final_path)?;
        Ok(())
    })();

    if let Err(e) = finished {
        let _ = fs::remove_file(&staging_path);
        return Err(e);
    }

    Ok(final_path)
}

/// Derives the output name token for a source file, disambiguating
/// sanitization collisions.
///
/// The first file to claim a sanitized token keeps it bare; a later file
/// sanitizing to the same token gets a short hash of its full path appended,
/// so two distinct sources can never overwrite each other's sheet within a
/// run.
fn claim_output_name(input_path: &Path, claimed: &mut HashSet<String>) -> String {
    let base_name = input_path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let safe_name = sanitize_name(&base_name);

    if claimed.insert(safe_name.clone()) {
        return safe_name;
    }

    let mut hasher = DefaultHasher::new();
    input_path.hash(&mut hasher);
    let disambiguated = format!("{safe_name}_{:08x}", hasher.finish() as u32);
    warn!(
        "Output name collision on '{safe_name}' for {}; using '{disambiguated}'",
        input_path.display()
    );
    claimed.insert(disambiguated.clone());
    disambiguated
}
