//! Temporary file management utilities.
//!
//! Each job gets its own scratch directory in the host temp area for the
//! extracted frames. The tempfile crate handles removal via the Drop trait,
//! so the scratch space goes away on every exit path, success or failure.

use crate::config::SCRATCH_PREFIX;
use crate::error::CoreResult;
use tempfile::{Builder as TempFileBuilder, TempDir};

/// Creates the scratch directory for one job. Auto-removed when dropped.
///
/// The directory name carries the job's sanitized video name
/// (`thumbs_<safe_name>_<random>`), so concurrent runs over the same inputs
/// cannot collide in temp space.
pub fn create_scratch_dir(safe_name: &str) -> CoreResult<TempDir> {
    Ok(TempFileBuilder::new()
        .prefix(&format!("{SCRATCH_PREFIX}{safe_name}_"))
        .tempdir()?)
}
