//! File discovery module for finding video files to process.
//!
//! Recursively walks the input tree and matches regular files whose
//! lowercased extension is on the fixed allow-list (`.mp4`, `.mov`, `.mkv`).
//! Directories and files with other extensions are skipped without error.

use crate::config::VIDEO_EXTENSIONS;
use crate::error::{CoreError, CoreResult};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds video files eligible for processing under the specified directory.
///
/// Files are returned in the underlying filesystem's enumeration order (not
/// guaranteed sorted); every matching file appears exactly once.
///
/// # Returns
///
/// * `Ok(Vec<PathBuf>)` - paths to the discovered video files
/// * `Err(CoreError::Walkdir)` - if the directory traversal fails
/// * `Err(CoreError::NoFilesFound)` - if no matching files are found
pub fn find_video_files(input_dir: &Path) -> CoreResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(input_dir) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext_str| {
                VIDEO_EXTENSIONS
                    .iter()
                    .any(|allowed| ext_str.eq_ignore_ascii_case(allowed))
            })
            .unwrap_or(false);

        if matches {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        Err(CoreError::NoFilesFound)
    } else {
        Ok(files)
    }
}
