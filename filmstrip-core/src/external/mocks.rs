// Mocking infrastructure for the external-tool traits (testing only).
//
// Compiled only when the "test-mocks" feature is enabled. The integration
// tests drive the whole batch pipeline through these, so no ffmpeg, ffprobe,
// or ImageMagick binary is needed on the test machine.
#![cfg(feature = "test-mocks")]

use super::{FfprobeExecutor, FrameExtractor, SheetCompositor};
use crate::error::{command_failed_error, CoreError, CoreResult};

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::os::unix::process::ExitStatusExt;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::rc::Rc;

fn file_name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn mock_tool_failure(tool: &str) -> CoreError {
    command_failed_error(tool, ExitStatus::from_raw(256), "mock failure")
}

/// Mock prober returning canned durations keyed by input file name.
#[derive(Clone, Default)]
pub struct MockFfprobeExecutor {
    durations: Rc<RefCell<HashMap<String, f64>>>,
}

impl MockFfprobeExecutor {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn set_duration(&self, file_name: &str, secs: f64) {
        self.durations
            .borrow_mut()
            .insert(file_name.to_string(), secs);
    }
}

impl FfprobeExecutor for MockFfprobeExecutor {
    fn probe_duration_secs(&self, input_path: &Path) -> CoreResult<f64> {
        let name = file_name_of(input_path);
        self.durations
            .borrow()
            .get(&name)
            .copied()
            .ok_or_else(|| CoreError::FfprobeParse(format!("no mock duration for {name}")))
    }
}

/// Mock extractor that writes a dummy frame file, or fails for configured
/// input names.
#[derive(Clone, Default)]
pub struct MockFrameExtractor {
    fail_for_inputs: Rc<RefCell<Vec<String>>>,
    seeks: Rc<RefCell<Vec<(String, String)>>>,
}

impl MockFrameExtractor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes every extraction for the given input file name fail.
    pub fn fail_for_input(&self, file_name: &str) {
        self.fail_for_inputs.borrow_mut().push(file_name.to_string());
    }

    /// Seek timestamps requested for the given input file name, in order.
    pub fn seeks_for(&self, file_name: &str) -> Vec<String> {
        self.seeks
            .borrow()
            .iter()
            .filter(|(input, _)| input == file_name)
            .map(|(_, seek)| seek.clone())
            .collect()
    }
}

impl FrameExtractor for MockFrameExtractor {
    fn extract_frame(
        &self,
        input_path: &Path,
        seek_hms: &str,
        output_path: &Path,
    ) -> CoreResult<()> {
        let input_name = file_name_of(input_path);
        self.seeks
            .borrow_mut()
            .push((input_name.clone(), seek_hms.to_string()));

        if self.fail_for_inputs.borrow().contains(&input_name) {
            return Err(mock_tool_failure("ffmpeg (frame extract)"));
        }
        fs::write(output_path, b"mock frame")?;
        Ok(())
    }
}

/// Mock compositor recording tile/annotate calls and writing dummy sheets.
#[derive(Clone, Default)]
pub struct MockSheetCompositor {
    fail_append_for: Rc<RefCell<Vec<String>>>,
    fail_annotate_for: Rc<RefCell<Vec<String>>>,
    append_calls: Rc<RefCell<Vec<(Vec<PathBuf>, PathBuf)>>>,
    annotations: Rc<RefCell<Vec<(PathBuf, String)>>>,
}

impl MockSheetCompositor {
    pub fn new() -> Self {
        Default::default()
    }

    /// Makes tiling fail when the output file name contains `needle`.
    pub fn fail_append_for(&self, needle: &str) {
        self.fail_append_for.borrow_mut().push(needle.to_string());
    }

    /// Makes annotation fail when the image file name contains `needle`.
    pub fn fail_annotate_for(&self, needle: &str) {
        self.fail_annotate_for.borrow_mut().push(needle.to_string());
    }

    /// All recorded tile calls: (frame paths, output path).
    pub fn append_calls(&self) -> Vec<(Vec<PathBuf>, PathBuf)> {
        self.append_calls.borrow().clone()
    }

    /// All recorded annotations: (image path, text).
    pub fn annotations(&self) -> Vec<(PathBuf, String)> {
        self.annotations.borrow().clone()
    }
}

impl SheetCompositor for MockSheetCompositor {
    fn append_frames(&self, frame_paths: &[PathBuf], output_path: &Path) -> CoreResult<()> {
        // The pipeline must never hand over a missing frame.
        for frame in frame_paths {
            assert!(frame.exists(), "composed from missing frame {frame:?}");
        }
        self.append_calls
            .borrow_mut()
            .push((frame_paths.to_vec(), output_path.to_path_buf()));

        let output_name = file_name_of(output_path);
        if self
            .fail_append_for
            .borrow()
            .iter()
            .any(|needle| output_name.contains(needle.as_str()))
        {
            return Err(mock_tool_failure("magick (+append)"));
        }
        fs::write(output_path, b"mock sheet")?;
        Ok(())
    }

    fn annotate_duration(&self, image_path: &Path, text: &str) -> CoreResult<()> {
        let image_name = file_name_of(image_path);
        if self
            .fail_annotate_for
            .borrow()
            .iter()
            .any(|needle| image_name.contains(needle.as_str()))
        {
            return Err(mock_tool_failure("magick (-annotate)"));
        }
        self.annotations
            .borrow_mut()
            .push((image_path.to_path_buf(), text.to_string()));
        Ok(())
    }
}
