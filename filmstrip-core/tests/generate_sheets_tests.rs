// filmstrip-core/tests/generate_sheets_tests.rs
//
// Drives the batch pipeline end to end through the mock tool
// implementations (feature "test-mocks"), so no ffmpeg, ffprobe, or
// ImageMagick binary is needed.

use filmstrip_core::config::CoreConfig;
use filmstrip_core::external::mocks::{
    MockFfprobeExecutor, MockFrameExtractor, MockSheetCompositor,
};
use filmstrip_core::processing::generate_sheets;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

// Helper to create a dummy video file with some content
fn create_dummy_file(dir: &Path, filename: &str) -> PathBuf {
    let file_path = dir.join(filename);
    let mut file = File::create(&file_path).expect("Failed to create dummy file");
    file.write_all(b"dummy content")
        .expect("Failed to write dummy content");
    file_path
}

// Input tempdir plus a config whose thumbs/ directory already exists,
// matching what the CLI guarantees before the batch starts.
fn setup() -> (TempDir, CoreConfig) {
    let input_dir = tempdir().expect("Failed to create temp input dir");
    let config = CoreConfig::new(input_dir.path().to_path_buf());
    fs::create_dir_all(&config.output_dir).expect("Failed to create output dir");
    (input_dir, config)
}

#[test]
fn test_single_file_produces_annotated_sheet() {
    let (input_dir, config) = setup();
    let clip = create_dummy_file(input_dir.path(), "clip.mp4");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("clip.mp4", 60.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();

    let results = generate_sheets(&prober, &extractor, &compositor, &config, &[clip]).unwrap();

    assert_eq!(results.len(), 1);
    let result = &results[0];
    assert_eq!(result.filename, "clip.mp4");
    assert_eq!(result.duration_secs, 60.0);
    assert_eq!(result.output_path, config.output_dir.join("clip_thumb.jpg"));
    assert!(result.output_path.exists());

    // Five frames, sampled at the interior sixths of the clip.
    assert_eq!(
        extractor.seeks_for("clip.mp4"),
        vec!["00:00:10", "00:00:20", "00:00:30", "00:00:40", "00:00:50"]
    );

    // The compositor received the five frames in extraction order.
    let append_calls = compositor.append_calls();
    assert_eq!(append_calls.len(), 1);
    let frame_names: Vec<String> = append_calls[0]
        .0
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(
        frame_names,
        vec![
            "thumb_1.jpg",
            "thumb_2.jpg",
            "thumb_3.jpg",
            "thumb_4.jpg",
            "thumb_5.jpg"
        ]
    );

    // The burned-in text matches the probed duration exactly.
    let annotations = compositor.annotations();
    assert_eq!(annotations.len(), 1);
    assert_eq!(annotations[0].1, "Duração: 00:01:00");

    // Nothing else in the input tree was touched.
    let mut entries: Vec<String> = fs::read_dir(input_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    entries.sort();
    assert_eq!(entries, vec!["clip.mp4", "thumbs"]);
}

#[test]
fn test_invalid_duration_skips_file_and_continues() {
    let (input_dir, config) = setup();
    let zero = create_dummy_file(input_dir.path(), "zero.mp4");
    let negative = create_dummy_file(input_dir.path(), "negative.mkv");
    let good = create_dummy_file(input_dir.path(), "good.mov");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("zero.mp4", 0.0);
    prober.set_duration("negative.mkv", -4.0);
    prober.set_duration("good.mov", 120.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();

    let results = generate_sheets(
        &prober,
        &extractor,
        &compositor,
        &config,
        &[zero, negative, good],
    )
    .unwrap();

    // Only the valid file got a sheet, and the batch reached it.
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].filename, "good.mov");
    assert!(config.output_dir.join("good_thumb.jpg").exists());
    assert!(!config.output_dir.join("zero_thumb.jpg").exists());
    assert!(!config.output_dir.join("negative_thumb.jpg").exists());

    // The invalid files never reached extraction.
    assert!(extractor.seeks_for("zero.mp4").is_empty());
    assert!(extractor.seeks_for("negative.mkv").is_empty());
}

#[test]
fn test_probe_failure_skips_file_and_continues() {
    let (input_dir, config) = setup();
    let unreadable = create_dummy_file(input_dir.path(), "unreadable.mp4");
    let good = create_dummy_file(input_dir.path(), "good.mp4");

    let prober = MockFfprobeExecutor::new();
    // No duration registered for unreadable.mp4 -> probe error.
    prober.set_duration("good.mp4", 30.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();

    let results =
        generate_sheets(&prober, &extractor, &compositor, &config, &[unreadable, good]).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].filename, "good.mp4");
    assert!(!config.output_dir.join("unreadable_thumb.jpg").exists());
}

#[test]
fn test_extraction_failure_aborts_job_before_composition() {
    let (input_dir, config) = setup();
    let bad = create_dummy_file(input_dir.path(), "bad.mkv");
    let good = create_dummy_file(input_dir.path(), "good.mkv");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("bad.mkv", 90.0);
    prober.set_duration("good.mkv", 90.0);
    let extractor = MockFrameExtractor::new();
    extractor.fail_for_input("bad.mkv");
    let compositor = MockSheetCompositor::new();

    let results = generate_sheets(&prober, &extractor, &compositor, &config, &[bad, good]).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].filename, "good.mkv");
    assert!(!config.output_dir.join("bad_thumb.jpg").exists());

    // The incomplete frame set was never handed to the compositor.
    for (_, output) in compositor.append_calls() {
        assert!(!output.to_string_lossy().contains("bad_thumb"));
    }
}

#[test]
fn test_compositor_failure_is_isolated_to_one_file() {
    let (input_dir, config) = setup();
    let one = create_dummy_file(input_dir.path(), "one.mp4");
    let two = create_dummy_file(input_dir.path(), "two.mp4");
    let three = create_dummy_file(input_dir.path(), "three.mp4");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("one.mp4", 10.0);
    prober.set_duration("two.mp4", 20.0);
    prober.set_duration("three.mp4", 30.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();
    compositor.fail_append_for("two_thumb");

    let results =
        generate_sheets(&prober, &extractor, &compositor, &config, &[one, two, three]).unwrap();

    assert_eq!(results.len(), 2);
    assert!(config.output_dir.join("one_thumb.jpg").exists());
    assert!(!config.output_dir.join("two_thumb.jpg").exists());
    assert!(config.output_dir.join("three_thumb.jpg").exists());

    // The failed job's staging file was cleaned up.
    assert!(!config.output_dir.join(".two_thumb.jpg.tmp").exists());
}

#[test]
fn test_annotation_failure_leaves_no_partial_output() {
    let (input_dir, config) = setup();
    let clip = create_dummy_file(input_dir.path(), "clip.mp4");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("clip.mp4", 45.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();
    compositor.fail_annotate_for("clip_thumb");

    let results = generate_sheets(&prober, &extractor, &compositor, &config, &[clip]).unwrap();

    // An un-annotated sheet must never appear at the public path.
    assert!(results.is_empty());
    assert!(!config.output_dir.join("clip_thumb.jpg").exists());
    assert!(!config.output_dir.join(".clip_thumb.jpg.tmp").exists());
}

#[test]
fn test_sanitization_collision_yields_distinct_outputs() {
    let (input_dir, config) = setup();
    fs::create_dir(input_dir.path().join("a")).unwrap();
    fs::create_dir(input_dir.path().join("b")).unwrap();
    let first = create_dummy_file(&input_dir.path().join("a"), "clip.mp4");
    let second = create_dummy_file(&input_dir.path().join("b"), "clip.mp4");

    let prober = MockFfprobeExecutor::new();
    prober.set_duration("clip.mp4", 60.0);
    let extractor = MockFrameExtractor::new();
    let compositor = MockSheetCompositor::new();

    let results =
        generate_sheets(&prober, &extractor, &compositor, &config, &[first, second]).unwrap();

    assert_eq!(results.len(), 2);
    assert_ne!(results[0].output_path, results[1].output_path);
    assert!(results[0].output_path.exists());
    assert!(results[1].output_path.exists());
}
