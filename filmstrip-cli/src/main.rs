// filmstrip-cli/src/main.rs
//
// Command-line interface for the Filmstrip contact-sheet generator.
//
// Responsibilities:
// - Parsing the single positional argument (input directory) with clap.
// - Setting up env_logger-backed logging.
// - Creating the output directory up front (fatal if this fails).
// - Invoking the core pipeline and displaying a summary of results.
// - Exiting non-zero on fatal errors.

use clap::Parser;
use colored::Colorize;
use filmstrip_core::{
    find_video_files, format_bytes, format_duration, generate_sheets, CoreConfig, CoreError,
    CoreResult, CrateFfprobeExecutor, MagickCompositor, SidecarExtractor,
};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use std::process;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Filmstrip: video contact-sheet generator",
    long_about = "Scans a directory tree for video files and renders one tiled, \
                  duration-annotated contact sheet per video using ffmpeg and ImageMagick."
)]
struct Cli {
    /// Directory to scan recursively for .mp4/.mov/.mkv files
    #[arg(required = true, value_name = "INPUT_DIR")]
    input_dir: PathBuf,
}

fn run(cli: Cli) -> CoreResult<()> {
    let total_start_time = Instant::now();

    let input_dir = cli.input_dir.canonicalize().map_err(|e| {
        CoreError::PathError(format!(
            "Invalid input path '{}': {e}",
            cli.input_dir.display()
        ))
    })?;
    if !input_dir.is_dir() {
        return Err(CoreError::PathError(format!(
            "Input path '{}' is not a directory",
            input_dir.display()
        )));
    }

    let config = CoreConfig::new(input_dir);

    // Failure to create the output directory aborts the whole run.
    fs::create_dir_all(&config.output_dir)?;

    info!("{} {}", "Input path:".bold(), config.input_dir.display());
    info!(
        "{} {}",
        "Output directory:".bold(),
        config.output_dir.display()
    );

    let files_to_process = match find_video_files(&config.input_dir) {
        Ok(files) => files,
        // An empty tree is a normal, empty run, not an error.
        Err(CoreError::NoFilesFound) => Vec::new(),
        Err(e) => return Err(e),
    };

    info!("Found {} file(s) to process.", files_to_process.len());
    if files_to_process.is_empty() {
        info!("No processable video files found in the specified input path.");
        return Ok(());
    }

    filmstrip_core::external::verify_dependencies()?;

    let results = generate_sheets(
        &CrateFfprobeExecutor::new(),
        &SidecarExtractor,
        &MagickCompositor,
        &config,
        &files_to_process,
    )?;

    if results.is_empty() {
        warn!("No contact sheets were generated.");
    } else {
        info!("========================================");
        info!("Contact Sheet Summary:");
        info!("========================================");
        for result in &results {
            info!("{}", result.filename.bold());
            info!("  Video length: {}", format_duration(result.duration_secs));
            info!("  Sheet size:   {}", format_bytes(result.output_size));
            info!("  Elapsed:      {:.1}s", result.elapsed.as_secs_f64());
            info!("  Output:       {}", result.output_path.display());
            info!("----------------------------------------");
        }
        info!(
            "Generated {} contact sheet(s).",
            results.len().to_string().green().bold()
        );
    }

    info!(
        "Total execution time: {}",
        format_duration(total_start_time.elapsed().as_secs_f64())
    );
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("{} {e}", "Error:".red().bold());
        process::exit(1);
    }
}
