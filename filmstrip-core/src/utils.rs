//! Utility functions for formatting and path handling.
//!
//! The duration formatter here is the single source of truth for `HH:MM:SS`
//! text: both the ffmpeg seek arguments and the burned-in annotation go
//! through it, so the two can never disagree for the same job.

use std::path::Path;

/// Formats seconds as HH:MM:SS (e.g., 3725.0 -> "01:02:05"). Returns "??:??:??" for invalid inputs.
///
/// Components are integer-truncated, not rounded, and hours are not capped
/// at 24.
#[must_use]
pub fn format_duration(seconds: f64) -> String {
    if seconds < 0.0 || !seconds.is_finite() {
        return "??:??:??".to_string();
    }

    let total_seconds = seconds as u64;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;
    format!("{hours:02}:{minutes:02}:{secs:02}")
}

/// Parses an HH:MM:SS string (fractional seconds allowed) back to seconds.
/// Returns None if the format is invalid.
#[must_use]
pub fn parse_hms(time: &str) -> Option<f64> {
    let parts: Vec<&str> = time.split(':').collect();
    if parts.len() == 3 {
        let hours = parts[0].parse::<f64>().ok()?;
        let minutes = parts[1].parse::<f64>().ok()?;
        let seconds = parts[2].parse::<f64>().ok()?;
        Some(hours * 3600.0 + minutes * 60.0 + seconds)
    } else {
        None
    }
}

/// Formats bytes with appropriate binary units (B, KiB, MiB, GiB).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const KIB: f64 = 1024.0;
    const MIB: f64 = KIB * 1024.0;
    const GIB: f64 = MIB * 1024.0;

    let bytes_f64 = bytes as f64;
    if bytes_f64 >= GIB {
        format!("{:.2} GiB", bytes_f64 / GIB)
    } else if bytes_f64 >= MIB {
        format!("{:.2} MiB", bytes_f64 / MIB)
    } else if bytes_f64 >= KIB {
        format!("{:.2} KiB", bytes_f64 / KIB)
    } else {
        format!("{bytes} B")
    }
}

/// Safely extracts the filename from a path with consistent error handling.
pub fn get_filename_safe(path: &Path) -> crate::CoreResult<String> {
    Ok(path
        .file_name()
        .ok_or_else(|| {
            crate::CoreError::PathError(format!("Failed to get filename for {}", path.display()))
        })?
        .to_string_lossy()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0.0), "00:00:00");
        assert_eq!(format_duration(59.0), "00:00:59");
        assert_eq!(format_duration(60.0), "00:01:00");
        assert_eq!(format_duration(3599.0), "00:59:59");
        assert_eq!(format_duration(3661.0), "01:01:01");
        assert_eq!(format_duration(86400.0), "24:00:00");
        assert_eq!(format_duration(90061.0), "25:01:01");

        // Fractional seconds truncate
        assert_eq!(format_duration(59.9), "00:00:59");
        assert_eq!(format_duration(60.1), "00:01:00");

        // Invalid inputs
        assert_eq!(format_duration(-1.0), "??:??:??");
        assert_eq!(format_duration(f64::INFINITY), "??:??:??");
        assert_eq!(format_duration(f64::NAN), "??:??:??");
    }

    #[test]
    fn test_duration_round_trip() {
        // Formatting then parsing recovers whole-second values exactly.
        for secs in [0u64, 1, 59, 60, 3599, 3600, 86399, 86400, 90061, 359999] {
            let formatted = format_duration(secs as f64);
            assert_eq!(parse_hms(&formatted), Some(secs as f64), "for {secs}s");
        }
        // Fractional input loses its fraction on the way through.
        assert_eq!(parse_hms(&format_duration(61.75)), Some(61.0));
    }

    #[test]
    fn test_parse_hms() {
        assert_eq!(parse_hms("00:00:00"), Some(0.0));
        assert_eq!(parse_hms("01:02:03"), Some(3723.0));
        assert_eq!(parse_hms("00:00:01.25"), Some(1.25));

        assert_eq!(parse_hms(""), None);
        assert_eq!(parse_hms("00:00"), None);
        assert_eq!(parse_hms("00:00:00:00"), None);
        assert_eq!(parse_hms("aa:bb:cc"), None);
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(1023), "1023 B");
        assert_eq!(format_bytes(1024), "1.00 KiB");
        assert_eq!(format_bytes(1536), "1.50 KiB");
        assert_eq!(format_bytes(1024 * 1024), "1.00 MiB");
        assert_eq!(format_bytes(1024 * 1024 * 1024), "1.00 GiB");
    }

    #[test]
    fn test_get_filename_safe() {
        assert_eq!(
            get_filename_safe(Path::new("/path/to/file.mp4")).unwrap(),
            "file.mp4"
        );
        assert!(get_filename_safe(Path::new("/")).is_err());
        assert!(get_filename_safe(Path::new("")).is_err());
    }
}
