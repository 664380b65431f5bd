//! Sample-point planning.
//!
//! Given a video's duration, picks the playback offsets at which still
//! frames are extracted for the contact sheet. The duration is divided into
//! `SAMPLE_FRAME_COUNT + 1` equal segments and the interior boundaries are
//! taken, so no offset ever lands on the clip's first or last instant.

use crate::config::SAMPLE_FRAME_COUNT;

/// Computes the sample offsets (in seconds) for a clip of the given duration.
///
/// Returns exactly [`SAMPLE_FRAME_COUNT`] strictly increasing offsets, all
/// strictly between `0` and `duration_secs`. The caller is expected to have
/// rejected non-positive durations already.
///
/// For sub-second clips several offsets may truncate to the same `HH:MM:SS`
/// seek string; that duplicates frames on the sheet but is not an error.
#[must_use]
pub fn plan_sample_offsets(duration_secs: f64) -> Vec<f64> {
    let segment = duration_secs / (SAMPLE_FRAME_COUNT as f64 + 1.0);
    (1..=SAMPLE_FRAME_COUNT)
        .map(|i| i as f64 * segment)
        .collect()
}
