use crate::types::ChunkInterval;
use thiserror::Error;

/// Errors from chunk boundary planning
#[derive(Debug, Error)]
pub enum PlanError {
    #[error("no audio content: input reports zero duration")]
    NoAudioContent,
    #[error(
        "chunk ceiling of {max_chunk_bytes} bytes holds less than one millisecond \
         of audio at {bytes_per_ms:.1} bytes/ms"
    )]
    CeilingTooSmall {
        max_chunk_bytes: u64,
        bytes_per_ms: f64,
    },
}

/// Pure function to compute non-overlapping chunk intervals covering
/// `[0, duration_ms)` such that each interval's estimated encoded size stays
/// under `max_chunk_bytes`.
///
/// Sizing uses the byte rate measured from the file itself:
/// `bytes_per_ms = file_size_bytes / duration_ms`. Intervals are fixed-width
/// except possibly the last, which is shorter. Materializing intervals as
/// audio files is the caller's job; this only computes boundaries.
pub fn plan_chunks(
    duration_ms: u64,
    file_size_bytes: u64,
    max_chunk_bytes: u64,
) -> Result<Vec<ChunkInterval>, PlanError> {
    if duration_ms == 0 {
        return Err(PlanError::NoAudioContent);
    }

    // Already small enough, one chunk covers everything
    if file_size_bytes <= max_chunk_bytes {
        return Ok(vec![ChunkInterval {
            start_ms: 0,
            end_ms: duration_ms,
        }]);
    }

    let bytes_per_ms = file_size_bytes as f64 / duration_ms as f64;
    let width_ms = (max_chunk_bytes as f64 / bytes_per_ms).floor() as u64;
    if width_ms == 0 {
        return Err(PlanError::CeilingTooSmall {
            max_chunk_bytes,
            bytes_per_ms,
        });
    }

    let mut intervals = Vec::with_capacity(duration_ms.div_ceil(width_ms) as usize);
    let mut start_ms = 0;
    while start_ms < duration_ms {
        let end_ms = (start_ms + width_ms).min(duration_ms);
        intervals.push(ChunkInterval { start_ms, end_ms });
        start_ms = end_ms;
    }

    Ok(intervals)
}
