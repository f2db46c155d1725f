//! Core types for the audioscribe transcription pipeline

/// Raw audio data representation (mono, f32 samples)
#[derive(Debug, Clone)]
pub struct AudioData {
    /// Audio samples, normalized to [-1.0, 1.0]
    pub samples: Vec<f32>,
    /// Sample rate in Hz (e.g., 44100)
    pub sample_rate: u32,
}

impl AudioData {
    /// Total playback time in whole milliseconds
    pub fn duration_ms(&self) -> u64 {
        if self.sample_rate == 0 {
            return 0;
        }
        self.samples.len() as u64 * 1000 / self.sample_rate as u64
    }
}

/// Half-open time interval `[start_ms, end_ms)` within the source audio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkInterval {
    pub start_ms: u64,
    pub end_ms: u64,
}

impl ChunkInterval {
    pub fn duration_ms(&self) -> u64 {
        self.end_ms - self.start_ms
    }

    /// Offset added to every timestamp transcribed from this chunk,
    /// floored to whole seconds
    pub fn offset_seconds(&self) -> i64 {
        (self.start_ms / 1000) as i64
    }
}

/// An audio slice with its position in the source file
#[derive(Debug, Clone)]
pub struct AudioChunk {
    pub samples: Vec<f32>,
    pub sample_rate: u32,
    pub interval: ChunkInterval,
}

/// A single subtitle cue.
///
/// Timestamps are total milliseconds elapsed on the subtitle timeline, not
/// wall-clock time of day; values past 24 hours are legal and format as
/// hours >= 24.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubtitleEntry {
    pub start_ms: i64,
    pub end_ms: i64,
    /// Cue text; may span multiple lines
    pub text: String,
}

/// One chunk's transcription output plus where the chunk began in the
/// source timeline
#[derive(Debug, Clone)]
pub struct ChunkTranscript {
    /// Raw SRT text as returned by the transcription service, with its
    /// timeline starting at zero
    pub srt_text: String,
    /// Whole seconds to add to every timestamp in `srt_text`
    pub offset_seconds: i64,
}
