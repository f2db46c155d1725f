//! Merges per-chunk SRT fragments into one renumbered document.

use crate::subtitle::parser::{self, ParseError, TIME_SEPARATOR};
use crate::subtitle::timecode;
use crate::types::{ChunkTranscript, SubtitleEntry};
use thiserror::Error;

/// A parse failure attributed to the chunk it came from (1-based)
#[derive(Debug, Error)]
#[error("subtitle fragment for chunk {chunk}: {source}")]
pub struct AssembleError {
    pub chunk: usize,
    #[source]
    pub source: ParseError,
}

/// Shift and renumber every chunk's entries into one SRT document.
///
/// Chunks must be supplied in source order. Every entry's timestamps are
/// shifted by its chunk's offset, and indices run contiguously from 1 across
/// the whole document, never resetting between chunks. Entries are separated
/// by exactly one blank line and the document ends with a single trailing
/// newline. A chunk that transcribed to zero entries (silent audio)
/// contributes nothing.
pub fn assemble(chunks: &[ChunkTranscript]) -> Result<String, AssembleError> {
    let mut document = String::new();
    let mut next_index = 1usize;

    for (chunk_idx, chunk) in chunks.iter().enumerate() {
        let entries = parser::parse_srt(&chunk.srt_text).map_err(|source| AssembleError {
            chunk: chunk_idx + 1,
            source,
        })?;
        let offset_ms = chunk.offset_seconds * 1000;

        for entry in entries {
            let shifted = SubtitleEntry {
                start_ms: entry.start_ms + offset_ms,
                end_ms: entry.end_ms + offset_ms,
                text: entry.text,
            };
            push_entry(&mut document, next_index, &shifted);
            next_index += 1;
        }
    }

    Ok(document)
}

fn push_entry(document: &mut String, index: usize, entry: &SubtitleEntry) {
    if !document.is_empty() {
        document.push('\n');
    }
    document.push_str(&index.to_string());
    document.push('\n');
    document.push_str(&timecode::format_timestamp(entry.start_ms));
    document.push_str(TIME_SEPARATOR);
    document.push_str(&timecode::format_timestamp(entry.end_ms));
    document.push('\n');
    document.push_str(&entry.text);
    document.push('\n');
}
