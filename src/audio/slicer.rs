use crate::types::{AudioChunk, AudioData, ChunkInterval};

/// Pure function to slice audio data into chunks along planned intervals
pub fn slice_audio(audio: &AudioData, intervals: &[ChunkInterval]) -> Vec<AudioChunk> {
    let mut chunks = Vec::with_capacity(intervals.len());

    for interval in intervals {
        let start_sample = sample_index(interval.start_ms, audio);
        let end_sample = sample_index(interval.end_ms, audio);

        chunks.push(AudioChunk {
            samples: audio.samples[start_sample..end_sample].to_vec(),
            sample_rate: audio.sample_rate,
            interval: *interval,
        });
    }

    chunks
}

fn sample_index(ms: u64, audio: &AudioData) -> usize {
    let index = ms * audio.sample_rate as u64 / 1000;
    index.min(audio.samples.len() as u64) as usize
}
