use crate::types::AudioChunk;
use anyhow::{Context, Result};
use std::path::Path;

/// Encode an audio chunk as 16-bit mono WAV at the given path
pub fn encode_wav<P: AsRef<Path>>(chunk: &AudioChunk, path: P) -> Result<()> {
    let path = path.as_ref();

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: chunk.sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec)
        .with_context(|| format!("Failed to create WAV file: {}", path.display()))?;

    for &sample in &chunk.samples {
        let value = (sample.clamp(-1.0, 1.0) * 32767.0) as i16;
        writer
            .write_sample(value)
            .context("Failed to write audio sample")?;
    }

    writer.finalize().context("Failed to finalize WAV file")?;

    Ok(())
}
