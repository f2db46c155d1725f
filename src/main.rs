use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tempfile::NamedTempFile;
use tracing::debug;

use audioscribe::audio::{decoder, encoder, slicer};
use audioscribe::chunking;
use audioscribe::subtitle::assembler;
use audioscribe::transcription::{
    TranscriberConfig, WhisperClient, DEFAULT_API_URL, DEFAULT_MODEL,
};
use audioscribe::types::ChunkTranscript;

/// Audioscribe - audio transcription and subtitle assembly tool
///
/// Transcribes an audio file through a speech-to-text service, splitting it
/// into size-bounded chunks when needed, and writes a single SRT document
/// with a continuous timeline and numbering.
#[derive(Parser, Debug)]
#[command(name = "audioscribe")]
#[command(version = "0.1.0")]
#[command(about = "Audio transcription and subtitle assembly tool", long_about = None)]
struct Args {
    /// Input audio file path (supports MP3, OGG, FLAC, WAV, etc.)
    #[arg(value_name = "INPUT")]
    input_file: PathBuf,

    /// API key for the transcription service
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Transcription endpoint URL
    #[arg(long, default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Transcription model identifier
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Language hint passed to the transcription service
    #[arg(long)]
    language: Option<String>,

    /// Maximum encoded size of a single transcription request, in bytes
    #[arg(long, default_value_t = 24 * 1024 * 1024)]
    max_chunk_bytes: u64,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 300)]
    request_timeout: u64,

    /// Output subtitle path (defaults to the input path with an .srt extension)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,
}

impl Args {
    /// Validate CLI arguments
    fn validate(&self) -> Result<()> {
        if !self.input_file.exists() {
            anyhow::bail!("Input file does not exist: {:?}", self.input_file);
        }

        if !self.input_file.is_file() {
            anyhow::bail!("Input path is not a file: {:?}", self.input_file);
        }

        if self.max_chunk_bytes == 0 {
            anyhow::bail!("Maximum chunk size must be positive");
        }

        if self.request_timeout == 0 {
            anyhow::bail!("Request timeout must be positive");
        }

        Ok(())
    }

    fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.input_file.with_extension("srt"),
        }
    }

    fn transcriber_config(&self) -> TranscriberConfig {
        TranscriberConfig {
            api_key: self.api_key.clone(),
            api_url: self.api_url.clone(),
            model: self.model.clone(),
            language: self.language.clone(),
            timeout: Duration::from_secs(self.request_timeout),
        }
    }
}

/// A chunk staged for transcription: either the untouched input file or a
/// temporary WAV slice that is removed when dropped
enum ChunkSource {
    Original(PathBuf),
    Sliced(NamedTempFile),
}

impl ChunkSource {
    fn path(&self) -> &Path {
        match self {
            ChunkSource::Original(path) => path,
            ChunkSource::Sliced(temp) => temp.path(),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    args.validate()
        .context("Failed to validate command-line arguments")?;

    let file_size = fs::metadata(&args.input_file)
        .with_context(|| format!("Failed to read metadata for {:?}", args.input_file))?
        .len();

    println!("Audioscribe v0.1.0");
    println!("Input:  {:?} ({} bytes)", args.input_file, file_size);

    println!("\n1. Staging audio for transcription...");
    let chunks = stage_chunks(&args, file_size)?;
    let total = chunks.len();

    let client = WhisperClient::new(args.transcriber_config())
        .context("Failed to initialize transcription client")?;

    println!("\n2. Transcribing {} chunk(s)...", total);
    let mut transcripts = Vec::with_capacity(total);
    for (i, (source, offset_seconds)) in chunks.into_iter().enumerate() {
        println!("   Transcribing chunk {}/{}", i + 1, total);
        let srt_text = client
            .transcribe_file(source.path())
            .with_context(|| format!("Transcription failed for chunk {}", i + 1))?;
        debug!(chunk = i + 1, bytes = srt_text.len(), "received subtitle fragment");
        transcripts.push(ChunkTranscript {
            srt_text,
            offset_seconds,
        });
        // `source` drops here, deleting the temp file for sliced chunks
    }

    println!("\n3. Assembling subtitle document...");
    let document =
        assembler::assemble(&transcripts).context("Failed to assemble subtitle document")?;

    let output_path = args.output_path();
    fs::write(&output_path, &document)
        .with_context(|| format!("Failed to write subtitle file {:?}", output_path))?;

    println!("\n✓ Subtitles saved to {:?}", output_path);

    Ok(())
}

/// Stage the input as one or more transcription-sized chunks.
///
/// Files already under the ceiling pass through untouched (and are never
/// deleted); oversized files are decoded, planned along the measured byte
/// rate, and materialized as temporary WAV slices.
fn stage_chunks(args: &Args, file_size: u64) -> Result<Vec<(ChunkSource, i64)>> {
    if file_size <= args.max_chunk_bytes {
        debug!(file_size, "input is under the chunk ceiling, skipping split");
        println!("   Input fits in a single request");
        return Ok(vec![(ChunkSource::Original(args.input_file.clone()), 0)]);
    }

    println!(
        "   Input exceeds {} bytes, splitting by measured byte rate...",
        args.max_chunk_bytes
    );
    let audio =
        decoder::decode_audio(&args.input_file).context("Failed to decode input audio")?;
    println!(
        "   Loaded {} samples at {} Hz",
        audio.samples.len(),
        audio.sample_rate
    );

    let intervals = chunking::plan_chunks(audio.duration_ms(), file_size, args.max_chunk_bytes)
        .context("Failed to plan chunk boundaries")?;
    println!("   Planned {} chunks", intervals.len());

    let mut staged = Vec::with_capacity(intervals.len());
    for chunk in slicer::slice_audio(&audio, &intervals) {
        let temp = tempfile::Builder::new()
            .prefix("audioscribe-chunk-")
            .suffix(".wav")
            .tempfile()
            .context("Failed to create temporary chunk file")?;
        encoder::encode_wav(&chunk, temp.path()).with_context(|| {
            format!(
                "Failed to encode chunk covering {}ms..{}ms",
                chunk.interval.start_ms, chunk.interval.end_ms
            )
        })?;
        debug!(
            start_ms = chunk.interval.start_ms,
            end_ms = chunk.interval.end_ms,
            path = %temp.path().display(),
            "materialized chunk"
        );
        staged.push((ChunkSource::Sliced(temp), chunk.interval.offset_seconds()));
    }
    Ok(staged)
}
