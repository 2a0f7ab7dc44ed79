//! Byte-source adapters: file content -> initial bitstream.
//!
//! The pipeline starts from a bitstream, and these adapters produce one from
//! a file based on its extension. They are simple byte-to-bit conversions
//! with a `max_bytes` cap and no invariant beyond charset/non-emptiness of
//! the result.
//!
//! # Registration
//!
//! Like the ciphers, the parser set is a closed enum with a compile-time
//! registration table and exhaustive dispatch; unregistered extensions fail
//! with `AdapterError::UnknownParser`.
//!
//! # Formats
//!
//! - **bin**: raw bytes, 8 bits per byte, MSB first, capped at `max_bytes`.
//! - **txt**: UTF-8 text, first `max_bytes` characters, each encoded as its
//!   8-bit code point. Code points above U+00FF are rejected rather than
//!   silently wrapped; 8 bits cannot represent them and truncation would be
//!   unrecoverable.
//! - **wav**: RIFF/WAVE container, 16-bit PCM only. Emits the magnitude of
//!   each sample as 16 bits, capped at `max_bytes` worth of sample bytes.
//!
//! # WAV Layout
//!
//! ```text
//! +------------------+
//! | "RIFF" (4 bytes) |
//! | riff_size (4)    |  u32 little-endian
//! | "WAVE" (4 bytes) |
//! +------------------+
//! | chunk id (4)     |  e.g. "fmt ", "data"
//! | chunk size (4)   |  u32 little-endian, data padded to even length
//! | chunk data (...) |
//! +------------------+ (repeated)
//! ```
//!
//! The "fmt " chunk carries audio_format (u16), channels (u16), sample rate
//! (u32), byte rate (u32), block align (u16), bits per sample (u16).

use crate::bits::{bytes_to_bits, push_byte_bits, push_u16_bits};
use crate::error::{AdapterError, Result};
use std::path::Path;

/// The closed set of registered byte-source parsers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserKind {
    /// 16-bit PCM WAV sample magnitudes
    Wav,
    /// Text, one 8-bit code point per character
    Txt,
    /// Raw bytes
    Bin,
}

impl ParserKind {
    /// Registration table: file extension -> parser.
    pub const REGISTRY: [(&'static str, ParserKind); 3] = [
        ("wav", ParserKind::Wav),
        ("txt", ParserKind::Txt),
        ("bin", ParserKind::Bin),
    ];

    /// Look up a parser by file extension (case-insensitive).
    ///
    /// # Errors
    /// `AdapterError::UnknownParser` if the extension is not in the table.
    pub fn from_extension(extension: &str) -> Result<Self> {
        let lower = extension.to_ascii_lowercase();
        Self::REGISTRY
            .iter()
            .find(|(registered, _)| *registered == lower)
            .map(|(_, kind)| *kind)
            .ok_or_else(|| AdapterError::UnknownParser(extension.to_string()).into())
    }
}

/// Convert a file into a bitstream, dispatching on its extension.
///
/// At most `max_bytes` bytes of content are converted.
///
/// # Errors
/// - `AdapterError::NoExtension` / `AdapterError::UnknownParser` for dispatch
/// - `Error::Io` if the file cannot be read
/// - format-specific adapter errors, and `AdapterError::EmptyParse` if the
///   conversion yields zero bits
pub fn parse_file(path: &Path, max_bytes: usize) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or(AdapterError::NoExtension)?;

    match ParserKind::from_extension(extension)? {
        ParserKind::Wav => wav_bits(&std::fs::read(path)?, max_bytes),
        ParserKind::Txt => txt_bits(&std::fs::read_to_string(path)?, max_bytes),
        ParserKind::Bin => bin_bits(&std::fs::read(path)?, max_bytes),
    }
}

/// Expand raw bytes into a bitstream, capped at `max_bytes` bytes.
pub fn bin_bits(data: &[u8], max_bytes: usize) -> Result<String> {
    let capped = &data[..data.len().min(max_bytes)];
    let bits = bytes_to_bits(capped);
    ensure_nonempty(bits)
}

/// Encode the first `max_bytes` characters of `text` as 8-bit code points.
///
/// # Errors
/// `AdapterError::NonLatin1` for any character above U+00FF.
pub fn txt_bits(text: &str, max_bytes: usize) -> Result<String> {
    let mut bits = String::with_capacity(max_bytes * 8);
    for c in text.chars().take(max_bytes) {
        let code_point = c as u32;
        if code_point > 0xFF {
            return Err(AdapterError::NonLatin1 { found: c }.into());
        }
        push_byte_bits(code_point as u8, &mut bits);
    }
    ensure_nonempty(bits)
}

/// Extract 16-bit PCM sample magnitudes from a WAV file as a bitstream.
///
/// At most `max_bytes / 2` samples are read, so the output never exceeds
/// `max_bytes * 8` bits.
///
/// # Errors
/// `AdapterError::InvalidWav` for container or format violations.
pub fn wav_bits(data: &[u8], max_bytes: usize) -> Result<String> {
    let samples = wav_samples(data)?;
    let take = samples.len().min(max_bytes / 2);

    let mut bits = String::with_capacity(take * 16);
    for &sample in &samples[..take] {
        // abs() of i16::MIN overflows i16; widen first. 32768 still fits the
        // 16-bit magnitude field.
        let magnitude = (sample as i32).unsigned_abs() as u16;
        push_u16_bits(magnitude, &mut bits);
    }
    ensure_nonempty(bits)
}

/// Walk the RIFF chunks and return the PCM samples of the data chunk.
fn wav_samples(data: &[u8]) -> Result<Vec<i16>> {
    if data.len() < 12 || &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
        return Err(AdapterError::InvalidWav("missing RIFF/WAVE header".to_string()).into());
    }

    let mut fmt_ok = false;
    let mut pcm: Option<Vec<i16>> = None;

    let mut offset = 12;
    while offset + 8 <= data.len() {
        let id = &data[offset..offset + 4];
        let size = u32::from_le_bytes(data[offset + 4..offset + 8].try_into().unwrap()) as usize;
        let body_start = offset + 8;
        let body_end = body_start + size;
        if body_end > data.len() {
            return Err(AdapterError::InvalidWav(format!(
                "chunk {:?} overruns file",
                String::from_utf8_lossy(id)
            ))
            .into());
        }
        let body = &data[body_start..body_end];

        match id {
            b"fmt " => {
                if body.len() < 16 {
                    return Err(AdapterError::InvalidWav("fmt chunk too short".to_string()).into());
                }
                let audio_format = u16::from_le_bytes(body[0..2].try_into().unwrap());
                let bits_per_sample = u16::from_le_bytes(body[14..16].try_into().unwrap());
                if audio_format != 1 || bits_per_sample != 16 {
                    return Err(AdapterError::InvalidWav(format!(
                        "only 16-bit PCM is supported (format {audio_format}, {bits_per_sample} bits)"
                    ))
                    .into());
                }
                fmt_ok = true;
            }
            b"data" => {
                let samples = body
                    .chunks_exact(2)
                    .map(|pair| i16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                pcm = Some(samples);
            }
            _ => {} // skip unknown chunks (LIST, fact, ...)
        }

        // Chunk bodies are padded to even length.
        offset = body_end + (size & 1);
    }

    if !fmt_ok {
        return Err(AdapterError::InvalidWav("no fmt chunk".to_string()).into());
    }
    pcm.ok_or_else(|| AdapterError::InvalidWav("no data chunk".to_string()).into())
}

fn ensure_nonempty(bits: String) -> Result<String> {
    if bits.is_empty() {
        return Err(AdapterError::EmptyParse.into());
    }
    Ok(bits)
}
