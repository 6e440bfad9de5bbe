//! Canonical 44-byte WAV header reader.
//!
//! The header is read as three fixed records: the RIFF descriptor (12 bytes),
//! the fmt sub-chunk (24 bytes) and the data sub-chunk header (8 bytes). Only
//! the top-level `RIFF`/`WAVE` tags and the PCM audio format are validated.

use byteorder::{LittleEndian, ReadBytesExt};
use std::borrow::Cow;
use std::fmt;
use std::io::Read;

use crate::error::{WavError, WavResult};

/// Size of the RIFF descriptor record.
pub const RIFF_DESCRIPTOR_SIZE: usize = 12;

/// Size of the fmt sub-chunk record.
pub const FMT_CHUNK_SIZE: usize = 24;

/// Size of the data sub-chunk header record.
pub const DATA_HEADER_SIZE: usize = 8;

/// Total header size consumed from the input.
pub const HEADER_SIZE: usize = RIFF_DESCRIPTOR_SIZE + FMT_CHUNK_SIZE + DATA_HEADER_SIZE;

/// Audio format code for uncompressed PCM.
pub const PCM_FORMAT: i16 = 1;

/// A four-byte chunk identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tag(pub [u8; 4]);

impl Tag {
    /// `RIFF` container tag.
    pub const RIFF: Tag = Tag(*b"RIFF");
    /// `WAVE` form type.
    pub const WAVE: Tag = Tag(*b"WAVE");
    /// `fmt ` sub-chunk tag.
    pub const FMT: Tag = Tag(*b"fmt ");
    /// `data` sub-chunk tag.
    pub const DATA: Tag = Tag(*b"data");

    /// Returns the tag bytes as text, replacing invalid UTF-8.
    pub fn as_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.0)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str())
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

/// Parsed WAV header fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavHeader {
    /// Container tag, always `RIFF` once parsed.
    pub chunk_id: Tag,
    /// File size in bytes minus 8.
    pub chunk_size: u32,
    /// Form type, always `WAVE` once parsed.
    pub format: Tag,
    /// Format sub-chunk tag (normally `fmt `).
    pub sub1_id: Tag,
    /// Size of the rest of the format sub-chunk.
    pub sub1_size: i32,
    /// Audio format code, always 1 (PCM) once parsed.
    pub audio_format: i16,
    /// Mono = 1, stereo = 2, etc.
    pub num_channels: i16,
    /// Samples per second.
    pub sample_rate: u32,
    /// SampleRate * NumChannels * BitsPerSample/8.
    pub byte_rate: u32,
    /// NumChannels * BitsPerSample/8.
    pub block_align: i16,
    /// Bits per sample.
    pub bits_per_sample: i16,
    /// Data sub-chunk tag (normally `data`).
    pub sub2_id: Tag,
    /// Declared number of bytes of sample data.
    pub sub2_size: i32,
}

impl WavHeader {
    /// Reads and validates the 44-byte header from the front of `reader`.
    ///
    /// On success the reader is positioned at the first sample byte.
    pub fn read_from<R: Read>(reader: &mut R) -> WavResult<Self> {
        let descriptor = read_record(reader, RIFF_DESCRIPTOR_SIZE, "RIFF descriptor")?;
        let mut rec = descriptor.as_slice();
        let chunk_id = read_tag(&mut rec)?;
        let chunk_size = rec.read_u32::<LittleEndian>()?;
        let format = read_tag(&mut rec)?;

        if chunk_id != Tag::RIFF {
            return Err(WavError::InvalidRiffHeader { found: chunk_id });
        }
        if format != Tag::WAVE {
            return Err(WavError::InvalidWaveFormat { found: format });
        }

        let fmt_chunk = read_record(reader, FMT_CHUNK_SIZE, "fmt sub-chunk")?;
        let mut rec = fmt_chunk.as_slice();
        let sub1_id = read_tag(&mut rec)?;
        let sub1_size = rec.read_i32::<LittleEndian>()?;
        let audio_format = rec.read_i16::<LittleEndian>()?;
        let num_channels = rec.read_i16::<LittleEndian>()?;
        let sample_rate = rec.read_u32::<LittleEndian>()?;
        let byte_rate = rec.read_u32::<LittleEndian>()?;
        let block_align = rec.read_i16::<LittleEndian>()?;
        let bits_per_sample = rec.read_i16::<LittleEndian>()?;

        if audio_format != PCM_FORMAT {
            return Err(WavError::UnsupportedAudioFormat {
                format_code: audio_format,
            });
        }

        let data_header = read_record(reader, DATA_HEADER_SIZE, "data sub-chunk header")?;
        let mut rec = data_header.as_slice();
        let sub2_id = read_tag(&mut rec)?;
        let sub2_size = rec.read_i32::<LittleEndian>()?;

        Ok(Self {
            chunk_id,
            chunk_size,
            format,
            sub1_id,
            sub1_size,
            audio_format,
            num_channels,
            sample_rate,
            byte_rate,
            block_align,
            bits_per_sample,
            sub2_id,
            sub2_size,
        })
    }
}

/// Reads exactly `len` bytes, failing with `Truncated` on a short stream.
fn read_record<R: Read>(reader: &mut R, len: usize, record: &'static str) -> WavResult<Vec<u8>> {
    let mut buf = Vec::with_capacity(len);
    reader.by_ref().take(len as u64).read_to_end(&mut buf)?;

    if buf.len() < len {
        return Err(WavError::Truncated {
            record,
            expected: len,
            actual: buf.len(),
        });
    }

    Ok(buf)
}

fn read_tag(rec: &mut &[u8]) -> WavResult<Tag> {
    let mut tag = [0u8; 4];
    rec.read_exact(&mut tag)?;
    Ok(Tag(tag))
}
