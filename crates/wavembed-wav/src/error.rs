//! Error types for WAV header parsing and listing output.

use thiserror::Error;

use crate::header::Tag;

/// Result type for wavembed operations.
pub type WavResult<T> = Result<T, WavError>;

/// Errors that can occur while reading a WAV file or writing its listing.
#[derive(Debug, Error)]
pub enum WavError {
    /// The top-level chunk is not tagged `RIFF`.
    #[error("not a wave file: expected RIFF chunk id, found {found:?}")]
    InvalidRiffHeader {
        /// The tag found at offset 0.
        found: Tag,
    },

    /// The RIFF container does not hold `WAVE` data.
    #[error("not a wave file: expected WAVE format, found {found:?}")]
    InvalidWaveFormat {
        /// The tag found at offset 8.
        found: Tag,
    },

    /// The file uses a compressed (non-PCM) encoding.
    #[error("unsupported audio format {format_code}: file is compressed (only PCM/1 supported)")]
    UnsupportedAudioFormat {
        /// The audio format code from the fmt sub-chunk.
        format_code: i16,
    },

    /// The stream ended before a fixed-size header record was complete.
    #[error("truncated {record}: expected {expected} bytes, got {actual}")]
    Truncated {
        /// Name of the record being read.
        record: &'static str,
        /// Number of bytes the record requires.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WavError {
    /// Returns true when the top-level RIFF/WAVE tags did not match.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRiffHeader { .. } | Self::InvalidWaveFormat { .. }
        )
    }
}
