//! WAV to C listing pipeline.

use std::io::{Read, Write};

use tracing::{debug, warn};

use crate::array::write_byte_array;
use crate::doc::write_header_doc;
use crate::error::WavResult;
use crate::header::WavHeader;

/// Options for a single conversion.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Name shown in the documentation `File` line.
    pub source_name: String,
    /// Name of the generated array.
    pub declaration: String,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    /// The parsed header.
    pub header: WavHeader,
    /// Name of the generated array.
    pub declaration: String,
    /// Number of sample bytes written into the array.
    pub total_bytes: u64,
}

/// Reads a WAV stream from `input` and writes its listing to `out`.
///
/// The header is parsed and validated before anything is written, so a
/// malformed file produces no output. The array holds every byte after the
/// 44-byte header, regardless of the declared data size.
pub fn convert<R: Read, W: Write>(
    mut input: R,
    out: &mut W,
    options: &ConvertOptions,
) -> WavResult<ConvertSummary> {
    let header = WavHeader::read_from(&mut input)?;
    debug!(
        channels = header.num_channels,
        sample_rate = header.sample_rate,
        bits_per_sample = header.bits_per_sample,
        declared_data_size = header.sub2_size,
        "parsed WAV header"
    );

    write_header_doc(out, &header, &options.source_name)?;
    writeln!(out)?;
    let total_bytes = write_byte_array(out, &options.declaration, input)?;
    out.flush()?;

    debug!(
        declaration = %options.declaration,
        total_bytes,
        "wrote sample array"
    );
    if i64::from(header.sub2_size) != total_bytes as i64 {
        warn!(
            declared = header.sub2_size,
            actual = total_bytes,
            "sample byte count differs from declared data size"
        );
    }

    Ok(ConvertSummary {
        header,
        declaration: options.declaration.clone(),
        total_bytes,
    })
}
