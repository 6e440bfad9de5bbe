//! Documentation block describing the parsed header.
//!
//! The block is a `/** ... **/` comment listing every header field as
//! `<size> <FieldName> = <value> - <description>`, grouped by record.

use std::fmt::Display;
use std::io::{self, Write};

use crate::header::WavHeader;

/// Attribution lines at the top of the block.
const ATTRIBUTION: &[&str] = &[
    "Generated with wavembed",
    "I learned about wave file format from:",
    "http://pratikmhatre.wordpress.com/2012/11/05/play-wav-file-using-dac-on-lpc2148/",
];

/// Writes the documentation block for `header`.
///
/// `source_name` is shown verbatim in the `File` line.
pub fn write_header_doc<W: Write>(
    out: &mut W,
    header: &WavHeader,
    source_name: &str,
) -> io::Result<()> {
    writeln!(out, "/**")?;
    comment(out, "")?;
    for line in ATTRIBUTION {
        comment(out, line)?;
    }
    comment(out, "")?;
    comment(out, format_args!("File {}", source_name))?;

    field(out, 4, "ChunkID", header.chunk_id, "Contains the letters “RIFF”.")?;
    field(
        out,
        4,
        "ChunkSize",
        header.chunk_size,
        "Size of the file in bytes minus 8",
    )?;
    // Two spaces after the dash, matching previously generated listings.
    field(out, 4, "Format", header.format, " Contains the letters “WAVE”.")?;
    comment(out, "")?;

    field(out, 4, "Subchunk1ID", header.sub1_id, "Contains the letters “fmt”.")?;
    field(
        out,
        4,
        "Subchunk1Size",
        header.sub1_size,
        "Size of the rest of the Subchunk.",
    )?;
    field(
        out,
        2,
        "AudioFormat",
        header.audio_format,
        "Other than 1 indicate form of compression.",
    )?;
    field(
        out,
        2,
        "NumChannels",
        header.num_channels,
        "Mono = 1, Stereo = 2, etc.",
    )?;
    field(out, 4, "SampleRate", header.sample_rate, "8000, 44100, etc.")?;
    field(
        out,
        4,
        "ByteRate",
        header.byte_rate,
        "SampleRate * NumChannels * BitsPerSample/8",
    )?;
    field(
        out,
        2,
        "BlockAlign",
        header.block_align,
        "NumChannels * BitsPerSample/8",
    )?;
    field(
        out,
        2,
        "BitsPerSample",
        header.bits_per_sample,
        "8 bits = 8, 16 bits = 16, etc.",
    )?;
    comment(out, "")?;

    field(out, 4, "Subchunk2ID", header.sub2_id, "Contains the letters “data”.")?;
    field(
        out,
        4,
        "Subchunk2Size",
        header.sub2_size,
        "NumSamples * NumChannels * BitsPerSample/8",
    )?;
    comment(out, "                          This is the number of bytes in the data.")?;
    comment(out, "")?;

    writeln!(out, " **/")
}

/// Writes one comment line; empty text yields ` * ` with its trailing space.
fn comment<W: Write>(out: &mut W, text: impl Display) -> io::Result<()> {
    writeln!(out, " * {}", text)
}

fn field<W: Write>(
    out: &mut W,
    size: usize,
    name: &str,
    value: impl Display,
    description: &str,
) -> io::Result<()> {
    comment(
        out,
        format_args!("{} {} = {} - {}", size, name, value, description),
    )
}
