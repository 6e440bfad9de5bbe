//! Test fixtures: canonical header construction.

use byteorder::{LittleEndian, WriteBytesExt};

use crate::header::{Tag, WavHeader};

/// Header for a mono 8-bit PCM file at 8 kHz carrying `data_len` sample bytes.
pub fn pcm8_header(data_len: i32) -> WavHeader {
    WavHeader {
        chunk_id: Tag::RIFF,
        chunk_size: 36u32.wrapping_add(data_len as u32),
        format: Tag::WAVE,
        sub1_id: Tag::FMT,
        sub1_size: 16,
        audio_format: 1,
        num_channels: 1,
        sample_rate: 8000,
        byte_rate: 8000,
        block_align: 1,
        bits_per_sample: 8,
        sub2_id: Tag::DATA,
        sub2_size: data_len,
    }
}

/// Serializes a header into its 44-byte on-disk layout.
pub fn header_bytes(header: &WavHeader) -> Vec<u8> {
    let mut buf = Vec::with_capacity(44);
    buf.extend_from_slice(&header.chunk_id.0);
    buf.write_u32::<LittleEndian>(header.chunk_size).unwrap();
    buf.extend_from_slice(&header.format.0);

    buf.extend_from_slice(&header.sub1_id.0);
    buf.write_i32::<LittleEndian>(header.sub1_size).unwrap();
    buf.write_i16::<LittleEndian>(header.audio_format).unwrap();
    buf.write_i16::<LittleEndian>(header.num_channels).unwrap();
    buf.write_u32::<LittleEndian>(header.sample_rate).unwrap();
    buf.write_u32::<LittleEndian>(header.byte_rate).unwrap();
    buf.write_i16::<LittleEndian>(header.block_align).unwrap();
    buf.write_i16::<LittleEndian>(header.bits_per_sample).unwrap();

    buf.extend_from_slice(&header.sub2_id.0);
    buf.write_i32::<LittleEndian>(header.sub2_size).unwrap();
    buf
}

/// A complete file: header followed by `samples`.
pub fn wav_file(header: &WavHeader, samples: &[u8]) -> Vec<u8> {
    let mut bytes = header_bytes(header);
    bytes.extend_from_slice(samples);
    bytes
}
