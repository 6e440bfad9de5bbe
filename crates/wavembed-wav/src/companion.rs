//! Companion C header declaring the generated array.
//!
//! The header carries an include guard, the array length, the per-sample
//! playback delay in microseconds and an `extern` declaration, so firmware
//! can reference the data without including the listing itself.

use std::io::{self, Write};

use crate::naming::macro_prefix;

/// Microseconds per second, for the per-sample delay.
const MICROS_PER_SECOND: u32 = 1_000_000;

/// Contents of a companion header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionHeader<'a> {
    /// Array name, as used in the listing.
    pub declaration: &'a str,
    /// Number of bytes in the array.
    pub len: u64,
    /// Sample rate in Hz, used for the delay macro.
    pub sample_rate: u32,
    /// Name of the WAV file the array came from.
    pub source_name: &'a str,
}

impl CompanionHeader<'_> {
    /// Whole microseconds to wait between samples, if the rate is known.
    pub fn sample_delay_us(&self) -> Option<u32> {
        (self.sample_rate > 0).then(|| MICROS_PER_SECOND / self.sample_rate)
    }

    /// Writes the header to `out`.
    pub fn write<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let prefix = macro_prefix(self.declaration);

        writeln!(out, "/* Generated with wavembed from {} */", self.source_name)?;
        writeln!(out)?;
        writeln!(out, "#ifndef {}_H_", prefix)?;
        writeln!(out, "#define {}_H_", prefix)?;
        writeln!(out)?;
        writeln!(out, "#define {}_LEN {}", prefix, self.len)?;
        if let Some(delay) = self.sample_delay_us() {
            writeln!(out, "#define {}_DELAY {}", prefix, delay)?;
        }
        writeln!(out)?;
        writeln!(out, "extern const char {}[{}];", self.declaration, self.len)?;
        writeln!(out)?;
        writeln!(out, "#endif /* {}_H_ */", prefix)
    }
}
