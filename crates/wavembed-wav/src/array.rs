//! C array listing of the sample bytes.

use std::io::{self, BufReader, Read, Write};

/// Number of decimal values written per line.
pub const VALUES_PER_LINE: usize = 20;

/// Drains `input` and writes it as a `const char <name>[]` initializer.
///
/// Values are separated by `, `; every 20th separator is followed by a line
/// break, so wrapped lines end in `, `. The listing is followed by a
/// `// total size: N` line, where N counts the bytes actually read. Returns
/// that count.
pub fn write_byte_array<R: Read, W: Write>(out: &mut W, name: &str, input: R) -> io::Result<u64> {
    writeln!(out, "const char {}[] = {{", name)?;

    let mut total: u64 = 0;
    for byte in BufReader::new(input).bytes() {
        let byte = byte?;
        if total > 0 {
            write!(out, ", ")?;
            if total % VALUES_PER_LINE as u64 == 0 {
                writeln!(out)?;
            }
        }
        write!(out, "{}", byte)?;
        total += 1;
    }

    writeln!(out)?;
    writeln!(out, "}};")?;
    writeln!(out, "// total size: {}", total)?;

    Ok(total)
}
