//! wavembed WAV reader
//!
//! Turns a canonical PCM WAV file into a C source listing: a comment block
//! documenting the header fields, followed by the sample bytes as a
//! `const char` array ready to compile into firmware.
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use std::path::Path;
//! use wavembed_wav::{convert, declaration_name, ConvertOptions};
//!
//! let path = Path::new("melody.wav");
//! let options = ConvertOptions {
//!     source_name: path.display().to_string(),
//!     declaration: declaration_name(path),
//! };
//! let summary = convert(File::open(path)?, &mut std::io::stdout(), &options)?;
//! eprintln!("{} bytes", summary.total_bytes);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Crate Structure
//!
//! - [`header`] - 44-byte header reader and validation
//! - [`doc`] - Documentation comment block
//! - [`array`] - Sample byte array listing
//! - [`naming`] - Array and macro identifiers
//! - [`companion`] - Companion C header
//! - [`convert()`] - The full pipeline

pub mod array;
pub mod companion;
pub mod convert;
pub mod doc;
pub mod error;
pub mod header;
pub mod naming;

#[cfg(test)]
mod fixtures;

pub use array::{write_byte_array, VALUES_PER_LINE};
pub use companion::CompanionHeader;
pub use convert::{convert, ConvertOptions, ConvertSummary};
pub use doc::write_header_doc;
pub use error::{WavError, WavResult};
pub use header::{Tag, WavHeader, HEADER_SIZE, PCM_FORMAT};
pub use naming::{declaration_name, macro_prefix};
