//! Convert command implementation
//!
//! Reads a PCM WAV file and writes its C array listing to a file or stdout,
//! optionally with a companion header declaring the array.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

use wavembed_wav::{convert, declaration_name, CompanionHeader, ConvertOptions};

/// Run the convert command
///
/// # Arguments
/// * `file` - Path to the input WAV file
/// * `out` - Listing output path (default: stdout)
/// * `name` - Array name override (default: derived from `file`)
/// * `header_out` - Optional path for a companion C header
///
/// # Returns
/// Exit code: 0 on success
pub fn run(
    file: &str,
    out: Option<&str>,
    name: Option<&str>,
    header_out: Option<&str>,
) -> Result<ExitCode> {
    let input_path = Path::new(file);
    let input =
        File::open(input_path).with_context(|| format!("Failed to open input file: {}", file))?;

    let options = ConvertOptions {
        source_name: file.to_string(),
        declaration: name
            .map(str::to_string)
            .unwrap_or_else(|| declaration_name(input_path)),
    };

    let mut sink: Box<dyn Write> = match out {
        Some(path) => Box::new(BufWriter::new(
            File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?,
        )),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let summary = convert(input, &mut sink, &options)
        .with_context(|| format!("Failed to convert {}", file))?;
    sink.flush().context("Failed to flush listing output")?;
    info!(
        declaration = %summary.declaration,
        total_bytes = summary.total_bytes,
        "listing complete"
    );

    if let Some(path) = header_out {
        write_companion(
            path,
            &summary.declaration,
            summary.total_bytes,
            summary.header.sample_rate,
            file,
        )?;
    }

    if let Some(path) = out {
        eprintln!(
            "{}",
            success_message(summary.total_bytes, &summary.declaration, path)
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Completion line shown on stderr when the listing went to a file.
pub fn success_message(total_bytes: u64, declaration: &str, path: &str) -> String {
    format!(
        "{} Wrote {} bytes as {} to {}",
        "SUCCESS".green().bold(),
        total_bytes,
        declaration,
        path
    )
}

fn write_companion(
    path: &str,
    declaration: &str,
    len: u64,
    sample_rate: u32,
    source_name: &str,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create header file: {}", path))?;
    let mut writer = BufWriter::new(file);

    CompanionHeader {
        declaration,
        len,
        sample_rate,
        source_name,
    }
    .write(&mut writer)
    .and_then(|()| writer.flush())
    .with_context(|| format!("Failed to write header file: {}", path))?;

    info!(path, "wrote companion header");
    Ok(())
}
