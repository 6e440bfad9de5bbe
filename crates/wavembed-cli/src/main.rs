//! wavembed CLI - Embed WAV sample data in C sources
//!
//! This binary reads a PCM WAV file and prints a documented `const char`
//! array holding its sample bytes.

use clap::Parser;
use std::process::ExitCode;

use wavembed_cli::{commands, logging};

/// wavembed - Convert a PCM WAV file into a C byte array listing
#[derive(Parser)]
#[command(name = "wavembed")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The wave file to process
    file: String,

    /// Place the output into file (default: stdout)
    #[arg(short, long)]
    out: Option<String>,

    /// Array name (default: file name up to the first '.', plus "Sound")
    #[arg(short, long)]
    name: Option<String>,

    /// Also write a C header declaring the array and its length
    #[arg(long)]
    header_out: Option<String>,

    /// Log debug diagnostics to stderr (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = commands::convert::run(
        &cli.file,
        cli.out.as_deref(),
        cli.name.as_deref(),
        cli.header_out.as_deref(),
    );

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_file_only() {
        let cli = Cli::try_parse_from(["wavembed", "melody.wav"]).unwrap();
        assert_eq!(cli.file, "melody.wav");
        assert!(cli.out.is_none());
        assert!(cli.name.is_none());
        assert!(cli.header_out.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_short_out() {
        let cli = Cli::try_parse_from(["wavembed", "melody.wav", "-o", "melody.c"]).unwrap();
        assert_eq!(cli.out.as_deref(), Some("melody.c"));
    }

    #[test]
    fn test_cli_parses_long_out() {
        let cli =
            Cli::try_parse_from(["wavembed", "--out", "melody.c", "melody.wav"]).unwrap();
        assert_eq!(cli.file, "melody.wav");
        assert_eq!(cli.out.as_deref(), Some("melody.c"));
    }

    #[test]
    fn test_cli_parses_all_options() {
        let cli = Cli::try_parse_from([
            "wavembed",
            "intro.wav",
            "--out",
            "intro.c",
            "--name",
            "pacmanBeginningSound",
            "--header-out",
            "intro.h",
            "--verbose",
        ])
        .unwrap();
        assert_eq!(cli.file, "intro.wav");
        assert_eq!(cli.out.as_deref(), Some("intro.c"));
        assert_eq!(cli.name.as_deref(), Some("pacmanBeginningSound"));
        assert_eq!(cli.header_out.as_deref(), Some("intro.h"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_requires_file() {
        let err = Cli::try_parse_from(["wavembed"]).err().unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        let err = Cli::try_parse_from(["wavembed", "melody.wav", "--width", "16"])
            .err()
            .unwrap();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_cli_out_requires_value() {
        assert!(Cli::try_parse_from(["wavembed", "melody.wav", "-o"]).is_err());
    }
}
