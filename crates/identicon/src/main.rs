//! identicon: write identicon images for the given strings.
//!
//! Each input becomes `<OUT_DIR>/<input>.<format>`. Inputs containing
//! path separators or NUL, and the inputs `.` and `..`, are rejected.
//!
//! # Usage
//!
//! ```text
//! cargo run --release --bin identicon -- [OPTIONS] <INPUT>...
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use identicon_export::OutputFormat;
use identicon_io::{GenerateError, GenerateOptions, check_file_name, generate_with, write_identicon};
use identicon_pipeline::{DigestKind, IdenticonConfig, PipelineDiagnostics};
use log::LevelFilter;

/// Derive deterministic identicon avatars from strings.
///
/// The same input always yields the same 250×250 image.
#[derive(Parser)]
#[command(name = "identicon", version)]
struct Cli {
    /// Strings to derive identicons from; each also names its output file.
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Directory to write images into.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Png)]
    format: Format,

    /// Digest used to derive the pattern.
    #[arg(long, value_enum, default_value_t = Digest::Md5)]
    digest: Digest,

    /// Print per-stage diagnostics as JSON to stdout.
    #[arg(long)]
    diagnostics: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    ///
    /// `RUST_LOG` overrides this when set.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

/// Output format selection.
#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// PNG raster.
    Png,
    /// SVG document.
    Svg,
}

impl From<Format> for OutputFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Png => Self::Png,
            Format::Svg => Self::Svg,
        }
    }
}

/// Digest selection.
#[derive(Clone, Copy, ValueEnum)]
enum Digest {
    /// MD5 (matches other identicon implementations).
    Md5,
    /// SipHash-1-3, 128-bit output.
    Sip128,
}

impl From<Digest> for DigestKind {
    fn from(d: Digest) -> Self {
        match d {
            Digest::Md5 => Self::Md5,
            Digest::Sip128 => Self::Sip128,
        }
    }
}

const fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn configure_logger(verbose: u8) {
    env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .init();
}

/// Generate one file, printing diagnostics first when requested.
fn run_one(input: &str, options: &GenerateOptions, diagnostics: bool) -> Result<PathBuf, GenerateError> {
    if !diagnostics {
        return generate_with(input, options);
    }
    check_file_name(input)?;
    let (report, state) = PipelineDiagnostics::collect(input, options.config);
    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{json}"),
        Err(e) => log::warn!("could not serialize diagnostics for {input:?}: {e}"),
    }
    write_identicon(input, &state.into_identicon(), options)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    configure_logger(cli.verbose);

    let options = GenerateOptions {
        out_dir: cli.out_dir,
        format: cli.format.into(),
        config: IdenticonConfig {
            digest: cli.digest.into(),
        },
    };

    let mut failed = 0usize;
    for input in &cli.inputs {
        match run_one(input, &options, cli.diagnostics) {
            Ok(path) => eprintln!("{}", path.display()),
            Err(e) => {
                eprintln!("error: {input:?}: {e}");
                failed += 1;
            }
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        eprintln!("{failed} of {} inputs failed", cli.inputs.len());
        ExitCode::FAILURE
    }
}
