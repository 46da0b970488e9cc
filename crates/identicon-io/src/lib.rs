//! identicon-io: Filesystem side of identicon generation.
//!
//! [`generate`] is the one-call entry point: it runs the pure pipeline,
//! renders the result and atomically writes `<input>.png` into the
//! working directory. Everything before the final write is pure, so the
//! write is the only step that can leave a trace on failure, and it
//! never leaves a partial file.
//!
//! See [`path`] for how inputs map to file names and which inputs are
//! rejected.

pub mod error;
pub mod path;
pub mod persist;

use std::path::PathBuf;

use identicon_export::OutputFormat;
use identicon_pipeline::{Identicon, IdenticonConfig, process};
use log::info;

pub use error::GenerateError;
pub use path::{check_file_name, file_name, output_path};
pub use persist::write_atomic;

/// Where and how [`generate_with`] writes its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory the file is written into.
    pub out_dir: PathBuf,
    /// Output encoding; decides the file extension.
    pub format: OutputFormat,
    /// Pipeline configuration.
    pub config: IdenticonConfig,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from("."),
            format: OutputFormat::default(),
            config: IdenticonConfig::default(),
        }
    }
}

/// Derive the identicon for `input` and write it to `./<input>.png`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Returns [`GenerateError::UnsafeFileName`] if `input` cannot be used
/// as a file name, [`GenerateError::Export`] if encoding fails and
/// [`GenerateError::Io`] if the file cannot be written.
pub fn generate(input: &str) -> Result<PathBuf, GenerateError> {
    generate_with(input, &GenerateOptions::default())
}

/// Like [`generate`], with explicit output directory, format and
/// pipeline configuration.
///
/// # Errors
///
/// See [`generate`].
pub fn generate_with(input: &str, options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
    // Reject bad names before doing any work.
    check_file_name(input)?;
    let identicon = process(input, &options.config);
    write_identicon(input, &identicon, options)
}

/// Encode an already computed identicon and write it for `input`.
///
/// # Errors
///
/// See [`generate`].
pub fn write_identicon(
    input: &str,
    identicon: &Identicon,
    options: &GenerateOptions,
) -> Result<PathBuf, GenerateError> {
    let path = output_path(&options.out_dir, input, options.format)?;
    let bytes = options.format.encode(identicon, input)?;
    write_atomic(&path, &bytes)?;
    info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options_write_png_to_working_directory() {
        let options = GenerateOptions::default();
        assert_eq!(options.out_dir, PathBuf::from("."));
        assert_eq!(options.format, OutputFormat::Png);
        assert_eq!(options.config, IdenticonConfig::default());
    }

    #[test]
    fn unsafe_name_fails_before_any_io() {
        let options = GenerateOptions {
            out_dir: PathBuf::from("/nonexistent/identicon/dir"),
            ..GenerateOptions::default()
        };
        let result = generate_with("../escape", &options);
        assert!(matches!(result, Err(GenerateError::UnsafeFileName(_))));
    }

    #[test]
    fn missing_out_dir_is_io_error() {
        let options = GenerateOptions {
            out_dir: std::env::temp_dir().join("identicon-io-definitely-missing-dir"),
            ..GenerateOptions::default()
        };
        let result = generate_with("username", &options);
        assert!(matches!(result, Err(GenerateError::Io { .. })));
    }
}
