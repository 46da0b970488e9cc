//! Output path derivation.
//!
//! The file's base name is the raw input string followed by the format
//! extension; `"username"` becomes `username.png`. No sanitization is
//! applied. Inputs that would escape the output directory or name
//! something other than a plain file are rejected instead:
//!
//! - anything containing `/`, `\` or NUL;
//! - `.` and `..`.
//!
//! The empty string is accepted and yields the hidden file `.png`.

use std::path::{Path, PathBuf};

use identicon_export::OutputFormat;

use crate::error::GenerateError;

/// Characters that can never appear in the base name.
const FORBIDDEN: &[char] = &['/', '\\', '\0'];

/// Check that `input` can be used verbatim as a base name.
///
/// # Errors
///
/// Returns [`GenerateError::UnsafeFileName`] for inputs listed in the
/// [module docs](self).
pub fn check_file_name(input: &str) -> Result<(), GenerateError> {
    if input.contains(FORBIDDEN) || input == "." || input == ".." {
        return Err(GenerateError::UnsafeFileName(input.to_owned()));
    }
    Ok(())
}

/// The output file name for `input`, e.g. `username.png`.
///
/// # Errors
///
/// Returns [`GenerateError::UnsafeFileName`] if the input is rejected by
/// [`check_file_name`].
pub fn file_name(input: &str, format: OutputFormat) -> Result<String, GenerateError> {
    check_file_name(input)?;
    Ok(format!("{input}.{}", format.extension()))
}

/// The output path for `input` inside `dir`.
///
/// # Errors
///
/// Returns [`GenerateError::UnsafeFileName`] if the input is rejected by
/// [`check_file_name`].
pub fn output_path(dir: &Path, input: &str, format: OutputFormat) -> Result<PathBuf, GenerateError> {
    Ok(dir.join(file_name(input, format)?))
}
