//! Errors surfaced by [`generate`](crate::generate).

use std::path::PathBuf;

use identicon_export::ExportError;

/// Errors that can occur while producing an identicon file.
///
/// The pure pipeline stages cannot fail; everything here comes from
/// rendering/encoding or from the filesystem.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The input cannot name a single file inside the output directory.
    #[error("input {0:?} cannot be used as a file name")]
    UnsafeFileName(String),

    /// Rendering or encoding the image failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Creating, writing or renaming the output file failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
}
