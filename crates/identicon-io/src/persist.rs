//! Atomic file persistence.
//!
//! Bytes are written to a temporary sibling of the destination, flushed
//! to disk, then renamed over the destination. A reader sees either the
//! previous file, no file, or the complete new one; never a partial
//! write.
//!
//! The temporary name does not contain the destination's name, so any
//! destination name the filesystem accepts can be written.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU32, Ordering};

use log::{debug, warn};

use crate::error::GenerateError;

static NEXT_TEMP: AtomicU32 = AtomicU32::new(0);

/// Temporary sibling path used while writing `path`.
///
/// Unique per process and call: `.identicon.<pid>.<n>.tmp`.
fn temp_path(path: &Path) -> PathBuf {
    let n = NEXT_TEMP.fetch_add(1, Ordering::Relaxed);
    path.with_file_name(format!(".identicon.{}.{n}.tmp", std::process::id()))
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Write `bytes` to `path` atomically.
///
/// # Errors
///
/// Returns [`GenerateError::Io`] naming `path` if the temporary file
/// cannot be written or renamed. The temporary file is removed on
/// failure.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), GenerateError> {
    let temp = temp_path(path);
    debug!("writing {} bytes via {}", bytes.len(), temp.display());

    let result = write_and_sync(&temp, bytes).and_then(|()| fs::rename(&temp, path));
    if let Err(source) = result {
        if let Err(e) = fs::remove_file(&temp)
            && e.kind() != std::io::ErrorKind::NotFound
        {
            warn!("could not remove {}: {e}", temp.display());
        }
        return Err(GenerateError::Io {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
