//! Reading and writing the project file.
//!
//! By default the pruned content is written to a temporary file next to the project file and
//! renamed over it, so a failed write leaves the original intact. The in-place mode truncates
//! and rewrites the file directly.

use crate::PruneError;
use log::debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Reads the whole project file as UTF-8 text.
pub fn read_project_file(path: &Path) -> Result<String, PruneError> {
    debug!("Reading project file {}", path.display());
    fs::read_to_string(path).map_err(|e| PruneError::file_access("read project file", path, &e))
}

/// Replaces the content of `path` with `content`.
///
/// With `atomic` set, `path` is resolved through any symlinks and must not be read-only. The
/// new content is staged in a temporary file next to the resolved file, given its permissions,
/// synced and renamed over it.
pub fn write_project_file(path: &Path, content: &str, atomic: bool) -> Result<(), PruneError> {
    if !atomic {
        debug!("Writing project file {} in place", path.display());
        return fs::write(path, content)
            .map_err(|e| PruneError::file_access("write project file", path, &e));
    }

    // Rename onto the link target so a symlinked project file stays a symlink
    let target = fs::canonicalize(path)
        .map_err(|e| PruneError::file_access("resolve project file", path, &e))?;
    let metadata = fs::metadata(&target)
        .map_err(|e| PruneError::file_access("read file permissions", &target, &e))?;
    // Rename only needs a writable directory; a read-only file must still be refused
    if metadata.permissions().readonly() {
        return Err(PruneError::file_access(
            "write project file",
            path,
            &io::Error::from(io::ErrorKind::PermissionDenied),
        ));
    }

    debug!("Replacing project file {} atomically", target.display());
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|e| PruneError::file_access("create temporary file", dir, &e))?;
    staged
        .write_all(content.as_bytes())
        .map_err(|e| PruneError::file_access("write temporary file", staged.path(), &e))?;
    staged
        .as_file()
        .sync_all()
        .map_err(|e| PruneError::file_access("sync temporary file", staged.path(), &e))?;
    fs::set_permissions(staged.path(), metadata.permissions())
        .map_err(|e| PruneError::file_access("copy file permissions", staged.path(), &e))?;

    staged
        .persist(&target)
        .map_err(|e| PruneError::file_access("replace project file", &target, &e.error))?;
    Ok(())
}
