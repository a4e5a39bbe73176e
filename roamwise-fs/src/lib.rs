//! Capability-based file helpers shared by the Roamwise crates.
//!
//! Catalog files are read and CSV exports written through `cap-std` using
//! ambient authority at the edge of the program. Paths are `camino` UTF-8
//! paths throughout.

#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open an existing file for reading.
///
/// # Errors
/// Propagates the I/O error when the file is missing or unreadable.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Create or truncate a file for writing, creating missing parent
/// directories first.
///
/// # Errors
/// Propagates the I/O error when a directory or the file cannot be created.
pub fn create_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    ensure_parent_dir(path)?;
    let (dir, name) = containing_dir(path)?;
    dir.create(name)
}

/// Report whether `path` names a regular file rather than a directory.
///
/// # Errors
/// Returns [`io::ErrorKind::NotFound`] when the path or one of its parents
/// is missing, and propagates any other I/O error.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = containing_dir(path)?;
    dir.metadata(name.as_str()).map(|meta| meta.is_file())
}

/// Create every missing directory above `path`.
///
/// Relative parents may climb out of the working directory with `..`.
///
/// # Errors
/// Propagates the I/O error when a directory cannot be created.
pub fn ensure_parent_dir(path: &Utf8Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => {
            fs_utf8::Dir::create_ambient_dir_all(parent, ambient_authority())
        }
        _ => Ok(()),
    }
}

fn containing_dir(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "path has no file name"))?
        .to_owned();
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}
