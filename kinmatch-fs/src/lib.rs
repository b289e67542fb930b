//! Capability-based helpers for reading profile and catalog documents.
//!
//! Paths are UTF-8 (`camino`) and every access goes through `cap-std`
//! directory handles opened with ambient authority.
#![forbid(unsafe_code)]

use std::io;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};

/// Open the parent directory of `path` and return it with the file name.
///
/// A bare file name resolves against the current directory.
///
/// # Errors
/// Fails when `path` has no file name or its parent cannot be opened.
pub fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Report whether `path` exists and is a regular file.
///
/// A missing file or parent directory yields `Ok(false)`.
///
/// # Errors
/// Propagates I/O failures other than "not found".
pub fn is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = match open_parent(path) {
        Ok(opened) => opened,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(err) => return Err(err),
    };
    match dir.metadata(name.as_str()) {
        Ok(meta) => Ok(meta.is_file()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err),
    }
}

/// Read a UTF-8 document into memory.
///
/// # Errors
/// Fails when the file cannot be opened or is not valid UTF-8.
pub fn read_document(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name.as_str())
}
