//! Output writing and media copying.
//!
//! Thin I/O wrappers around the core: JSON serialization of the assembled
//! document, output directory housekeeping and the verbatim media copy.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::ConvertError;
use crate::models::AnimationDocument;

/// Serialize the document to a JSON file, creating parent directories.
///
/// Numeric-string fields are emitted as-is; pretty-printing only changes
/// whitespace.
pub fn write_document(
    document: &AnimationDocument,
    path: &Path,
    pretty: bool,
) -> Result<(), ConvertError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = if pretty {
        serde_json::to_string_pretty(document)
    } else {
        serde_json::to_string(document)
    }
    .map_err(|e| ConvertError::Io(format!("serializing document: {}", e)))?;

    fs::write(path, json)?;
    Ok(())
}

/// Delete the contents of a directory, recursing one level deep.
///
/// Clears stale outputs from a previous run. Missing directories are fine.
pub fn clean_dir_contents(dir: &Path) -> io::Result<()> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e),
    };

    for entry in entries {
        let path = entry?.path();
        if path.is_dir() {
            for nested in fs::read_dir(&path)? {
                let nested = nested?.path();
                if nested.is_file() {
                    fs::remove_file(nested)?;
                }
            }
        } else {
            fs::remove_file(path)?;
        }
    }
    Ok(())
}

/// Recursively copy the media directory verbatim; returns files copied.
pub fn copy_media(src: &Path, dst: &Path) -> Result<usize, ConvertError> {
    fs::create_dir_all(dst)?;

    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dst.join(entry.file_name());
        if entry.path().is_dir() {
            copied += copy_media(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}
