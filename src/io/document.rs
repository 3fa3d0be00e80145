//! Read/write whole JSON documents.
//!
//! Writes go through a temp file in the destination directory that is renamed
//! over the target, so a failed run never leaves a half-written output behind.
//! The replaced file keeps its permissions; a new file gets the same mode a
//! plain `File::create` would give it.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;
use serde_json::Value;
use tempfile::{Builder, NamedTempFile};

use crate::error::{AppError, EXIT_INTERNAL};

/// Read and parse a JSON (or GeoJSON) document.
pub fn read_document(path: &Path) -> Result<Value, AppError> {
    let file = File::open(path).map_err(|e| AppError::io("open", path, e))?;
    let document: Value = serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        if e.is_io() {
            AppError::io("read", path, e)
        } else {
            AppError::malformed(format!("Invalid JSON in '{}': {e}", path.display()))
        }
    })?;
    info!("read {}", path.display());
    Ok(document)
}

/// Write a document as 2-space indented UTF-8 JSON, replacing `path` atomically.
///
/// Non-ASCII text is written literally, never as `\u` escapes.
pub fn write_document(path: &Path, document: &Value) -> Result<(), AppError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = create_temp_in(dir)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| AppError::io("copy permissions of", path, e))?;
    }
    write_pretty(BufWriter::new(tmp.as_file()), path, document)?;
    tmp.persist(path).map_err(|e| AppError::io("replace", path, e.error))?;

    info!("wrote {}", path.display());
    Ok(())
}

fn write_pretty<W: Write>(mut writer: W, path: &Path, document: &Value) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut writer, document).map_err(|e| {
        if e.is_io() {
            AppError::io("write", path, e)
        } else {
            AppError::new(EXIT_INTERNAL, format!("Failed to serialize document: {e}"))
        }
    })?;
    writer
        .write_all(b"\n")
        .and_then(|_| writer.flush())
        .map_err(|e| AppError::io("write", path, e))
}

fn create_temp_in(dir: &Path) -> Result<NamedTempFile, AppError> {
    let mut builder = Builder::new();
    // tempfile defaults to 0600; 0666 lets the umask decide, as `File::create` does.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder
        .tempfile_in(dir)
        .map_err(|e| AppError::io("create temp file in", dir, e))
}
