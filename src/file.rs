// src/file.rs

use std::{
    fs::OpenOptions,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("File not found: {}", .0.display())]
    Missing(PathBuf),
    #[error("Path exists but is not a file: {}", .0.display())]
    NotAFile(PathBuf),
}

/// The file must already exist; never creates it.
pub fn ensure_file(path: &Path) -> Result<(), PathError> {
    if !path.exists() {
        return Err(PathError::Missing(path.to_path_buf()));
    }
    if !path.is_file() {
        return Err(PathError::NotAFile(path.to_path_buf()));
    }
    Ok(())
}

/// Append one record to an existing CSV file as `"\n" + line`.
/// The leading newline matches data files saved without a terminal newline.
pub fn append_line(path: &Path, line: &str) -> Result<(), Box<dyn std::error::Error>> {
    let file = OpenOptions::new().append(true).open(path)?;
    let mut out = BufWriter::new(file);
    out.write_all(b"\n")?;
    out.write_all(line.as_bytes())?;
    out.flush()?;
    Ok(())
}
