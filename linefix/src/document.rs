//! Line store: a text file held as 1-based addressable lines.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while loading or saving a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// The file does not exist.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// The file exists but could not be read or is not valid UTF-8.
    #[error("Error reading {}: {source}", path.display())]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The file could not be written.
    #[error("Error writing {}: {source}", path.display())]
    Write {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}

/// An ordered, mutable sequence of lines.
///
/// Lines are split on `\n` only, so a `\r` from CRLF endings stays attached
/// to its line and is written back untouched. A trailing newline shows up as
/// a final empty line, which keeps `from_source(s).to_string() == s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Splits `source` into lines.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        Self {
            lines: source.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Reads a UTF-8 text file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        match fs::read_to_string(path) {
            Ok(source) => Ok(Self::from_source(&source)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(DocumentError::NotFound(path.to_path_buf()))
            }
            Err(source) => Err(DocumentError::Read {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Overwrites `path` with the joined lines.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        fs::write(path, self.to_string()).map_err(|source| DocumentError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns line `line_number` (1-based), or `None` when out of bounds.
    #[must_use]
    pub fn get_line(&self, line_number: usize) -> Option<&str> {
        let index = line_number.checked_sub(1)?;
        self.lines.get(index).map(String::as_str)
    }

    /// Replaces line `line_number` (1-based). Returns `false` and leaves the
    /// document alone when the line does not exist.
    pub fn set_line(&mut self, line_number: usize, text: impl Into<String>) -> bool {
        let Some(slot) = line_number
            .checked_sub(1)
            .and_then(|index| self.lines.get_mut(index))
        else {
            return false;
        };
        *slot = text.into();
        true
    }

    /// Number of lines, counting a trailing empty line after a final newline.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// All lines in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
