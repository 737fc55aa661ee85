use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the notes file, relative to the working directory, when none
/// is given on the command line
pub(crate) const DEFAULT_NOTES_PATH: &str = "calendar_square/calendar_notes.txt";

/// The plain-text file backing the notes panel.
///
/// Saving overwrites the file in place; there is no temporary file and no
/// rename, so a crash mid-write can leave a truncated file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct NotesFile {
    path: PathBuf,
}

impl NotesFile {
    pub(crate) fn new<P: Into<PathBuf>>(path: P) -> NotesFile {
        NotesFile { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole file.  A file that does not exist yet holds no notes.
    pub(crate) fn load(&self) -> Result<String, NotesError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(source) => Err(NotesError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replace the file's contents with `text`, creating any missing parent
    /// directories
    pub(crate) fn save(&self, text: &str) -> Result<(), NotesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| NotesError::CreateDir {
                path: parent.to_owned(),
                source,
            })?;
        }
        std::fs::write(&self.path, text).map_err(|source| NotesError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl Default for NotesFile {
    fn default() -> NotesFile {
        NotesFile::new(DEFAULT_NOTES_PATH)
    }
}

#[derive(Debug, Error)]
pub(crate) enum NotesError {
    #[error("failed to read notes from {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create directory {}", .path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write notes to {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}
