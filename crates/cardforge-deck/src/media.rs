//! Media staging.
//!
//! Generated audio and images are written to a staging directory before
//! packaging, since the packager reads media from the filesystem. The
//! store rejects duplicate filenames so two cards never silently clobber
//! each other's media.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DeckError;

/// Stages generated media files in a directory and tracks their paths.
#[derive(Debug)]
pub struct MediaStore {
    dir: PathBuf,
    names: BTreeSet<String>,
    files: Vec<PathBuf>,
}

impl MediaStore {
    /// Creates a media store rooted at `dir`, creating the directory if
    /// it does not exist.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, DeckError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            names: BTreeSet::new(),
            files: Vec::new(),
        })
    }

    /// Writes `data` under `filename` in the staging directory.
    ///
    /// Filenames must be unique across the store; the packaging target
    /// keeps all media in one flat namespace.
    ///
    /// # Errors
    /// Returns [`DeckError::DuplicateMedia`] if `filename` was already added.
    pub fn add(&mut self, filename: &str, data: &[u8]) -> Result<PathBuf, DeckError> {
        if !self.names.insert(filename.to_string()) {
            return Err(DeckError::DuplicateMedia(filename.to_string()));
        }
        let path = self.dir.join(filename);
        fs::write(&path, data)?;
        self.files.push(path.clone());
        Ok(path)
    }

    /// Returns the staged file paths in insertion order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the staging directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of staged files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if nothing has been staged.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Formats a field reference to a staged audio file: `[sound:name]`.
pub fn sound_ref(filename: &str) -> String {
    format!("[sound:{}]", filename)
}

/// Formats a field reference to a staged image file: `<img src="name">`.
pub fn img_ref(filename: &str) -> String {
    format!("<img src=\"{}\">", filename)
}
