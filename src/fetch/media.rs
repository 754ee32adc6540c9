//! Media persistence behind a trait seam.
//!
//! The metadata travels through unchanged; what a store does with it is its
//! own business. [`FsMediaStore`] is the bundled filesystem implementation.

use std::fs;
use std::path::PathBuf;

use log::info;
use serde::{Deserialize, Serialize};

use crate::fetch::client::FetchedImage;
use crate::Result;

/// Descriptive metadata handed to a media store alongside the image bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMetadata {
    pub title: Option<String>,
    pub filename: String,
    pub alt_text: Option<String>,
    pub folder: Option<String>,
}

impl MediaMetadata {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_alt_text(mut self, alt_text: impl Into<String>) -> Self {
        self.alt_text = Some(alt_text.into());
        self
    }

    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// Anything that can persist a fetched image.
pub trait MediaStore {
    /// Save the image, returning a locator for the stored copy.
    fn save(&self, image: &FetchedImage, meta: &MediaMetadata) -> Result<String>;
}

/// Media store that writes images into a directory tree on the local
/// filesystem. The file extension comes from the sniffed image format, not
/// from the caller.
pub struct FsMediaStore {
    root: PathBuf,
}

impl FsMediaStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MediaStore for FsMediaStore {
    fn save(&self, image: &FetchedImage, meta: &MediaMetadata) -> Result<String> {
        let mut dir = self.root.clone();
        if let Some(folder) = &meta.folder {
            dir.push(folder);
        }
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.{}", meta.filename, image.extension()));
        fs::write(&path, &image.bytes)?;
        info!("saved {} bytes to {}", image.bytes.len(), path.display());
        Ok(path.to_string_lossy().into_owned())
    }
}
