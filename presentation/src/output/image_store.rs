//! Writes rendered image bytes to disk

use chrono::Local;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use thiserror::Error;

/// Errors raised while saving an image
#[derive(Error, Debug)]
pub enum ImageStoreError {
    #[error("Failed to create image directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write image {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Saves images into a directory under timestamped, non-colliding names
pub struct ImageStore {
    dir: PathBuf,
    counter: AtomicUsize,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            counter: AtomicUsize::new(0),
        }
    }

    /// Write the bytes to a new file and return its path
    pub fn save(&self, bytes: &[u8]) -> Result<PathBuf, ImageStoreError> {
        std::fs::create_dir_all(&self.dir).map_err(|source| ImageStoreError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let file_name = format!(
            "image-{}-{}.{}",
            Local::now().format("%Y%m%d-%H%M%S"),
            seq,
            sniff_extension(bytes)
        );
        let path = self.dir.join(file_name);

        std::fs::write(&path, bytes).map_err(|source| ImageStoreError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}

/// File extension for the image format, detected from magic bytes
pub fn sniff_extension(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "png",
        [0xFF, 0xD8, 0xFF, ..] => "jpg",
        [b'G', b'I', b'F', b'8', ..] => "gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "webp",
        _ => "bin",
    }
}
