/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to obtain the bytes of a file, as opposed to the bytes being invalid.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("There was an error reading the shapefile: {path} was not found")]
    NotFound { path: String },

    #[error("There was an error reading the shapefile {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can hand over the complete contents of a named resource.
pub trait ByteSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, TransportError>;
}

/// Reads files from disk. Relative paths are taken to be relative to the
/// working directory, when one is set, and a leading `file://` is ignored.
#[derive(Debug, Clone, Default)]
pub struct FileByteSource {
    working_directory: PathBuf,
}

impl FileByteSource {
    pub fn new<P: AsRef<Path>>(working_directory: P) -> FileByteSource {
        FileByteSource {
            working_directory: working_directory.as_ref().to_path_buf(),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path.strip_prefix("file://").unwrap_or(path));
        if path.is_relative() && !self.working_directory.as_os_str().is_empty() {
            return self.working_directory.join(path);
        }
        path.to_path_buf()
    }
}

impl ByteSource for FileByteSource {
    fn fetch(&self, path: &str) -> Result<Vec<u8>, TransportError> {
        let resolved = self.resolve(path);
        fs::read(&resolved).map_err(|e| {
            let path = resolved.display().to_string();
            if e.kind() == ErrorKind::NotFound {
                TransportError::NotFound { path }
            } else {
                TransportError::Io { path, source: e }
            }
        })
    }
}
