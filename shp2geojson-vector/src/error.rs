/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use thiserror::Error;

/// Everything that can go wrong while decoding a .shp buffer. The first error
/// met ends the decode; no partial output accompanies it.
#[derive(Debug, Error)]
pub enum ShapefileError {
    /// The buffer is too short to hold a header and at least one byte of record data.
    #[error("This shapefile contains no geometry ({length} bytes)")]
    EmptyGeometry { length: usize },

    /// Only PolyLine (3) and Polygon (5) shapes are handled.
    #[error("Unsupported shape type {code}; only polylines (3) and polygons (5) are supported")]
    UnsupportedShapeType { code: i32 },

    #[error("Record {record_number} has {num_parts} parts; at most {max_parts} are supported")]
    TooManyParts {
        record_number: i32,
        num_parts: i32,
        max_parts: i32,
    },

    /// The caller's CRS disagrees with the one inferred from the file's extent.
    #[error("Spatial reference {supplied} does not match the extent of the data, which suggests {sniffed}")]
    SpatialReferenceMismatch { supplied: String, sniffed: String },

    /// A record could not be decoded; `offset` is the byte position where the record starts.
    #[error("Malformed record at byte {offset}: {reason}")]
    MalformedRecord { offset: usize, reason: String },
}

impl ShapefileError {
    pub(crate) fn malformed<S: Into<String>>(offset: usize, reason: S) -> ShapefileError {
        ShapefileError::MalformedRecord {
            offset,
            reason: reason.into(),
        }
    }

    /// Maps a failed read inside the record starting at `offset`.
    pub(crate) fn truncated(offset: usize, err: std::io::Error) -> ShapefileError {
        ShapefileError::malformed(offset, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShapefileError>;
