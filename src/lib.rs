/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
pub use shp2geojson_vector::{
    decode_shapefile, decode_shapefile_with_options, ByteSource, DecodeOptions, FeatureCollection,
    FileByteSource, ShapefileError, TransportError,
};

use thiserror::Error;

/// Either the bytes could not be obtained, or they were not a usable Shapefile.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Decode(#[from] ShapefileError),
}

/// Fetches the .shp file at `path` from `source` and decodes it.
pub fn convert<S: ByteSource + ?Sized>(
    source: &S,
    path: &str,
    options: &DecodeOptions,
) -> Result<FeatureCollection, ConversionError> {
    let buffer = source.fetch(path)?;
    Ok(decode_shapefile_with_options(&buffer, options)?)
}

/// The status message reported for a failed conversion, `{"error": "..."}`.
pub fn error_message(err: &ConversionError) -> serde_json::Value {
    serde_json::json!({ "error": err.to_string() })
}
