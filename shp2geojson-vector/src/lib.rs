/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/

pub mod byte_source;
pub mod error;
pub mod geojson;
pub mod shapefile;
pub mod spatial_ref;

// main entry points
pub use crate::byte_source::{ByteSource, FileByteSource, TransportError};
pub use crate::error::{Result, ShapefileError};
pub use crate::geojson::{Feature, FeatureCollection, Geometry};
pub use crate::shapefile::geometry::{FeatureRecord, ShapeType};
pub use crate::shapefile::{
    decode_shapefile, decode_shapefile_with_options, DecodeOptions, ShapefileHeader,
};
