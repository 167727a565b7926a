/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT

Notes: Only two reference systems are told apart here, and only by magnitude.
An extent that fits inside the range of longitude and latitude is taken to be
geographic (EPSG:4326); anything larger is taken to be in projected metres
(EPSG:3857). No .prj text is interpreted.
*/
use crate::error::{Result, ShapefileError};
use shp2geojson_common::structures::BoundingBox;

/// WGS 84 longitude/latitude.
pub const GEOGRAPHIC_CRS: &str = "4326";

/// Web Mercator.
pub const PROJECTED_CRS: &str = "3857";

/// Guesses the CRS of a data set from its extent. A NaN bound never counts as
/// being out of range.
pub fn sniff_spatial_reference(bbox: &BoundingBox) -> &'static str {
    let outside_lon = |v: f64| v > 180f64 || v < -180f64;
    let outside_lat = |v: f64| v > 90f64 || v < -90f64;
    if outside_lon(bbox.min_x)
        || outside_lon(bbox.max_x)
        || outside_lat(bbox.min_y)
        || outside_lat(bbox.max_y)
    {
        return PROJECTED_CRS;
    }
    GEOGRAPHIC_CRS
}

/// Trims a CRS code and strips an optional `EPSG:` authority prefix, so that
/// `"EPSG:4326"`, `"epsg:4326"` and `" 4326 "` all become `"4326"`.
pub fn normalize_crs_code(code: &str) -> &str {
    let code = code.trim();
    match code.get(..5) {
        Some(prefix) if prefix.eq_ignore_ascii_case("epsg:") => code[5..].trim(),
        _ => code,
    }
}

/// Settles the CRS of the output. An empty `supplied` code adopts the sniffed
/// one; any other code must agree with it.
pub fn resolve_spatial_reference(bbox: &BoundingBox, supplied: &str) -> Result<String> {
    let sniffed = sniff_spatial_reference(bbox);
    let supplied = normalize_crs_code(supplied);
    if supplied.is_empty() || supplied == sniffed {
        return Ok(sniffed.to_string());
    }
    Err(ShapefileError::SpatialReferenceMismatch {
        supplied: supplied.to_string(),
        sniffed: sniffed.to_string(),
    })
}
