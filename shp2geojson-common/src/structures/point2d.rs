/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use serde::ser::{Serialize, SerializeTuple, Serializer};

/// A 2-D point, with x and y fields.
///
/// Serializes as a GeoJSON position, i.e. the two-element array `[x, y]`.
#[derive(Default, Copy, Clone, Debug)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    /// Creates a new Point2D,
    pub fn new(x: f64, y: f64) -> Point2D {
        Point2D { x, y }
    }
}

impl PartialEq for Point2D {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl Serialize for Point2D {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut position = serializer.serialize_tuple(2)?;
        position.serialize_element(&self.x)?;
        position.serialize_element(&self.y)?;
        position.end()
    }
}
