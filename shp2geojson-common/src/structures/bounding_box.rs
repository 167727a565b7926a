/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use serde::ser::{Serialize, SerializeTuple, Serializer};
use std::fmt;

/// An axis-aligned extent. Serializes in GeoJSON `bbox` order,
/// `[min_x, min_y, max_x, max_y]`.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    /// Creates a box from the four values exactly as they were stored, without
    /// re-ordering them.
    pub fn from_extent(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> BoundingBox {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn to_array(&self) -> [f64; 4] {
        [self.min_x, self.min_y, self.max_x, self.max_y]
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}

impl Serialize for BoundingBox {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut bbox = serializer.serialize_tuple(4)?;
        for v in self.to_array().iter() {
            bbox.serialize_element(v)?;
        }
        bbox.end()
    }
}
