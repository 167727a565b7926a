/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use crate::error::{Result, ShapefileError};
use shp2geojson_common::structures::{BoundingBox, Point2D};
use std::fmt;
use std::ops::Range;

/// One PolyLine or Polygon record, as stored in the .shp file: a flat point
/// array plus the index of the first point of each part.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureRecord {
    /// Byte position of the record header within the file.
    pub offset: usize,
    pub record_number: i32,
    /// In 16-bit words, as stored. Kept for diagnostics only.
    pub content_length: i32,
    pub shape_type: ShapeType,
    pub bbox: BoundingBox,
    pub num_parts: i32,
    pub num_points: i32,
    pub parts: Vec<i32>,
    pub points: Vec<Point2D>,
}

impl FeatureRecord {
    /// Returns the range of point indices covered by each part, in part order.
    /// Part `i` runs from `parts[i]` up to the start of the next part, and the
    /// last part runs to the end of the point array.
    pub fn part_ranges(&self) -> Result<Vec<Range<usize>>> {
        let num_points = self.points.len();
        let mut ranges = Vec::with_capacity(self.parts.len());
        for (i, &start) in self.parts.iter().enumerate() {
            let end = if i == self.parts.len() - 1 {
                num_points as i64
            } else {
                self.parts[i + 1] as i64
            };
            let start = start as i64;
            if start < 0 || start > end || end > num_points as i64 {
                return Err(ShapefileError::malformed(
                    self.offset,
                    format!(
                        "part {} of record {} spans points {}..{} but the record holds {} points",
                        i, self.record_number, start, end, num_points
                    ),
                ));
            }
            ranges.push(start as usize..end as usize);
        }
        Ok(ranges)
    }

    /// Splits the point array into one ring per part. Rings are passed through
    /// as stored; winding order is neither checked nor corrected.
    pub fn rings(&self) -> Result<Vec<Vec<Point2D>>> {
        Ok(self
            .part_ranges()?
            .into_iter()
            .map(|r| self.points[r].to_vec())
            .collect())
    }

    /// Joins every part, in order, into a single path. Parts are not kept
    /// apart, so a multi-part polyline comes out as one continuous line.
    pub fn path(&self) -> Result<Vec<Point2D>> {
        let mut path = Vec::with_capacity(self.points.len());
        for r in self.part_ranges()? {
            path.extend_from_slice(&self.points[r]);
        }
        Ok(path)
    }
}

#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShapeType {
    Null = 0,
    Point = 1,
    PolyLine = 3,
    Polygon = 5,
    MultiPoint = 8,
    PointZ = 11,
    PolyLineZ = 13,
    PolygonZ = 15,
    MultiPointZ = 18,
    PointM = 21,
    PolyLineM = 23,
    PolygonM = 25,
    MultiPointM = 28,
    MultiPatch = 31,
}

impl ShapeType {
    /// Returns `None` for codes that the Esri format does not define.
    pub fn from_int(value: i32) -> Option<ShapeType> {
        match value {
            0 => Some(ShapeType::Null),
            1 => Some(ShapeType::Point),
            3 => Some(ShapeType::PolyLine),
            5 => Some(ShapeType::Polygon),
            8 => Some(ShapeType::MultiPoint),
            11 => Some(ShapeType::PointZ),
            13 => Some(ShapeType::PolyLineZ),
            15 => Some(ShapeType::PolygonZ),
            18 => Some(ShapeType::MultiPointZ),
            21 => Some(ShapeType::PointM),
            23 => Some(ShapeType::PolyLineM),
            25 => Some(ShapeType::PolygonM),
            28 => Some(ShapeType::MultiPointM),
            31 => Some(ShapeType::MultiPatch),
            _ => None,
        }
    }

    pub fn to_int(&self) -> i32 {
        *self as i32
    }

    /// Parses a shape type code, accepting only the kinds this library decodes.
    pub fn supported_from_int(value: i32) -> Result<ShapeType> {
        match ShapeType::from_int(value) {
            Some(st) if st.geojson_type().is_some() => Ok(st),
            _ => Err(ShapefileError::UnsupportedShapeType { code: value }),
        }
    }

    /// The GeoJSON geometry type a record of this shape type becomes.
    pub fn geojson_type(&self) -> Option<&'static str> {
        match self {
            ShapeType::PolyLine => Some("LineString"),
            ShapeType::Polygon => Some("Polygon"),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let printable = match *self {
            ShapeType::Null => "Null",
            ShapeType::Point => "Point",
            ShapeType::PolyLine => "PolyLine",
            ShapeType::Polygon => "Polygon",
            ShapeType::MultiPoint => "MultiPoint",
            ShapeType::PointZ => "PointZ",
            ShapeType::PolyLineZ => "PolyLineZ",
            ShapeType::PolygonZ => "PolygonZ",
            ShapeType::MultiPointZ => "MultiPointZ",
            ShapeType::PointM => "PointM",
            ShapeType::PolyLineM => "PolyLineM",
            ShapeType::PolygonM => "PolygonM",
            ShapeType::MultiPointM => "MultiPointM",
            ShapeType::MultiPatch => "MultiPatch",
        };
        write!(f, "{}", printable)
    }
}
