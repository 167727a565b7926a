/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT
*/
use crate::error::{Result, ShapefileError};
use crate::shapefile::geometry::{FeatureRecord, ShapeType};
use serde::Serialize;
use shp2geojson_common::structures::{BoundingBox, Point2D};

/// A GeoJSON FeatureCollection built from the records of one .shp buffer. The
/// features keep the order in which their records appear in the file.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub struct FeatureCollection {
    crs: Crs,
    bbox: BoundingBox,
    features: Vec<Feature>,
}

impl FeatureCollection {
    pub(crate) fn new(crs_name: &str, bbox: BoundingBox) -> FeatureCollection {
        FeatureCollection {
            crs: Crs {
                properties: CrsProperties {
                    name: crs_name.to_string(),
                },
            },
            bbox,
            features: vec![],
        }
    }

    pub(crate) fn push(&mut self, feature: Feature) {
        self.features.push(feature);
    }

    /// The CRS code, e.g. `"4326"`.
    pub fn crs_name(&self) -> &str {
        &self.crs.properties.name
    }

    pub fn bbox(&self) -> BoundingBox {
        self.bbox
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    pub fn to_json_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self, pretty: bool) -> serde_json::Result<String> {
        if pretty {
            return serde_json::to_string_pretty(self);
        }
        serde_json::to_string(self)
    }
}

/// A named CRS member, `{"type": "name", "properties": {"name": ...}}`.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename = "name")]
struct Crs {
    properties: CrsProperties,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
struct CrsProperties {
    name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub struct Feature {
    pub bbox: BoundingBox,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shapefile_related: Option<RecordMetadata>,
}

impl Feature {
    /// Turns a decoded record into a Feature, reassembling its parts into
    /// rings (Polygon) or a single path (PolyLine).
    pub fn from_record(record: &FeatureRecord, include_metadata: bool) -> Result<Feature> {
        let geometry = match record.shape_type {
            ShapeType::PolyLine => Geometry::LineString {
                coordinates: record.path()?,
            },
            ShapeType::Polygon => Geometry::Polygon {
                coordinates: record.rings()?,
            },
            other => {
                return Err(ShapefileError::UnsupportedShapeType {
                    code: other.to_int(),
                })
            }
        };
        let shapefile_related = if include_metadata {
            Some(RecordMetadata {
                record_number: record.record_number,
                content_length: record.content_length,
                shape_type: record.shape_type.to_int(),
                bbox: record.bbox,
                num_parts: record.num_parts,
                num_points: record.num_points,
                first_part: record.parts.first().copied(),
            })
        } else {
            None
        };
        Ok(Feature {
            bbox: record.bbox,
            properties: FeatureProperties {
                record_number: record.record_number,
            },
            geometry,
            shapefile_related,
        })
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FeatureProperties {
    #[serde(rename = "RecordNumber")]
    pub record_number: i32,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type")]
pub enum Geometry {
    LineString { coordinates: Vec<Point2D> },
    Polygon { coordinates: Vec<Vec<Point2D>> },
}

impl Geometry {
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::LineString { .. } => "LineString",
            Geometry::Polygon { .. } => "Polygon",
        }
    }
}

/// The raw record header values, carried as the `shapefile_related` foreign
/// member when requested.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecordMetadata {
    #[serde(rename = "RecordNumber")]
    pub record_number: i32,
    #[serde(rename = "ContentLength")]
    pub content_length: i32,
    #[serde(rename = "ShapeType")]
    pub shape_type: i32,
    #[serde(rename = "box")]
    pub bbox: BoundingBox,
    #[serde(rename = "numParts")]
    pub num_parts: i32,
    #[serde(rename = "numPoints")]
    pub num_points: i32,
    /// Offset of the first part; null for a record with no parts.
    #[serde(rename = "Parts")]
    pub first_part: Option<i32>,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn polygon_record() -> FeatureRecord {
        FeatureRecord {
            offset: 100,
            record_number: 7,
            content_length: 56,
            shape_type: ShapeType::Polygon,
            bbox: BoundingBox::from_extent(0.0, 0.0, 4.0, 4.0),
            num_parts: 1,
            num_points: 4,
            parts: vec![0],
            points: vec![
                Point2D::new(0.0, 0.0),
                Point2D::new(4.0, 0.0),
                Point2D::new(4.0, 4.0),
                Point2D::new(0.0, 0.0),
            ],
        }
    }

    #[test]
    fn test_feature_collection_json_layout() {
        let mut fc = FeatureCollection::new("4326", BoundingBox::from_extent(0.0, 0.0, 4.0, 4.0));
        fc.push(Feature::from_record(&polygon_record(), false).unwrap());
        let value = fc.to_json_value().unwrap();
        assert_eq!(
            value,
            json!({
                "type": "FeatureCollection",
                "crs": { "type": "name", "properties": { "name": "4326" } },
                "bbox": [0.0, 0.0, 4.0, 4.0],
                "features": [{
                    "type": "Feature",
                    "bbox": [0.0, 0.0, 4.0, 4.0],
                    "properties": { "RecordNumber": 7 },
                    "geometry": {
                        "type": "Polygon",
                        "coordinates": [[[0.0, 0.0], [4.0, 0.0], [4.0, 4.0], [0.0, 0.0]]]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_polyline_becomes_line_string() {
        let mut rec = polygon_record();
        rec.shape_type = ShapeType::PolyLine;
        let feature = Feature::from_record(&rec, false).unwrap();
        assert_eq!(feature.geometry.type_name(), "LineString");
        let value = serde_json::to_value(&feature.geometry).unwrap();
        assert_eq!(value["coordinates"][2], json!([4.0, 4.0]));
        assert_eq!(value["coordinates"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_record_metadata_member() {
        let feature = Feature::from_record(&polygon_record(), true).unwrap();
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(
            value["shapefile_related"],
            json!({
                "RecordNumber": 7,
                "ContentLength": 56,
                "ShapeType": 5,
                "box": [0.0, 0.0, 4.0, 4.0],
                "numParts": 1,
                "numPoints": 4,
                "Parts": 0
            })
        );

        let without = serde_json::to_value(&Feature::from_record(&polygon_record(), false).unwrap()).unwrap();
        assert!(without.get("shapefile_related").is_none());
    }

    #[test]
    fn test_record_metadata_without_parts() {
        let mut rec = polygon_record();
        rec.num_parts = 0;
        rec.parts.clear();
        let feature = Feature::from_record(&rec, true).unwrap();
        let value = serde_json::to_value(&feature).unwrap();
        assert_eq!(value["shapefile_related"]["Parts"], serde_json::Value::Null);
        assert_eq!(value["geometry"]["coordinates"], json!([]));
    }

    #[test]
    fn test_only_line_and_polygon_records_become_features() {
        for shape_type in [ShapeType::Point, ShapeType::MultiPoint, ShapeType::PolygonZ] {
            let mut rec = polygon_record();
            rec.shape_type = shape_type;
            match Feature::from_record(&rec, false) {
                Err(ShapefileError::UnsupportedShapeType { code }) => {
                    assert_eq!(code, shape_type.to_int())
                }
                other => panic!("expected UnsupportedShapeType, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_compact_and_pretty_output() {
        let fc = FeatureCollection::new("3857", BoundingBox::default());
        assert!(fc.is_empty());
        let compact = fc.to_json_string(false).unwrap();
        assert!(compact.starts_with(r#"{"type":"FeatureCollection","crs":"#));
        assert!(!compact.contains('\n'));
        assert!(fc.to_json_string(true).unwrap().contains('\n'));
    }
}
