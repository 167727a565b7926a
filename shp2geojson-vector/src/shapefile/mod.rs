/*
This code is part of the shp2geojson Shapefile conversion library.
Authors: shp2geojson developers
Created: 16/10/2026
Last Modified: 16/10/2026
License: MIT

Notes: Decodes the .shp geometry stream of an ESRI Shapefile into GeoJSON.
Only PolyLine and Polygon files are handled. The format uses mixed
endianness: the file code, file length and each record's number and content
length are big-endian, everything else is little-endian.
*/

pub mod geometry;

use self::geometry::{FeatureRecord, ShapeType};
use crate::error::{Result, ShapefileError};
use crate::geojson::{Feature, FeatureCollection};
use crate::spatial_ref::resolve_spatial_reference;
use shp2geojson_common::structures::{BoundingBox, Point2D};
use shp2geojson_common::utils::{ByteOrderReader, Endianness};

/// Length of the main file header; the first record starts here.
pub const HEADER_LENGTH: usize = 100;

/// Most parts a single record may hold.
pub const MAX_PARTS: i32 = 1000;

// record number, content length, shape type, box, part count and point count
const RECORD_FIXED_LENGTH: usize = 52;

#[derive(Debug, Clone, PartialEq)]
pub struct ShapefileHeader {
    pub file_code: i32,   // BigEndian; value is 9994
    pub file_length: i32, // BigEndian; in 16-bit words
    pub version: i32,     // LittleEndian
    pub shape_type: ShapeType,
    pub x_min: f64,
    pub y_min: f64,
    pub x_max: f64,
    pub y_max: f64,
    /// Length of the whole buffer in bytes.
    pub buffer_length: usize,
}

impl ShapefileHeader {
    /// Reads the 100-byte main file header. Buffers shorter than 101 bytes
    /// hold no geometry and are rejected, as is any shape type other than
    /// PolyLine or Polygon.
    pub fn read(buffer: &[u8]) -> Result<ShapefileHeader> {
        if buffer.len() <= HEADER_LENGTH {
            return Err(ShapefileError::EmptyGeometry {
                length: buffer.len(),
            });
        }
        let eof = |e| ShapefileError::truncated(0, e);
        let mut bor = ByteOrderReader::new(buffer, Endianness::BigEndian);
        let file_code = bor.read_i32().map_err(eof)?;
        bor.seek(24);
        let file_length = bor.read_i32().map_err(eof)?;

        // the rest of the header is in LittleEndian format
        bor.set_byte_order(Endianness::LittleEndian);
        let version = bor.read_i32().map_err(eof)?;
        let shape_type = ShapeType::supported_from_int(bor.read_i32().map_err(eof)?)?;

        Ok(ShapefileHeader {
            file_code,
            file_length,
            version,
            shape_type,
            x_min: bor.read_f64().map_err(eof)?,
            y_min: bor.read_f64().map_err(eof)?,
            x_max: bor.read_f64().map_err(eof)?,
            y_max: bor.read_f64().map_err(eof)?,
            buffer_length: buffer.len(),
        })
    }

    pub fn get_bounding_box(&self) -> BoundingBox {
        BoundingBox::from_extent(self.x_min, self.y_min, self.x_max, self.y_max)
    }
}

/// Options for a single decode call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DecodeOptions {
    /// CRS code the caller expects, e.g. `"4326"`; leave empty to infer it.
    pub crs: String,
    /// Attach each record's header values as a `shapefile_related` member.
    pub include_record_metadata: bool,
}

impl DecodeOptions {
    pub fn with_crs(crs: &str) -> DecodeOptions {
        DecodeOptions {
            crs: crs.to_string(),
            ..Default::default()
        }
    }
}

/// Decodes a complete .shp buffer into a FeatureCollection. `crs` may be empty,
/// in which case the CRS is inferred from the file's extent.
///
/// Examples:
///
/// ```no_run
/// use shp2geojson_vector::decode_shapefile;
///
/// let buffer = std::fs::read("rivers.shp").unwrap();
/// let collection = decode_shapefile(&buffer, "").unwrap();
/// println!("{} features in EPSG:{}", collection.len(), collection.crs_name());
/// ```
pub fn decode_shapefile(buffer: &[u8], crs: &str) -> Result<FeatureCollection> {
    decode_shapefile_with_options(buffer, &DecodeOptions::with_crs(crs))
}

pub fn decode_shapefile_with_options(
    buffer: &[u8],
    options: &DecodeOptions,
) -> Result<FeatureCollection> {
    ShapefileDecoder::new(buffer, options)?.decode()
}

/// State for one decode call: the cursor into the buffer and the header that
/// every record is checked against. A new one is built for every buffer.
struct ShapefileDecoder<'a> {
    bor: ByteOrderReader<'a>,
    header: ShapefileHeader,
    options: &'a DecodeOptions,
    record_start: usize,
}

impl<'a> ShapefileDecoder<'a> {
    fn new(buffer: &'a [u8], options: &'a DecodeOptions) -> Result<ShapefileDecoder<'a>> {
        let header = ShapefileHeader::read(buffer)?;
        Ok(ShapefileDecoder {
            bor: ByteOrderReader::new(buffer, Endianness::BigEndian),
            header,
            options,
            record_start: HEADER_LENGTH,
        })
    }

    fn decode(mut self) -> Result<FeatureCollection> {
        let bbox = self.header.get_bounding_box();
        let crs = resolve_spatial_reference(&bbox, &self.options.crs)?;
        let mut collection = FeatureCollection::new(&crs, bbox);

        self.bor.seek(HEADER_LENGTH);
        while self.bor.pos() < self.bor.len() {
            let record = self.read_record()?;
            collection.push(Feature::from_record(
                &record,
                self.options.include_record_metadata,
            )?);
        }
        Ok(collection)
    }

    fn read_i32(&mut self) -> Result<i32> {
        let start = self.record_start;
        self.bor
            .read_i32()
            .map_err(|e| ShapefileError::truncated(start, e))
    }

    fn read_f64(&mut self) -> Result<f64> {
        let start = self.record_start;
        self.bor
            .read_f64()
            .map_err(|e| ShapefileError::truncated(start, e))
    }

    /// Reads the record under the cursor and leaves the cursor just past it.
    fn read_record(&mut self) -> Result<FeatureRecord> {
        let offset = self.bor.pos();
        self.record_start = offset;

        // record header
        self.bor.set_byte_order(Endianness::BigEndian);
        let record_number = self.read_i32()?;
        let content_length = self.read_i32()?;

        // record contents
        self.bor.set_byte_order(Endianness::LittleEndian);
        let shape_type = ShapeType::supported_from_int(self.read_i32()?)?;
        if shape_type != self.header.shape_type {
            return Err(ShapefileError::malformed(
                offset,
                format!(
                    "record {} is a {} but the file holds {} shapes",
                    record_number, shape_type, self.header.shape_type
                ),
            ));
        }

        let x_min = self.read_f64()?;
        let y_min = self.read_f64()?;
        let x_max = self.read_f64()?;
        let y_max = self.read_f64()?;

        let num_parts = self.read_i32()?;
        if num_parts < 0 {
            return Err(ShapefileError::malformed(
                offset,
                format!("record {} has a negative part count ({})", record_number, num_parts),
            ));
        }
        if num_parts > MAX_PARTS {
            return Err(ShapefileError::TooManyParts {
                record_number,
                num_parts,
                max_parts: MAX_PARTS,
            });
        }

        let num_points = self.read_i32()?;
        if num_points < 0 {
            return Err(ShapefileError::malformed(
                offset,
                format!("record {} has a negative point count ({})", record_number, num_points),
            ));
        }

        // make sure the counts fit in what is left before allocating for them
        let needed = (num_parts as usize)
            .checked_mul(4)
            .zip((num_points as usize).checked_mul(16))
            .and_then(|(part_bytes, point_bytes)| part_bytes.checked_add(point_bytes))
            .ok_or_else(|| {
                ShapefileError::malformed(
                    offset,
                    format!(
                        "record {} declares {} parts and {} points, more than can be addressed",
                        record_number, num_parts, num_points
                    ),
                )
            })?;
        if needed > self.bor.remaining() {
            return Err(ShapefileError::malformed(
                offset,
                format!(
                    "record {} declares {} parts and {} points ({} bytes) but only {} bytes remain",
                    record_number,
                    num_parts,
                    num_points,
                    needed,
                    self.bor.remaining()
                ),
            ));
        }

        let mut parts = Vec::with_capacity(num_parts as usize);
        for _ in 0..num_parts {
            parts.push(self.read_i32()?);
        }

        let mut points = Vec::with_capacity(num_points as usize);
        for _ in 0..num_points {
            let x = self.read_f64()?;
            let y = self.read_f64()?;
            points.push(Point2D::new(x, y));
        }

        debug_assert_eq!(
            self.bor.pos(),
            offset + RECORD_FIXED_LENGTH + needed,
            "cursor must sit just past the record"
        );

        Ok(FeatureRecord {
            offset,
            record_number,
            content_length,
            shape_type,
            bbox: BoundingBox::from_extent(x_min, y_min, x_max, y_max),
            num_parts,
            num_points,
            parts,
            points,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_fixtures;
