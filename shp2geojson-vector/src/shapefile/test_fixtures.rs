// Builds .shp buffers for the decoder tests.
use shp2geojson_common::utils::{ByteOrderWriter, Endianness};

pub(crate) struct TestRecord {
    record_number: i32,
    shape_type: i32,
    parts: Vec<i32>,
    points: Vec<(f64, f64)>,
    declared_parts: Option<i32>,
    declared_points: Option<i32>,
}

impl TestRecord {
    pub(crate) fn new(
        record_number: i32,
        shape_type: i32,
        parts: Vec<i32>,
        points: Vec<(f64, f64)>,
    ) -> TestRecord {
        TestRecord {
            record_number,
            shape_type,
            parts,
            points,
            declared_parts: None,
            declared_points: None,
        }
    }

    /// Writes `n` as the part count while still writing the real part table.
    pub(crate) fn with_declared_parts(mut self, n: i32) -> TestRecord {
        self.declared_parts = Some(n);
        self
    }

    /// Writes `n` as the point count while still writing the real points.
    pub(crate) fn with_declared_points(mut self, n: i32) -> TestRecord {
        self.declared_points = Some(n);
        self
    }

    fn write(&self, bow: &mut ByteOrderWriter<Vec<u8>>) {
        let content_length = 44 + 4 * self.parts.len() + 16 * self.points.len();
        bow.set_byte_order(Endianness::BigEndian);
        bow.write_i32(self.record_number).unwrap();
        bow.write_i32((content_length / 2) as i32).unwrap();

        bow.set_byte_order(Endianness::LittleEndian);
        bow.write_i32(self.shape_type).unwrap();
        let mut extent = [f64::INFINITY, f64::INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY];
        for &(x, y) in &self.points {
            extent = [extent[0].min(x), extent[1].min(y), extent[2].max(x), extent[3].max(y)];
        }
        if self.points.is_empty() {
            extent = [0f64; 4];
        }
        for v in extent.iter() {
            bow.write_f64(*v).unwrap();
        }
        bow.write_i32(self.declared_parts.unwrap_or(self.parts.len() as i32))
            .unwrap();
        bow.write_i32(self.declared_points.unwrap_or(self.points.len() as i32))
            .unwrap();
        for p in &self.parts {
            bow.write_i32(*p).unwrap();
        }
        for &(x, y) in &self.points {
            bow.write_f64(x).unwrap();
            bow.write_f64(y).unwrap();
        }
    }
}

pub(crate) struct ShapefileBuilder {
    shape_type: i32,
    bbox: [f64; 4],
    records: Vec<TestRecord>,
    trailing_bytes: usize,
}

impl ShapefileBuilder {
    pub(crate) fn new(shape_type: i32) -> ShapefileBuilder {
        ShapefileBuilder {
            shape_type,
            bbox: [0.0, 0.0, 4.0, 4.0],
            records: vec![],
            trailing_bytes: 0,
        }
    }

    pub(crate) fn with_bbox(mut self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> ShapefileBuilder {
        self.bbox = [min_x, min_y, max_x, max_y];
        self
    }

    pub(crate) fn record(mut self, record: TestRecord) -> ShapefileBuilder {
        self.records.push(record);
        self
    }

    /// Pads the buffer with zero bytes after the last record.
    pub(crate) fn with_trailing_bytes(mut self, n: usize) -> ShapefileBuilder {
        self.trailing_bytes = n;
        self
    }

    pub(crate) fn build(&self) -> Vec<u8> {
        let mut body = ByteOrderWriter::new(Vec::new(), Endianness::BigEndian);
        for record in &self.records {
            record.write(&mut body);
        }
        body.write_bytes(&vec![0u8; self.trailing_bytes]).unwrap();
        let body = body.into_inner();

        let mut bow = ByteOrderWriter::new(Vec::with_capacity(100 + body.len()), Endianness::BigEndian);
        bow.write_i32(9994).unwrap();
        for _ in 0..5 {
            bow.write_i32(0).unwrap();
        }
        bow.write_i32(((100 + body.len()) / 2) as i32).unwrap();
        bow.set_byte_order(Endianness::LittleEndian);
        bow.write_i32(1000).unwrap();
        bow.write_i32(self.shape_type).unwrap();
        for v in self.bbox.iter() {
            bow.write_f64(*v).unwrap();
        }
        // z and m ranges
        for _ in 0..4 {
            bow.write_f64(0f64).unwrap();
        }
        assert_eq!(bow.get_num_bytes_written(), 100);
        bow.write_bytes(&body).unwrap();
        bow.into_inner()
    }
}
