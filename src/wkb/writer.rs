use super::{encode_type_code, WkbGeometryType};
use crate::{Geometry, LineString, Point, Polygon, Sequence};

pub(super) fn append_geometry(buf: &mut Vec<u8>, geometry: &Geometry) {
    match geometry {
        Geometry::Point(g) => append_point(buf, g),
        Geometry::LineString(g) => append_line_string(buf, g),
        Geometry::Polygon(g) => append_polygon(buf, g),
        Geometry::MultiPoint(g) => {
            append_header(buf, WkbGeometryType::MultiPoint, g.coordinates_type());
            append_count(buf, g.num_points());
            for point in g.points() {
                append_point(buf, point);
            }
        }
        Geometry::MultiLineString(g) => {
            append_header(buf, WkbGeometryType::MultiLineString, g.coordinates_type());
            append_count(buf, g.num_line_strings());
            for ls in g.line_strings() {
                append_line_string(buf, ls);
            }
        }
        Geometry::MultiPolygon(g) => {
            append_header(buf, WkbGeometryType::MultiPolygon, g.coordinates_type());
            append_count(buf, g.num_polygons());
            for polygon in g.polygons() {
                append_polygon(buf, polygon);
            }
        }
        Geometry::GeometryCollection(g) => {
            append_header(buf, WkbGeometryType::GeometryCollection, g.coordinates_type());
            append_count(buf, g.num_geometries());
            for child in g.geometries() {
                append_geometry(buf, child);
            }
        }
    }
}

// Little-endian byte order flag plus the offset-form type code.
fn append_header(buf: &mut Vec<u8>, base: WkbGeometryType, ctype: crate::CoordinatesType) {
    buf.push(1);
    buf.extend_from_slice(&encode_type_code(base, ctype).to_le_bytes());
}

fn append_count(buf: &mut Vec<u8>, count: usize) {
    buf.extend_from_slice(&(count as u32).to_le_bytes());
}

fn append_f64(buf: &mut Vec<u8>, value: f64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

fn append_point(buf: &mut Vec<u8>, point: &Point) {
    append_header(buf, WkbGeometryType::Point, point.coordinates_type());
    match point.coordinates() {
        Some(coords) => {
            append_f64(buf, coords.xy.x);
            append_f64(buf, coords.xy.y);
            if let Some(z) = coords.z {
                append_f64(buf, z);
            }
            if let Some(m) = coords.m {
                append_f64(buf, m);
            }
        }
        // The empty Point has no representation in strict OGC WKB; encode
        // it as all-NaN ordinates.
        None => {
            for _ in 0..point.coordinates_type().dimension() {
                append_f64(buf, f64::NAN);
            }
        }
    }
}

fn append_sequence(buf: &mut Vec<u8>, seq: &Sequence) {
    append_count(buf, seq.len());
    for value in seq.floats() {
        append_f64(buf, *value);
    }
}

fn append_line_string(buf: &mut Vec<u8>, ls: &LineString) {
    append_header(buf, WkbGeometryType::LineString, ls.coordinates_type());
    append_sequence(buf, ls.coordinates());
}

fn append_polygon(buf: &mut Vec<u8>, polygon: &Polygon) {
    append_header(buf, WkbGeometryType::Polygon, polygon.coordinates_type());
    append_count(buf, polygon.rings().len());
    for ring in polygon.rings() {
        append_sequence(buf, ring.coordinates());
    }
}

#[cfg(test)]
mod tests {
    use crate::{ConstructorOptions, Geometry};

    // WKT in, WKB out, back through the reader: the reparse must be
    // identical, including coordinate type and emptiness.
    fn roundtrip(wkt: &str) {
        let g = Geometry::from_wkt(wkt).unwrap();
        let buf = g.as_binary();
        let back = Geometry::from_wkb(&buf).unwrap();
        assert_eq!(back, g, "{}", wkt);
    }

    #[test]
    fn test_roundtrips() {
        roundtrip("POINT(1 2)");
        roundtrip("POINT EMPTY");
        roundtrip("POINT ZM (1 2 3 4)");
        roundtrip("POINT M EMPTY");
        roundtrip("LINESTRING(0 0,1 1,2 0)");
        roundtrip("LINESTRING EMPTY");
        roundtrip("LINESTRING Z (0 0 1,1 1 2)");
        roundtrip("POLYGON((0 0,2 0,2 2,0 2,0 0),(0.5 0.5,1.5 0.5,1.5 1.5,0.5 1.5,0.5 0.5))");
        roundtrip("POLYGON EMPTY");
        roundtrip("MULTIPOINT(1 2,3 4)");
        roundtrip("MULTIPOINT(EMPTY,1 2)");
        roundtrip("MULTIPOINT EMPTY");
        roundtrip("MULTILINESTRING((0 0,1 1),(2 2,3 3))");
        roundtrip("MULTILINESTRING EMPTY");
        roundtrip("MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),((2 0,3 0,3 1,2 1,2 0)))");
        roundtrip("MULTIPOLYGON EMPTY");
        roundtrip("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))");
        roundtrip("GEOMETRYCOLLECTION EMPTY");
        roundtrip("GEOMETRYCOLLECTION Z (POINT Z (1 2 3))");
    }

    #[test]
    fn test_point_wkb_layout() {
        let g = Geometry::from_wkt("POINT(1 2)").unwrap();
        let buf = g.as_binary();
        assert_eq!(buf.len(), 1 + 4 + 8 + 8);
        assert_eq!(buf[0], 1);
        assert_eq!(u32::from_le_bytes(buf[1..5].try_into().unwrap()), 1);
        assert_eq!(f64::from_le_bytes(buf[5..13].try_into().unwrap()), 1.);
        assert_eq!(f64::from_le_bytes(buf[13..21].try_into().unwrap()), 2.);
    }

    #[test]
    fn test_z_type_code_offset_form() {
        let g = Geometry::from_wkt("POINT Z (1 2 3)").unwrap();
        let buf = g.as_binary();
        assert_eq!(u32::from_le_bytes(buf[1..5].try_into().unwrap()), 1001);
    }

    #[test]
    fn test_skip_validations_roundtrip() {
        // A bowtie is invalid, but skip_validations lets it through both
        // the writer and the reader.
        let bowtie = "POLYGON((0 0,2 2,2 0,0 2,0 0))";
        let g = Geometry::from_wkt_with(bowtie, ConstructorOptions::skip_validations()).unwrap();
        let back =
            Geometry::from_wkb_with(&g.as_binary(), ConstructorOptions::skip_validations())
                .unwrap();
        assert_eq!(back, g);
    }
}
