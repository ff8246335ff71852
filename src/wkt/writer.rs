use std::fmt::Write;

use crate::{
    CoordinatesType, Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, Sequence,
};

pub(super) fn append_geometry(out: &mut String, geometry: &Geometry) {
    match geometry {
        Geometry::Point(g) => append_point(out, g),
        Geometry::LineString(g) => append_line_string(out, g),
        Geometry::Polygon(g) => append_polygon(out, g),
        Geometry::MultiPoint(g) => append_multi_point(out, g),
        Geometry::MultiLineString(g) => append_multi_line_string(out, g),
        Geometry::MultiPolygon(g) => append_multi_polygon(out, g),
        Geometry::GeometryCollection(g) => append_geometry_collection(out, g),
    }
}

// "TAG" for XY, "TAG Z " / "TAG M " / "TAG ZM " otherwise. The trailing
// space separates the modifier from the body.
fn append_header(out: &mut String, tag: &str, ctype: CoordinatesType) {
    out.push_str(tag);
    if ctype != CoordinatesType::XY {
        out.push(' ');
        out.push_str(ctype.wkt_modifier());
        out.push(' ');
    }
}

// "EMPTY", preceded by a space unless one is already there.
fn append_empty(out: &mut String) {
    if !out.ends_with(' ') {
        out.push(' ');
    }
    out.push_str("EMPTY");
}

fn append_point(out: &mut String, point: &Point) {
    append_header(out, "POINT", point.coordinates_type());
    match point.coordinates() {
        None => append_empty(out),
        Some(coords) => {
            out.push('(');
            append_coordinates(out, &[coords.xy.x, coords.xy.y], coords.z, coords.m);
            out.push(')');
        }
    }
}

fn append_line_string(out: &mut String, ls: &LineString) {
    append_header(out, "LINESTRING", ls.coordinates_type());
    if ls.is_empty() {
        return append_empty(out);
    }
    append_sequence(out, ls.coordinates());
}

fn append_polygon(out: &mut String, polygon: &Polygon) {
    append_header(out, "POLYGON", polygon.coordinates_type());
    if polygon.is_empty() {
        return append_empty(out);
    }
    append_polygon_body(out, polygon);
}

fn append_polygon_body(out: &mut String, polygon: &Polygon) {
    out.push('(');
    for (i, ring) in polygon.rings().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        append_sequence(out, ring.coordinates());
    }
    out.push(')');
}

fn append_multi_point(out: &mut String, mp: &MultiPoint) {
    append_header(out, "MULTIPOINT", mp.coordinates_type());
    if mp.num_points() == 0 {
        return append_empty(out);
    }
    out.push('(');
    for (i, point) in mp.points().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        match point.coordinates() {
            None => out.push_str("EMPTY"),
            Some(coords) => append_coordinates(out, &[coords.xy.x, coords.xy.y], coords.z, coords.m),
        }
    }
    out.push(')');
}

fn append_multi_line_string(out: &mut String, mls: &MultiLineString) {
    append_header(out, "MULTILINESTRING", mls.coordinates_type());
    if mls.num_line_strings() == 0 {
        return append_empty(out);
    }
    out.push('(');
    for (i, ls) in mls.line_strings().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if ls.is_empty() {
            out.push_str("EMPTY");
        } else {
            append_sequence(out, ls.coordinates());
        }
    }
    out.push(')');
}

fn append_multi_polygon(out: &mut String, mp: &MultiPolygon) {
    append_header(out, "MULTIPOLYGON", mp.coordinates_type());
    if mp.num_polygons() == 0 {
        return append_empty(out);
    }
    out.push('(');
    for (i, polygon) in mp.polygons().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if polygon.is_empty() {
            out.push_str("EMPTY");
        } else {
            append_polygon_body(out, polygon);
        }
    }
    out.push(')');
}

fn append_geometry_collection(out: &mut String, gc: &GeometryCollection) {
    append_header(out, "GEOMETRYCOLLECTION", gc.coordinates_type());
    if gc.num_geometries() == 0 {
        return append_empty(out);
    }
    out.push('(');
    for (i, geometry) in gc.geometries().iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        append_geometry(out, geometry);
    }
    out.push(')');
}

fn append_sequence(out: &mut String, seq: &Sequence) {
    out.push('(');
    for i in 0..seq.len() {
        if i > 0 {
            out.push(',');
        }
        let coords = seq.get(i);
        append_coordinates(out, &[coords.xy.x, coords.xy.y], coords.z, coords.m);
    }
    out.push(')');
}

fn append_coordinates(out: &mut String, xy: &[f64; 2], z: Option<f64>, m: Option<f64>) {
    append_float(out, xy[0]);
    out.push(' ');
    append_float(out, xy[1]);
    if let Some(z) = z {
        out.push(' ');
        append_float(out, z);
    }
    if let Some(m) = m {
        out.push(' ');
        append_float(out, m);
    }
}

// std's Display for f64 is shortest-round-trip.
fn append_float(out: &mut String, value: f64) {
    let _ = write!(out, "{}", value);
}

#[cfg(test)]
mod tests {
    use crate::{ConstructorOptions, Geometry};

    fn roundtrip(wkt: &str) {
        let g = Geometry::from_wkt(wkt).unwrap();
        assert_eq!(g.as_text(), wkt);
        assert_eq!(Geometry::from_wkt(&g.as_text()).unwrap(), g);
    }

    #[test]
    fn test_canonical_output() {
        roundtrip("POINT(1 2)");
        roundtrip("POINT EMPTY");
        roundtrip("POINT Z (1 2 3)");
        roundtrip("POINT M (1 2 3)");
        roundtrip("POINT ZM (1 2 3 4)");
        roundtrip("POINT Z EMPTY");
        roundtrip("LINESTRING(0 0,1 1,2 0)");
        roundtrip("LINESTRING EMPTY");
        roundtrip("POLYGON((0 0,2 0,2 2,0 2,0 0),(0.5 0.5,1.5 0.5,1.5 1.5,0.5 1.5,0.5 0.5))");
        roundtrip("POLYGON EMPTY");
        roundtrip("MULTIPOINT(1 2,3 4)");
        roundtrip("MULTIPOINT(EMPTY,1 2)");
        roundtrip("MULTIPOINT EMPTY");
        roundtrip("MULTILINESTRING((0 0,1 1),(2 2,3 3))");
        roundtrip("MULTILINESTRING(EMPTY)");
        roundtrip("MULTIPOLYGON(((0 0,1 0,1 1,0 1,0 0)),EMPTY)");
        roundtrip("MULTIPOLYGON EMPTY");
        roundtrip("GEOMETRYCOLLECTION(POINT(1 2),LINESTRING(0 0,1 1))");
        roundtrip("GEOMETRYCOLLECTION EMPTY");
    }

    #[test]
    fn test_float_formatting() {
        roundtrip("POINT(0.1 -2.5)");
        roundtrip("POINT(100000000000 0.000001)");
        let g = Geometry::from_wkt("POINT(1.0 2.50)").unwrap();
        assert_eq!(g.as_text(), "POINT(1 2.5)");
    }

    #[test]
    fn test_normalizes_multipoint_parens() {
        let g = Geometry::from_wkt("MULTIPOINT((1 2),(3 4))").unwrap();
        assert_eq!(g.as_text(), "MULTIPOINT(1 2,3 4)");
    }

    #[test]
    fn test_zm_collection() {
        let g = Geometry::from_wkt_with(
            "GEOMETRYCOLLECTION Z (POINT Z (1 2 3))",
            ConstructorOptions::default(),
        )
        .unwrap();
        assert_eq!(g.as_text(), "GEOMETRYCOLLECTION Z (POINT Z (1 2 3))");
    }
}
