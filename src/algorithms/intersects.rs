use crate::algorithms::{point_ring_side, segments_intersect, RingSide};
use crate::{
    Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon, Segment, XY,
};

/// True iff the two geometries share at least one point. Symmetric and
/// total over every variant pair.
///
/// The pair is first sorted by variant rank so each combination is handled
/// once; a GeometryCollection on either side is handled by recursing into
/// its members.
pub fn intersects(g1: &Geometry, g2: &Geometry) -> bool {
    let (g1, g2) = if g1.geometry_type() <= g2.geometry_type() {
        (g1, g2)
    } else {
        (g2, g1)
    };

    if let Geometry::GeometryCollection(gc) = g2 {
        return gc.geometries().iter().any(|child| intersects(g1, child));
    }

    use Geometry::*;
    match (g1, g2) {
        (Point(p1), Point(p2)) => point_with_point(p1, p2),
        (Point(p), LineString(ls)) => point_with_segments(p, &line_segments(ls)),
        (Point(p), Polygon(poly)) => match p.xy() {
            Some(xy) => xy_with_polygon(xy, poly),
            None => false,
        },
        (Point(p), MultiPoint(mp)) => point_with_multi_point(p, mp),
        (Point(p), MultiLineString(mls)) => point_with_segments(p, &multi_line_segments(mls)),
        (Point(p), MultiPolygon(mp)) => match p.xy() {
            Some(xy) => xy_with_multi_polygon(xy, mp),
            None => false,
        },

        (LineString(ls1), LineString(ls2)) => {
            segments_intersect(&line_segments(ls1), &line_segments(ls2))
        }
        (LineString(ls), Polygon(poly)) => {
            line_strings_with_polygons(std::slice::from_ref(ls), std::slice::from_ref(poly))
        }
        (LineString(ls), MultiPoint(mp)) => multi_point_with_segments(mp, &line_segments(ls)),
        (LineString(ls), MultiLineString(mls)) => {
            segments_intersect(&line_segments(ls), &multi_line_segments(mls))
        }
        (LineString(ls), MultiPolygon(mp)) => {
            line_strings_with_polygons(std::slice::from_ref(ls), mp.polygons())
        }

        (Polygon(p1), Polygon(p2)) => polygon_with_polygon(p1, p2),
        (Polygon(poly), MultiPoint(mp)) => multi_point_with_polygons(mp, std::slice::from_ref(poly)),
        (Polygon(poly), MultiLineString(mls)) => {
            line_strings_with_polygons(mls.line_strings(), std::slice::from_ref(poly))
        }
        (Polygon(poly), MultiPolygon(mp)) => {
            polygons_with_polygons(std::slice::from_ref(poly), mp.polygons())
        }

        (MultiPoint(mp1), MultiPoint(mp2)) => mp1
            .points()
            .iter()
            .any(|p| point_with_multi_point(p, mp2)),
        (MultiPoint(mp), MultiLineString(mls)) => {
            multi_point_with_segments(mp, &multi_line_segments(mls))
        }
        (MultiPoint(mp), MultiPolygon(mpoly)) => multi_point_with_polygons(mp, mpoly.polygons()),

        (MultiLineString(mls1), MultiLineString(mls2)) => {
            segments_intersect(&multi_line_segments(mls1), &multi_line_segments(mls2))
        }
        (MultiLineString(mls), MultiPolygon(mp)) => {
            line_strings_with_polygons(mls.line_strings(), mp.polygons())
        }

        (MultiPolygon(mp1), MultiPolygon(mp2)) => {
            polygons_with_polygons(mp1.polygons(), mp2.polygons())
        }

        // The pair is rank sorted and collections are peeled off above, so
        // any other combination is a dispatch table bug.
        _ => unreachable!(
            "unhandled geometry pair {:?} and {:?}",
            g1.geometry_type(),
            g2.geometry_type()
        ),
    }
}

fn line_segments(ls: &LineString) -> Vec<Segment> {
    ls.coordinates().lines()
}

fn multi_line_segments(mls: &MultiLineString) -> Vec<Segment> {
    mls.line_strings()
        .iter()
        .flat_map(|ls| ls.coordinates().lines())
        .collect()
}

fn polygons_boundary_segments(polygons: &[Polygon]) -> Vec<Segment> {
    polygons
        .iter()
        .flat_map(|p| p.rings().iter().flat_map(|r| r.coordinates().lines()))
        .collect()
}

fn point_with_point(p1: &Point, p2: &Point) -> bool {
    match (p1.xy(), p2.xy()) {
        (Some(xy1), Some(xy2)) => xy1 == xy2,
        _ => false,
    }
}

fn point_with_segments(p: &Point, segments: &[Segment]) -> bool {
    match p.xy() {
        Some(xy) => segments.iter().any(|seg| seg.contains_xy(xy)),
        None => false,
    }
}

fn point_with_multi_point(p: &Point, mp: &MultiPoint) -> bool {
    mp.points().iter().any(|other| point_with_point(p, other))
}

fn multi_point_with_segments(mp: &MultiPoint, segments: &[Segment]) -> bool {
    mp.points().iter().any(|p| point_with_segments(p, segments))
}

/// Boundary counts as intersecting: the point must not be exterior to the
/// outer ring nor interior to any hole.
fn xy_with_polygon(xy: XY, polygon: &Polygon) -> bool {
    let outer = match polygon.exterior_ring() {
        Some(outer) => outer,
        None => return false,
    };
    if point_ring_side(xy, outer.coordinates()) == RingSide::Exterior {
        return false;
    }
    for i in 0..polygon.num_interior_rings() {
        let hole = polygon.interior_ring_n(i);
        if point_ring_side(xy, hole.coordinates()) == RingSide::Interior {
            return false;
        }
    }
    true
}

fn xy_with_multi_polygon(xy: XY, mp: &MultiPolygon) -> bool {
    mp.polygons().iter().any(|poly| xy_with_polygon(xy, poly))
}

fn multi_point_with_polygons(mp: &MultiPoint, polygons: &[Polygon]) -> bool {
    mp.points().iter().any(|p| match p.xy() {
        Some(xy) => polygons.iter().any(|poly| xy_with_polygon(xy, poly)),
        None => false,
    })
}

/// A set of line strings meets a set of polygons iff a line touches a
/// polygon boundary, or failing that, a line lies wholly inside one of the
/// polygons, detectable from any single control point.
fn line_strings_with_polygons(line_strings: &[LineString], polygons: &[Polygon]) -> bool {
    let line_segs: Vec<Segment> = line_strings
        .iter()
        .flat_map(|ls| ls.coordinates().lines())
        .collect();
    if segments_intersect(&line_segs, &polygons_boundary_segments(polygons)) {
        return true;
    }
    for ls in line_strings {
        if ls.is_empty() {
            continue;
        }
        let start = ls.coordinates().get_xy(0);
        if polygons.iter().any(|poly| xy_with_polygon(start, poly)) {
            return true;
        }
    }
    false
}

/// Polygons intersect iff their boundaries meet, or one contains an
/// arbitrary control point of the other.
fn polygon_with_polygon(p1: &Polygon, p2: &Polygon) -> bool {
    let b1 = polygons_boundary_segments(std::slice::from_ref(p1));
    let b2 = polygons_boundary_segments(std::slice::from_ref(p2));
    if segments_intersect(&b1, &b2) {
        return true;
    }
    let control = |poly: &Polygon| poly.exterior_ring().map(|r| r.coordinates().get_xy(0));
    if let Some(xy) = control(p1) {
        if xy_with_polygon(xy, p2) {
            return true;
        }
    }
    if let Some(xy) = control(p2) {
        if xy_with_polygon(xy, p1) {
            return true;
        }
    }
    false
}

fn polygons_with_polygons(polys1: &[Polygon], polys2: &[Polygon]) -> bool {
    polys1
        .iter()
        .any(|p1| polys2.iter().any(|p2| polygon_with_polygon(p1, p2)))
}
