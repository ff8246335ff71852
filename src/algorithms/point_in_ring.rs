use crate::{Segment, Sequence, XY};

/// Where a point sits relative to a closed ring.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RingSide {
    Interior,
    Boundary,
    Exterior,
}

/// Jordan test of a point against a closed ring given by its coordinate
/// sequence (first point equal to last).
///
/// Boundary detection is exact: any point lying on a ring segment reports
/// `Boundary`. Otherwise a horizontal ray cast counts crossings with a
/// half-open edge rule so shared vertices are not double counted.
pub fn point_ring_side(point: XY, ring: &Sequence) -> RingSide {
    let mut wn: i32 = 0;
    for i in 0..ring.len() {
        let seg = match ring.get_line(i) {
            Some(seg) => seg,
            None => continue,
        };
        if seg.contains_xy(point) {
            return RingSide::Boundary;
        }
        wn += winding_number(point, seg);
    }
    if wn != 0 {
        RingSide::Interior
    } else {
        RingSide::Exterior
    }
}

// Contribution of one edge to the winding number of `point`. The half-open
// rule (start row inclusive, end row exclusive for upward edges and the
// mirror for downward ones) keeps vertex crossings counted exactly once.
fn winding_number(point: XY, seg: Segment) -> i32 {
    let (start, end) = (seg.start, seg.end);
    // The two halves of the cross product (= lx - rx).
    let lx = (end.x - start.x) * (point.y - start.y);
    let rx = (end.y - start.y) * (point.x - start.x);

    if start.y <= point.y {
        // Upward crossing
        if end.y > point.y && lx > rx {
            return 1;
        }
    } else {
        // Downward crossing
        if end.y <= point.y && lx < rx {
            return -1;
        }
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(coords: Vec<(f64, f64)>) -> Sequence {
        Sequence::from_xys(coords.into_iter().map(XY::from))
    }

    #[test]
    fn test_square() {
        let sq = ring(vec![(0., 0.), (2., 0.), (2., 2.), (0., 2.), (0., 0.)]);
        assert_eq!(point_ring_side(XY::new(1., 1.), &sq), RingSide::Interior);
        assert_eq!(point_ring_side(XY::new(3., 1.), &sq), RingSide::Exterior);
        assert_eq!(point_ring_side(XY::new(-1., 0.), &sq), RingSide::Exterior);
        assert_eq!(point_ring_side(XY::new(0., 0.), &sq), RingSide::Boundary);
        assert_eq!(point_ring_side(XY::new(1., 0.), &sq), RingSide::Boundary);
        assert_eq!(point_ring_side(XY::new(2., 1.), &sq), RingSide::Boundary);
    }

    #[test]
    fn test_ray_through_vertex() {
        // A ray through (1, 1) passes exactly through the vertex at (2, 1);
        // the half-open rule must count it once, not twice.
        let diamond = ring(vec![(2., 0.), (4., 1.), (2., 2.), (0., 1.), (2., 0.)]);
        assert_eq!(point_ring_side(XY::new(2., 1.), &diamond), RingSide::Interior);
        assert_eq!(point_ring_side(XY::new(-1., 1.), &diamond), RingSide::Exterior);
        assert_eq!(point_ring_side(XY::new(5., 1.), &diamond), RingSide::Exterior);
    }

    #[test]
    fn test_concave_ring() {
        // U-shaped ring: the notch between the prongs is exterior.
        let u = ring(vec![
            (0., 0.),
            (5., 0.),
            (5., 4.),
            (4., 4.),
            (4., 1.),
            (1., 1.),
            (1., 4.),
            (0., 4.),
            (0., 0.),
        ]);
        assert_eq!(point_ring_side(XY::new(2.5, 2.), &u), RingSide::Exterior);
        assert_eq!(point_ring_side(XY::new(0.5, 2.), &u), RingSide::Interior);
        assert_eq!(point_ring_side(XY::new(4.5, 2.), &u), RingSide::Interior);
    }

    #[test]
    fn test_degenerate_edges_skipped() {
        let sq = ring(vec![
            (0., 0.),
            (2., 0.),
            (2., 0.),
            (2., 2.),
            (0., 2.),
            (0., 0.),
        ]);
        assert_eq!(point_ring_side(XY::new(1., 1.), &sq), RingSide::Interior);
    }
}
