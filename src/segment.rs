use crate::{Envelope, XY};

/// A line segment between two XY positions with distinct locations.
///
/// Degenerate (zero length) segments are suppressed when extracting segments
/// from a [`crate::Sequence`], so the intersection kernel may assume a
/// nonzero direction vector.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: XY,
    pub end: XY,
}

impl Segment {
    pub fn new(start: XY, end: XY) -> Self {
        Segment { start, end }
    }

    pub fn envelope(&self) -> Envelope {
        Envelope::new(self.start, self.end)
    }

    pub fn length(&self) -> f64 {
        let d = self.end - self.start;
        d.dot(d).sqrt()
    }

    pub fn midpoint(&self) -> XY {
        self.start.midpoint(self.end)
    }

    /// Exact point-on-segment test, endpoints included.
    pub fn contains_xy(&self, p: XY) -> bool {
        let d = self.end - self.start;
        if d.cross(p - self.start) != 0. {
            return false;
        }
        self.envelope().contains_xy(p)
    }

    /// Intersection of two segments.
    ///
    /// `None` means disjoint. `Some((a, b))` with `a == b` is a single-point
    /// intersection; with `a != b` it is the two endpoints of a collinear
    /// overlap of positive length.
    pub fn intersect(&self, other: Segment) -> Option<(XY, XY)> {
        let (start_a, end_a) = (self.start, self.end);
        let (start_b, end_b) = (other.start, other.end);

        if (start_a == start_b && end_a == end_b) || (start_a == end_b && end_a == start_b) {
            return Some((start_a, end_a));
        }

        let da = end_a - start_a;
        let db = end_b - start_b;
        let offset = start_b - start_a;

        let da_x_db = da.cross(db);
        let offset_x_da = offset.cross(da);

        if da_x_db == 0. {
            // Parallel. If the offset is not also parallel they are disjoint.
            if offset_x_da != 0. {
                return None;
            }
            // Collinear: project B's endpoints onto A and clip to [0, 1].
            let da_2 = da.dot(da);
            let t0 = offset.dot(da) / da_2;
            let t1 = t0 + da.dot(db) / da_2;
            let t_min = t0.min(t1);
            let t_max = t0.max(t1);
            if t_min > 1. || t_max < 0. {
                return None;
            }
            let start = start_a + da * t_min.max(0.);
            let end = start_a + da * t_max.min(1.);
            Some((start, end))
        } else {
            // Not parallel: intersect the infinite lines, then check that the
            // crossing parameter lies within both segments.
            let ta = offset.cross(db) / da_x_db;
            let tb = offset_x_da / da_x_db;
            if (0. ..=1.).contains(&ta) && (0. ..=1.).contains(&tb) {
                let intersection = start_a + da * ta;
                return Some((intersection, intersection));
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(a: (f64, f64), b: (f64, f64)) -> Segment {
        Segment::new(a.into(), b.into())
    }

    #[test]
    fn test_crossing() {
        let inter = seg((0., 0.), (1., 1.)).intersect(seg((0., 1.), (1., 0.)));
        assert_eq!(inter, Some((XY::new(0.5, 0.5), XY::new(0.5, 0.5))));
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(seg((0., 0.), (1., 0.)).intersect(seg((0., 1.), (1., 1.))), None);
        assert_eq!(seg((0., 0.), (1., 1.)).intersect(seg((2., 0.), (3., -1.))), None);
    }

    #[test]
    fn test_touch_at_endpoint() {
        let inter = seg((0., 0.), (1., 1.)).intersect(seg((1., 1.), (2., 0.)));
        assert_eq!(inter, Some((XY::new(1., 1.), XY::new(1., 1.))));
    }

    #[test]
    fn test_collinear_overlap() {
        let inter = seg((0., 0.), (2., 0.)).intersect(seg((1., 0.), (3., 0.)));
        assert_eq!(inter, Some((XY::new(1., 0.), XY::new(2., 0.))));

        // Overlap that degenerates to a single shared endpoint.
        let inter = seg((0., 0.), (1., 0.)).intersect(seg((1., 0.), (2., 0.)));
        assert_eq!(inter, Some((XY::new(1., 0.), XY::new(1., 0.))));

        // Collinear but disjoint.
        assert_eq!(seg((0., 0.), (1., 0.)).intersect(seg((2., 0.), (3., 0.))), None);
    }

    #[test]
    fn test_contains_xy() {
        let s = seg((0., 0.), (2., 2.));
        assert!(s.contains_xy(XY::new(1., 1.)));
        assert!(s.contains_xy(XY::new(0., 0.)));
        assert!(s.contains_xy(XY::new(2., 2.)));
        assert!(!s.contains_xy(XY::new(3., 3.)));
        assert!(!s.contains_xy(XY::new(1., 1.5)));
    }
}
