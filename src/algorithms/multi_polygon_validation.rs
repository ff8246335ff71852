use std::cmp::Ordering;
use std::collections::HashSet;

use crate::algorithms::sweep::MinHeap;
use crate::algorithms::{boundaries_overlap, point_ring_side, RingSide};
use crate::errors::ValidationError;
use crate::{Envelope, Polygon, Segment, XY};

#[derive(Copy, Clone, PartialEq)]
struct ActivePolygon {
    max_x: f64,
    index: usize,
}

impl Eq for ActivePolygon {}

impl Ord for ActivePolygon {
    fn cmp(&self, other: &Self) -> Ordering {
        self.max_x
            .total_cmp(&other.max_x)
            .then(self.index.cmp(&other.index))
    }
}

impl PartialOrd for ActivePolygon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Validates that the member polygons of a MultiPolygon have pairwise
/// disjoint interiors and that their boundaries touch only at points.
///
/// An X-axis sweep over the polygon envelopes keeps the pairwise work down:
/// members are visited in `min_x` order while an active set (min-heap keyed
/// by `max_x`) drops members that can no longer overlap. Empty members are
/// skipped entirely.
pub(crate) fn validate_multi_polygon(polygons: &[Polygon]) -> Result<(), ValidationError> {
    let mut indexes: Vec<usize> = (0..polygons.len())
        .filter(|&i| !polygons[i].is_empty())
        .collect();
    let envelopes: Vec<Envelope> = polygons.iter().map(Polygon::envelope).collect();
    indexes.sort_by(|&i, &j| envelopes[i].x_min.total_cmp(&envelopes[j].x_min));

    let boundaries: Vec<Vec<Segment>> = polygons.iter().map(boundary_segments).collect();

    let mut active: MinHeap<ActivePolygon> = MinHeap::new();
    for &i in &indexes {
        let current_x = envelopes[i].x_min;
        while let Some(top) = active.peek() {
            if top.max_x < current_x {
                active.pop();
            } else {
                break;
            }
        }
        for entry in active.iter() {
            let j = entry.index;
            if !envelopes[i].intersects(envelopes[j]) {
                continue;
            }
            if boundaries_overlap(&boundaries[i], &boundaries[j]) {
                return Err(ValidationError::BoundariesCross);
            }
            if interiors_intersect(&polygons[i], &polygons[j]) {
                return Err(ValidationError::InteriorsIntersect);
            }
        }
        active.push(ActivePolygon {
            max_x: envelopes[i].x_max,
            index: i,
        });
    }
    Ok(())
}

fn boundary_segments(polygon: &Polygon) -> Vec<Segment> {
    polygon
        .rings()
        .iter()
        .flat_map(|r| r.coordinates().lines())
        .collect()
}

/// Whether two polygon interiors share a point.
///
/// Along each boundary segment of one polygon, collect the segment's
/// endpoints and its single-point intersections with the other polygon's
/// rings, sort them along the segment, and sample the midpoint of each
/// consecutive pair. The interiors intersect iff one of the sampled points
/// is strictly interior to the other polygon. Both orders are checked.
pub(crate) fn interiors_intersect(p1: &Polygon, p2: &Polygon) -> bool {
    let (mut p1, mut p2) = (p1, p2);
    for _ in 0..2 {
        std::mem::swap(&mut p1, &mut p2);

        let p2_lines: Vec<Segment> = boundary_segments(p2);
        let mut candidates: Vec<XY> = Vec::new();
        let mut seen: HashSet<(u64, u64)> = HashSet::new();
        let mut push = |pt: XY, out: &mut Vec<XY>| {
            if seen.insert(pt.key()) {
                out.push(pt);
            }
        };

        for ring in p1.rings() {
            for line1 in ring.coordinates().lines() {
                let mut line_pts: Vec<XY> = vec![line1.start, line1.end];
                for line2 in &p2_lines {
                    let (pt_a, pt_b) = match line1.intersect(*line2) {
                        Some(inter) => inter,
                        None => continue,
                    };
                    if pt_a != pt_b {
                        continue;
                    }
                    if pt_a != line1.start && pt_a != line1.end {
                        line_pts.push(pt_a);
                    }
                }
                line_pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
                line_pts.dedup();
                for pair in line_pts.windows(2) {
                    push(pair[0].midpoint(pair[1]), &mut candidates);
                }
                for pt in line_pts {
                    push(pt, &mut candidates);
                }
            }
        }

        if candidates.iter().any(|&pt| point_interior_to_polygon(pt, p2)) {
            return true;
        }
    }
    false
}

fn point_interior_to_polygon(pt: XY, polygon: &Polygon) -> bool {
    let outer = match polygon.exterior_ring() {
        Some(outer) => outer,
        None => return false,
    };
    if point_ring_side(pt, outer.coordinates()) != RingSide::Interior {
        return false;
    }
    for i in 0..polygon.num_interior_rings() {
        let hole = polygon.interior_ring_n(i);
        if point_ring_side(pt, hole.coordinates()) != RingSide::Exterior {
            return false;
        }
    }
    true
}
