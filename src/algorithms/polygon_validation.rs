use crate::algorithms::ring_graph::RingGraph;
use crate::algorithms::{intersection_extent, point_ring_side, LinesIntersection, RingSide};
use crate::errors::ValidationError;
use crate::{LineString, Segment};

/// Validates a polygon's ring list (outer ring first, then holes).
///
/// Checks, in order: each ring is a non-empty closed simple LineString; any
/// two rings intersect in at most one distinct point; every hole vertex is
/// inside-or-on the outer ring; and the ring / intersection-point graph is
/// acyclic, which is equivalent to the interior being connected.
pub(crate) fn validate_polygon(rings: &[LineString]) -> Result<(), ValidationError> {
    for ring in rings {
        if ring.is_empty() {
            return Err(ValidationError::EmptyRing);
        }
        if !ring.is_closed() {
            return Err(ValidationError::RingNotClosed);
        }
        ring.coordinates().validate()?;
        if !ring.is_simple() {
            return Err(ValidationError::RingNotSimple);
        }
    }

    let lines: Vec<Vec<Segment>> = rings.iter().map(|r| r.coordinates().lines()).collect();
    let envelopes: Vec<_> = rings.iter().map(LineString::envelope).collect();

    let mut graph = RingGraph::new(rings.len());
    for i in 0..rings.len() {
        for j in i + 1..rings.len() {
            if !envelopes[i].intersects(envelopes[j]) {
                continue;
            }
            match intersection_extent(&lines[i], &lines[j]) {
                LinesIntersection::None => {}
                LinesIntersection::Point(pt) => {
                    let vertex = graph.point_vertex(pt);
                    graph.add_edge(vertex, i);
                    graph.add_edge(vertex, j);
                }
                LinesIntersection::Multiple => {
                    return Err(ValidationError::RingsIntersectAtMultiplePoints)
                }
            }
        }
    }

    let outer = rings[0].coordinates();
    for hole in &rings[1..] {
        let seq = hole.coordinates();
        for k in 0..seq.len() {
            if point_ring_side(seq.get_xy(k), outer) == RingSide::Exterior {
                return Err(ValidationError::HoleOutsideShell);
            }
        }
    }

    if graph.has_cycle() {
        return Err(ValidationError::InteriorNotConnected);
    }
    Ok(())
}
