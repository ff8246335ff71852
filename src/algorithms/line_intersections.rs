//! Shared "segments of A against an R-tree of B" sweeps, used by the
//! intersection predicate, the simplicity checks, and the polygon
//! validators.

use std::ops::ControlFlow;

use crate::{BulkItem, Envelope, RTree, Segment, XY};

pub(crate) fn load_segments(segments: &[Segment]) -> RTree {
    let items = segments
        .iter()
        .enumerate()
        .map(|(i, seg)| BulkItem::new(seg.envelope(), i))
        .collect();
    RTree::bulk_load(items)
}

/// True iff any segment of one set touches any segment of the other.
pub(crate) fn segments_intersect(lines1: &[Segment], lines2: &[Segment]) -> bool {
    if lines1.is_empty() || lines2.is_empty() {
        return false;
    }
    let tree = load_segments(lines1);
    for seg in lines2 {
        let mut hit = false;
        let _ = tree.search(seg.envelope(), |i| {
            if lines1[i].intersect(*seg).is_some() {
                hit = true;
                return ControlFlow::Break(());
            }
            ControlFlow::Continue(())
        });
        if hit {
            return true;
        }
    }
    false
}

/// The shape of the mutual intersection of two segment sets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum LinesIntersection {
    /// The sets are disjoint.
    None,
    /// The sets meet in exactly one distinct point.
    Point(XY),
    /// The sets meet in more than one distinct point (or along a shared
    /// stretch of positive length).
    Multiple,
}

/// Classifies the mutual intersection of two segment sets by accumulating
/// an envelope of intersection points, stopping as soon as the envelope
/// stops being degenerate.
pub(crate) fn intersection_extent(lines1: &[Segment], lines2: &[Segment]) -> LinesIntersection {
    if lines1.is_empty() || lines2.is_empty() {
        return LinesIntersection::None;
    }
    let tree = load_segments(lines1);
    let mut env = Envelope::new_empty();
    let mut multiple = false;
    for seg in lines2 {
        let flow = tree.search(seg.envelope(), |i| {
            match lines1[i].intersect(*seg) {
                None => {}
                Some((pt_a, pt_b)) => {
                    env = env.extend(pt_a).extend(pt_b);
                    if env.has_multiple_points() {
                        multiple = true;
                        return ControlFlow::Break(());
                    }
                }
            }
            ControlFlow::Continue(())
        });
        if flow == ControlFlow::Break(()) {
            break;
        }
    }
    if multiple {
        LinesIntersection::Multiple
    } else if env.is_empty() {
        LinesIntersection::None
    } else {
        LinesIntersection::Point(env.min())
    }
}

/// True iff any pair of segments shares a collinear overlap of positive
/// length, i.e. the mutual intersection has dimension 1.
pub(crate) fn boundaries_overlap(lines1: &[Segment], lines2: &[Segment]) -> bool {
    if lines1.is_empty() || lines2.is_empty() {
        return false;
    }
    let tree = load_segments(lines1);
    for seg in lines2 {
        let mut overlap = false;
        let _ = tree.search(seg.envelope(), |i| {
            if let Some((pt_a, pt_b)) = lines1[i].intersect(*seg) {
                if pt_a != pt_b {
                    overlap = true;
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        });
        if overlap {
            return true;
        }
    }
    false
}
