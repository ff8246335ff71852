use std::collections::HashSet;
use std::ops::ControlFlow;

use crate::algorithms::line_intersections::load_segments;
use crate::{BulkItem, MultiLineString, RTree, Segment, Sequence};

/// LineString simplicity: the curve must not pass through the same point
/// twice, with the single exception of coincident endpoints.
///
/// Every non-degenerate segment is bulk loaded into an R-tree keyed by its
/// segment index; each segment then range-searches for later segments and
/// classifies the pairwise intersection.
pub(crate) fn is_simple_line_string(seq: &Sequence) -> bool {
    let (first, last) = match seq.first_and_last_lines() {
        Some(bounds) => bounds,
        // No curve at all: trivially simple.
        None => return true,
    };
    let closed = seq.get_xy(0) == seq.get_xy(seq.len() - 1);

    let segments: Vec<(usize, Segment)> = (0..seq.len())
        .filter_map(|i| seq.get_line(i).map(|seg| (i, seg)))
        .collect();
    let tree = RTree::bulk_load(
        segments
            .iter()
            .map(|(i, seg)| BulkItem::new(seg.envelope(), *i))
            .collect(),
    );

    for &(i, seg) in &segments {
        let prev = seq.prev_line(i);
        let next = seq.next_line(i);

        let mut simple = true;
        let _ = tree.search(seg.envelope(), |j| {
            // Skip the segment itself and pairs already checked from the
            // other side.
            if i >= j {
                return ControlFlow::Continue(());
            }
            let other = match seq.get_line(j) {
                Some(other) => other,
                None => return ControlFlow::Continue(()),
            };

            let (pt_a, pt_b) = match seg.intersect(other) {
                None => return ControlFlow::Continue(()),
                Some(inter) => inter,
            };
            if pt_a != pt_b {
                // Overlap of positive length.
                simple = false;
                return ControlFlow::Break(());
            }

            // Single point intersection from here onwards. Adjacent segments
            // meet at their shared endpoint by construction.
            if Some(j) == prev || Some(j) == next {
                return ControlFlow::Continue(());
            }

            // The first and last segments of a closed curve meet at the
            // closure point.
            if closed && i == first && j == last {
                return ControlFlow::Continue(());
            }

            simple = false;
            ControlFlow::Break(())
        });
        if !simple {
            return false;
        }
    }
    true
}

/// MultiLineString simplicity: every member is simple, and members meet
/// only at points that lie on the boundaries of both.
pub(crate) fn is_simple_multi_line_string(mls: &MultiLineString) -> bool {
    let members = mls.line_strings();
    if members.iter().any(|ls| !ls.is_simple()) {
        return false;
    }

    let boundaries: Vec<HashSet<(u64, u64)>> = members
        .iter()
        .map(|ls| {
            let mut set = HashSet::new();
            if !ls.is_empty() && !ls.is_closed() {
                let seq = ls.coordinates();
                set.insert(seq.get_xy(0).key());
                set.insert(seq.get_xy(seq.len() - 1).key());
            }
            set
        })
        .collect();
    let lines: Vec<Vec<Segment>> = members.iter().map(|ls| ls.coordinates().lines()).collect();

    for i in 0..members.len() {
        if lines[i].is_empty() {
            continue;
        }
        let tree = load_segments(&lines[i]);
        for j in i + 1..members.len() {
            let mut simple = true;
            for seg in &lines[j] {
                let flow = tree.search(seg.envelope(), |k| {
                    match lines[i][k].intersect(*seg) {
                        None => ControlFlow::Continue(()),
                        Some((pt_a, pt_b)) if pt_a != pt_b => {
                            simple = false;
                            ControlFlow::Break(())
                        }
                        Some((pt, _)) => {
                            if boundaries[i].contains(&pt.key()) && boundaries[j].contains(&pt.key())
                            {
                                ControlFlow::Continue(())
                            } else {
                                simple = false;
                                ControlFlow::Break(())
                            }
                        }
                    }
                });
                if flow == ControlFlow::Break(()) {
                    break;
                }
            }
            if !simple {
                return false;
            }
        }
    }
    true
}
