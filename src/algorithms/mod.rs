//! Geometric algorithms behind the validators and predicates: the Jordan
//! point-in-ring test, simplicity checks, polygon and multi-polygon
//! validation, and the pairwise `intersects` dispatch.

mod intersects;
mod line_intersections;
mod multi_polygon_validation;
mod point_in_ring;
mod polygon_validation;
mod ring_graph;
mod simplicity;
mod sweep;

pub use intersects::intersects;
pub use point_in_ring::{point_ring_side, RingSide};

pub(crate) use line_intersections::{
    boundaries_overlap, intersection_extent, segments_intersect, LinesIntersection,
};
pub(crate) use multi_polygon_validation::validate_multi_polygon;
pub(crate) use polygon_validation::validate_polygon;
pub(crate) use simplicity::{is_simple_line_string, is_simple_multi_line_string};
