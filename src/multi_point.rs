use std::collections::HashSet;
use std::fmt;

use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, Point, XY};

/// An ordered collection of Points; any subset of them may be empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPoint {
    points: Vec<Point>,
    ctype: CoordinatesType,
}

impl MultiPoint {
    /// Creates a MultiPoint. Members are upconverted to their lowest common
    /// coordinates type. There are no structural invariants beyond member
    /// validity, so no `ConstructorOptions` are needed.
    pub fn new(points: Vec<Point>, _opts: ConstructorOptions) -> MultiPoint {
        MultiPoint::from_points(points)
    }

    pub fn from_points(points: Vec<Point>) -> MultiPoint {
        if points.is_empty() {
            return MultiPoint::empty(CoordinatesType::XY);
        }
        let ctype = points
            .iter()
            .map(Point::coordinates_type)
            .fold(CoordinatesType::XYZM, CoordinatesType::meet);
        let points = points
            .iter()
            .map(|p| p.force_coordinates_type(ctype))
            .collect();
        MultiPoint { points, ctype }
    }

    pub fn empty(ctype: CoordinatesType) -> MultiPoint {
        MultiPoint {
            points: Vec::new(),
            ctype,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The nth (zero indexed) Point. Panics when out of bounds.
    pub fn point_n(&self, n: usize) -> &Point {
        &self.points[n]
    }

    /// True iff every member is empty (or there are none).
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(Point::is_empty)
    }

    /// True iff no XY location appears twice among the non-empty members.
    pub fn is_simple(&self) -> bool {
        let mut seen = HashSet::new();
        for pt in &self.points {
            if let Some(xy) = pt.xy() {
                if !seen.insert(xy.key()) {
                    return false;
                }
            }
        }
        true
    }

    pub fn envelope(&self) -> Envelope {
        self.points
            .iter()
            .fold(Envelope::new_empty(), |env, p| env.merge(p.envelope()))
    }

    /// The boundary of a point set is empty.
    pub fn boundary(&self) -> MultiPoint {
        MultiPoint::empty(self.ctype)
    }

    /// Arithmetic mean of the non-empty members.
    pub(crate) fn centroid_contribution(&self) -> (XY, f64) {
        let mut sum = XY::default();
        let mut count = 0.;
        for pt in &self.points {
            if let Some(xy) = pt.xy() {
                sum = sum + xy;
                count += 1.;
            }
        }
        (sum, count)
    }

    pub fn centroid(&self) -> Point {
        let (sum, count) = self.centroid_contribution();
        if count == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / count)).into())
    }

    pub fn reverse(&self) -> MultiPoint {
        self.clone()
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> MultiPoint {
        MultiPoint {
            points: self
                .points
                .iter()
                .map(|p| p.force_coordinates_type(ctype))
                .collect(),
            ctype,
        }
    }

    pub fn force_2d(&self) -> MultiPoint {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

impl fmt::Display for MultiPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Geometry::from(self.clone()).as_text())
    }
}
