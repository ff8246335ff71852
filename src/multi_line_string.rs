use std::collections::HashMap;
use std::fmt;

use crate::algorithms::is_simple_multi_line_string;
use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, LineString, MultiPoint, Point, XY};

/// An ordered collection of LineStrings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiLineString {
    line_strings: Vec<LineString>,
    ctype: CoordinatesType,
}

impl MultiLineString {
    /// Creates a MultiLineString. Members are upconverted to their lowest
    /// common coordinates type; there are no structural invariants beyond
    /// member validity.
    pub fn new(line_strings: Vec<LineString>, _opts: ConstructorOptions) -> MultiLineString {
        MultiLineString::from_line_strings(line_strings)
    }

    pub fn from_line_strings(line_strings: Vec<LineString>) -> MultiLineString {
        if line_strings.is_empty() {
            return MultiLineString::empty(CoordinatesType::XY);
        }
        let ctype = line_strings
            .iter()
            .map(LineString::coordinates_type)
            .fold(CoordinatesType::XYZM, CoordinatesType::meet);
        let line_strings = line_strings
            .iter()
            .map(|ls| ls.force_coordinates_type(ctype))
            .collect();
        MultiLineString { line_strings, ctype }
    }

    pub fn empty(ctype: CoordinatesType) -> MultiLineString {
        MultiLineString {
            line_strings: Vec::new(),
            ctype,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn num_line_strings(&self) -> usize {
        self.line_strings.len()
    }

    pub fn line_strings(&self) -> &[LineString] {
        &self.line_strings
    }

    /// The nth (zero indexed) LineString. Panics when out of bounds.
    pub fn line_string_n(&self, n: usize) -> &LineString {
        &self.line_strings[n]
    }

    pub fn is_empty(&self) -> bool {
        self.line_strings.iter().all(LineString::is_empty)
    }

    pub fn is_simple(&self) -> bool {
        is_simple_multi_line_string(self)
    }

    pub fn envelope(&self) -> Envelope {
        self.line_strings
            .iter()
            .fold(Envelope::new_empty(), |env, ls| env.merge(ls.envelope()))
    }

    pub fn length(&self) -> f64 {
        self.line_strings.iter().map(LineString::length).sum()
    }

    pub(crate) fn centroid_contribution(&self) -> (XY, f64) {
        let mut sum = XY::default();
        let mut total = 0.;
        for ls in &self.line_strings {
            let (s, w) = ls.centroid_contribution();
            sum = sum + s;
            total += w;
        }
        (sum, total)
    }

    pub fn centroid(&self) -> Point {
        let (sum, total) = self.centroid_contribution();
        if total == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / total)).into())
    }

    /// Mod-2 boundary: the endpoints of non-closed members that appear in an
    /// odd number of member boundaries.
    pub fn boundary(&self) -> MultiPoint {
        let mut counts: HashMap<(u64, u64), usize> = HashMap::new();
        let mut order: Vec<Point> = Vec::new();
        for ls in &self.line_strings {
            if ls.is_empty() || ls.is_closed() {
                continue;
            }
            for pt in [ls.start_point(), ls.end_point()] {
                let key = match pt.xy() {
                    Some(xy) => xy.key(),
                    None => continue,
                };
                let count = counts.entry(key).or_insert(0);
                if *count == 0 {
                    order.push(pt);
                }
                *count += 1;
            }
        }
        let boundary: Vec<Point> = order
            .into_iter()
            .filter(|pt| {
                let key = pt.xy().map(XY::key);
                key.map_or(false, |k| counts[&k] % 2 == 1)
            })
            .collect();
        if boundary.is_empty() {
            return MultiPoint::empty(self.ctype);
        }
        MultiPoint::from_points(boundary)
    }

    pub fn reverse(&self) -> MultiLineString {
        MultiLineString {
            line_strings: self.line_strings.iter().map(LineString::reverse).collect(),
            ctype: self.ctype,
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> MultiLineString {
        MultiLineString {
            line_strings: self
                .line_strings
                .iter()
                .map(|ls| ls.force_coordinates_type(ctype))
                .collect(),
            ctype,
        }
    }

    pub fn force_2d(&self) -> MultiLineString {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

impl fmt::Display for MultiLineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Geometry::from(self.clone()).as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ls(coords: Vec<(f64, f64)>) -> LineString {
        LineString::from_xys(
            coords.into_iter().map(XY::from),
            ConstructorOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_length() {
        let mls = MultiLineString::from_line_strings(vec![
            ls(vec![(0., 0.), (3., 0.)]),
            ls(vec![(0., 1.), (0., 2.)]),
        ]);
        assert_relative_eq!(mls.length(), 4.);
    }

    #[test]
    fn test_boundary_mod_2() {
        // Two line strings sharing an endpoint at (1, 0): that point touches
        // two boundaries, so it drops out of the mod-2 boundary.
        let mls = MultiLineString::from_line_strings(vec![
            ls(vec![(0., 0.), (1., 0.)]),
            ls(vec![(1., 0.), (2., 0.)]),
        ]);
        let boundary = mls.boundary();
        assert_eq!(boundary.num_points(), 2);
        assert_eq!(boundary.point_n(0).xy(), Some(XY::new(0., 0.)));
        assert_eq!(boundary.point_n(1).xy(), Some(XY::new(2., 0.)));
    }

    #[test]
    fn test_boundary_closed_members_excluded() {
        let mls = MultiLineString::from_line_strings(vec![ls(vec![
            (0., 0.),
            (1., 0.),
            (1., 1.),
            (0., 0.),
        ])]);
        assert!(mls.boundary().is_empty());
    }

    #[test]
    fn test_empty() {
        let empty = MultiLineString::empty(CoordinatesType::XY);
        assert!(empty.is_empty());
        assert!(empty.envelope().is_empty());
        let holds_empty =
            MultiLineString::from_line_strings(vec![LineString::empty(CoordinatesType::XY)]);
        assert!(holds_empty.is_empty());
        assert_eq!(holds_empty.num_line_strings(), 1);
    }
}
