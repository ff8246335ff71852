use std::fmt;

use crate::algorithms::validate_multi_polygon;
use crate::errors::ValidationError;
use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, LineString, MultiLineString, Point, Polygon, XY};

/// A surface whose elements are Polygons.
///
/// Invariants (checked at construction unless skipped): the member
/// interiors are pairwise disjoint, and their boundaries touch only at
/// finitely many points. Empty member polygons are permitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MultiPolygon {
    polygons: Vec<Polygon>,
    ctype: CoordinatesType,
}

impl MultiPolygon {
    /// Creates a MultiPolygon from its member Polygons, upconverted to their
    /// lowest common coordinates type.
    pub fn new(
        polygons: Vec<Polygon>,
        opts: ConstructorOptions,
    ) -> Result<MultiPolygon, ValidationError> {
        if polygons.is_empty() {
            return Ok(MultiPolygon::empty(CoordinatesType::XY));
        }
        let ctype = polygons
            .iter()
            .map(Polygon::coordinates_type)
            .fold(CoordinatesType::XYZM, CoordinatesType::meet);
        let polygons: Vec<Polygon> = polygons
            .iter()
            .map(|p| p.force_coordinates_type(ctype))
            .collect();

        if !opts.skip_validations {
            if let Err(err) = validate_multi_polygon(&polygons) {
                if opts.omit_invalid {
                    return Ok(MultiPolygon::empty(ctype));
                }
                return Err(err);
            }
        }
        Ok(MultiPolygon { polygons, ctype })
    }

    pub fn empty(ctype: CoordinatesType) -> MultiPolygon {
        MultiPolygon {
            polygons: Vec::new(),
            ctype,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn num_polygons(&self) -> usize {
        self.polygons.len()
    }

    pub fn polygons(&self) -> &[Polygon] {
        &self.polygons
    }

    /// The nth (zero indexed) Polygon. Panics when out of bounds.
    pub fn polygon_n(&self, n: usize) -> &Polygon {
        &self.polygons[n]
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.iter().all(Polygon::is_empty)
    }

    pub fn envelope(&self) -> Envelope {
        self.polygons
            .iter()
            .fold(Envelope::new_empty(), |env, p| env.merge(p.envelope()))
    }

    pub fn area(&self) -> f64 {
        self.polygons.iter().map(Polygon::area).sum()
    }

    pub(crate) fn centroid_contribution(&self) -> (XY, f64) {
        let mut sum = XY::default();
        let mut area = 0.;
        for poly in &self.polygons {
            let (s, a) = poly.centroid_contribution();
            sum = sum + s;
            area += a;
        }
        (sum, area)
    }

    pub fn centroid(&self) -> Point {
        let (sum, area) = self.centroid_contribution();
        if area == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / area)).into())
    }

    /// Every ring of every member, as a MultiLineString.
    pub fn boundary(&self) -> MultiLineString {
        let rings: Vec<LineString> = self
            .polygons
            .iter()
            .flat_map(|p| p.rings().iter().cloned())
            .collect();
        if rings.is_empty() {
            return MultiLineString::empty(self.ctype);
        }
        MultiLineString::from_line_strings(rings)
    }

    pub fn reverse(&self) -> MultiPolygon {
        MultiPolygon {
            polygons: self.polygons.iter().map(Polygon::reverse).collect(),
            ctype: self.ctype,
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> MultiPolygon {
        MultiPolygon {
            polygons: self
                .polygons
                .iter()
                .map(|p| p.force_coordinates_type(ctype))
                .collect(),
            ctype,
        }
    }

    pub fn force_2d(&self) -> MultiPolygon {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

impl fmt::Display for MultiPolygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Geometry::from(self.clone()).as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(lo_x: f64, lo_y: f64, hi_x: f64, hi_y: f64) -> Polygon {
        let ring = LineString::from_xys(
            vec![
                XY::new(lo_x, lo_y),
                XY::new(hi_x, lo_y),
                XY::new(hi_x, hi_y),
                XY::new(lo_x, hi_y),
                XY::new(lo_x, lo_y),
            ],
            ConstructorOptions::default(),
        )
        .unwrap();
        Polygon::new(ring, Vec::new(), ConstructorOptions::default()).unwrap()
    }

    #[test]
    fn test_disjoint_ok() {
        let mp = MultiPolygon::new(
            vec![square(0., 0., 1., 1.), square(2., 0., 3., 1.)],
            ConstructorOptions::default(),
        )
        .unwrap();
        assert_eq!(mp.num_polygons(), 2);
        assert_relative_eq!(mp.area(), 2.);
    }

    #[test]
    fn test_overlapping_interiors_rejected() {
        let err = MultiPolygon::new(
            vec![square(0., 0., 2., 2.), square(1., 1., 3., 3.)],
            ConstructorOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::InteriorsIntersect);
    }

    #[test]
    fn test_corner_touch_ok() {
        let mp = MultiPolygon::new(
            vec![square(0., 0., 1., 1.), square(1., 1., 2., 2.)],
            ConstructorOptions::default(),
        )
        .unwrap();
        assert_eq!(mp.num_polygons(), 2);
    }

    #[test]
    fn test_shared_edge_rejected() {
        let err = MultiPolygon::new(
            vec![square(0., 0., 1., 1.), square(1., 0., 2., 1.)],
            ConstructorOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::BoundariesCross);
    }

    #[test]
    fn test_empty() {
        let mp = MultiPolygon::new(Vec::new(), ConstructorOptions::default()).unwrap();
        assert!(mp.is_empty());
        assert_eq!(mp.num_polygons(), 0);
        assert!(mp.envelope().is_empty());
        assert!(mp.boundary().is_empty());
    }

    #[test]
    fn test_skip_validations() {
        let mp = MultiPolygon::new(
            vec![square(0., 0., 2., 2.), square(1., 1., 3., 3.)],
            ConstructorOptions::skip_validations(),
        )
        .unwrap();
        assert_eq!(mp.num_polygons(), 2);
    }
}
