use std::fmt;

use crate::algorithms::validate_polygon;
use crate::errors::ValidationError;
use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, Geometry, LineString, MultiLineString, Point, Sequence, XY};

/// A planar surface bounded by an outer ring and zero or more hole rings.
///
/// Invariants (checked at construction unless skipped): every ring is a
/// non-empty closed simple LineString; any two rings intersect in at most
/// one distinct point; every hole lies inside the closed region of the outer
/// ring; and the interior is connected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    // rings[0] is the outer ring; the rest are holes. Empty when the whole
    // polygon is empty. All rings share `ctype`.
    rings: Vec<LineString>,
    ctype: CoordinatesType,
}

impl Polygon {
    /// Creates a Polygon from its outer ring and holes. The rings are
    /// upconverted to their lowest common coordinates type.
    pub fn new(
        exterior: LineString,
        interiors: Vec<LineString>,
        opts: ConstructorOptions,
    ) -> Result<Polygon, ValidationError> {
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(exterior);
        rings.extend(interiors);
        Polygon::from_rings(rings, opts)
    }

    /// Creates a Polygon from its full ring list (outer first). An empty
    /// list produces the empty XY Polygon.
    pub fn from_rings(
        rings: Vec<LineString>,
        opts: ConstructorOptions,
    ) -> Result<Polygon, ValidationError> {
        if rings.is_empty() {
            return Ok(Polygon::empty(CoordinatesType::XY));
        }
        let ctype = rings
            .iter()
            .map(LineString::coordinates_type)
            .fold(CoordinatesType::XYZM, CoordinatesType::meet);
        let rings: Vec<LineString> = rings
            .iter()
            .map(|r| r.force_coordinates_type(ctype))
            .collect();

        if !opts.skip_validations {
            if let Err(err) = validate_polygon(&rings) {
                if opts.omit_invalid {
                    return Ok(Polygon::empty(ctype));
                }
                return Err(err);
            }
        }
        Ok(Polygon { rings, ctype })
    }

    /// The empty Polygon of the given coordinates type.
    pub fn empty(ctype: CoordinatesType) -> Polygon {
        Polygon {
            rings: Vec::new(),
            ctype,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// All rings, outer ring first.
    pub fn rings(&self) -> &[LineString] {
        &self.rings
    }

    /// The outer ring, or `None` when the Polygon is empty.
    pub fn exterior_ring(&self) -> Option<&LineString> {
        self.rings.first()
    }

    pub fn num_interior_rings(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    /// The nth (zero indexed) hole. Panics when out of bounds.
    pub fn interior_ring_n(&self, n: usize) -> &LineString {
        &self.rings[1 + n]
    }

    pub fn envelope(&self) -> Envelope {
        match self.exterior_ring() {
            Some(outer) => outer.envelope(),
            None => Envelope::new_empty(),
        }
    }

    /// Surface area: the outer ring's area minus the holes'.
    pub fn area(&self) -> f64 {
        let mut rings = self.rings.iter();
        let outer = match rings.next() {
            Some(outer) => ring_area(outer.coordinates()),
            None => return 0.,
        };
        outer - rings.map(|h| ring_area(h.coordinates())).sum::<f64>()
    }

    /// Area-weighted centroid, or the empty Point for the empty Polygon.
    pub fn centroid(&self) -> Point {
        let (sum, area) = self.centroid_contribution();
        if area == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / area)).into())
    }

    pub(crate) fn centroid_contribution(&self) -> (XY, f64) {
        let mut sum = XY::default();
        let mut area = 0.;
        for (i, ring) in self.rings.iter().enumerate() {
            let ring_area = ring_area(ring.coordinates());
            let centroid = ring_centroid(ring.coordinates());
            if i == 0 {
                sum = sum + centroid * ring_area;
                area += ring_area;
            } else {
                sum = sum - centroid * ring_area;
                area -= ring_area;
            }
        }
        (sum, area)
    }

    /// The rings as linear geometry: the outer ring alone when there are no
    /// holes, otherwise all rings as a MultiLineString.
    pub fn boundary(&self) -> Geometry {
        if self.rings.len() == 1 {
            return self.rings[0].clone().into();
        }
        self.boundary_multi_line_string().into()
    }

    pub(crate) fn boundary_multi_line_string(&self) -> MultiLineString {
        MultiLineString::from_line_strings(self.rings.clone())
    }

    /// The same surface with every ring traced in the opposite direction.
    pub fn reverse(&self) -> Polygon {
        Polygon {
            rings: self.rings.iter().map(LineString::reverse).collect(),
            ctype: self.ctype,
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> Polygon {
        Polygon {
            rings: self
                .rings
                .iter()
                .map(|r| r.force_coordinates_type(ctype))
                .collect(),
            ctype,
        }
    }

    pub fn force_2d(&self) -> Polygon {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

/// Unsigned shoelace area of a closed ring.
fn ring_area(seq: &Sequence) -> f64 {
    signed_ring_area(seq).abs()
}

fn signed_ring_area(seq: &Sequence) -> f64 {
    let n = seq.len();
    if n < 3 {
        return 0.;
    }
    let mut sum = 0.;
    for i in 0..n - 1 {
        sum += seq.get_xy(i).cross(seq.get_xy(i + 1));
    }
    sum / 2.
}

fn ring_centroid(seq: &Sequence) -> XY {
    let signed = signed_ring_area(seq);
    if signed == 0. {
        return XY::default();
    }
    let mut sum = XY::default();
    for i in 0..seq.len() - 1 {
        let a = seq.get_xy(i);
        let b = seq.get_xy(i + 1);
        sum = sum + (a + b) * a.cross(b);
    }
    sum * (1. / (6. * signed))
}

impl fmt::Display for Polygon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Geometry::from(self.clone()).as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn ring(coords: Vec<(f64, f64)>) -> LineString {
        LineString::from_xys(
            coords.into_iter().map(XY::from),
            ConstructorOptions::default(),
        )
        .unwrap()
    }

    fn square(lo: f64, hi: f64) -> LineString {
        ring(vec![(lo, lo), (hi, lo), (hi, hi), (lo, hi), (lo, lo)])
    }

    #[test]
    fn test_simple_polygon() {
        let poly = Polygon::new(square(0., 2.), Vec::new(), ConstructorOptions::default()).unwrap();
        assert!(!poly.is_empty());
        assert_eq!(poly.num_interior_rings(), 0);
        assert_relative_eq!(poly.area(), 4.);
        assert_eq!(poly.centroid().xy(), Some(XY::new(1., 1.)));
    }

    #[test]
    fn test_polygon_with_hole() {
        let poly = Polygon::new(
            square(0., 4.),
            vec![square(1., 2.)],
            ConstructorOptions::default(),
        )
        .unwrap();
        assert_eq!(poly.num_interior_rings(), 1);
        assert_relative_eq!(poly.area(), 15.);
    }

    #[test]
    fn test_hole_outside_rejected() {
        let err = Polygon::new(
            square(0., 1.),
            vec![square(5., 6.)],
            ConstructorOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, ValidationError::HoleOutsideShell);

        let omitted = Polygon::new(
            square(0., 1.),
            vec![square(5., 6.)],
            ConstructorOptions::omit_invalid(),
        )
        .unwrap();
        assert!(omitted.is_empty());
    }

    #[test]
    fn test_unclosed_ring_rejected() {
        let open = ring(vec![(0., 0.), (2., 0.), (2., 2.)]);
        let err = Polygon::new(open, Vec::new(), ConstructorOptions::default()).unwrap_err();
        assert_eq!(err, ValidationError::RingNotClosed);
    }

    #[test]
    fn test_centroid_with_hole() {
        // Hole off to one side pushes the centroid the other way.
        let poly = Polygon::new(
            square(0., 4.),
            vec![square(2.5, 3.5)],
            ConstructorOptions::default(),
        )
        .unwrap();
        let centroid = poly.centroid().xy().unwrap();
        assert!(centroid.x < 2.);
        assert!(centroid.y < 2.);
        assert_relative_eq!(poly.area(), 15.);
    }

    #[test]
    fn test_reverse_preserves_area() {
        let poly = Polygon::new(
            square(0., 4.),
            vec![square(1., 2.)],
            ConstructorOptions::default(),
        )
        .unwrap();
        let reversed = poly.reverse();
        assert_relative_eq!(reversed.area(), poly.area());
        assert_eq!(reversed.reverse(), poly);
    }
}
