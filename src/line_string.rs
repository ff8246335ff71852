use std::fmt;

use crate::algorithms::is_simple_line_string;
use crate::errors::ValidationError;
use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, MultiPoint, Point, Sequence, XY};

/// A curve defined by linear interpolation between a finite set of points.
///
/// A LineString is either empty, or holds at least 2 points with at least
/// two distinct XY values. Points may repeat; adjacent duplicates are legal
/// but trace no segment.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LineString {
    seq: Sequence,
}

impl LineString {
    /// Creates a LineString from a coordinate sequence. The sequence must be
    /// empty or contain at least two distinct XY values, all finite.
    pub fn new(seq: Sequence, opts: ConstructorOptions) -> Result<LineString, ValidationError> {
        if opts.skip_validations || seq.is_empty() {
            return Ok(LineString { seq });
        }
        if let Err(err) = validate_sequence(&seq) {
            if opts.omit_invalid {
                return Ok(LineString::empty(seq.coordinates_type()));
            }
            return Err(err);
        }
        Ok(LineString { seq })
    }

    /// The empty LineString of the given coordinates type.
    pub fn empty(ctype: CoordinatesType) -> LineString {
        LineString {
            seq: Sequence::new_empty(ctype),
        }
    }

    /// Creates an XY LineString from plain positions.
    pub fn from_xys<I: IntoIterator<Item = XY>>(
        xys: I,
        opts: ConstructorOptions,
    ) -> Result<LineString, ValidationError> {
        LineString::new(Sequence::from_xys(xys), opts)
    }

    pub fn coordinates(&self) -> &Sequence {
        &self.seq
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.seq.coordinates_type()
    }

    pub fn num_points(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// The first point, or the empty Point when the LineString is empty.
    pub fn start_point(&self) -> Point {
        if self.is_empty() {
            return Point::empty(self.coordinates_type());
        }
        Point::from_coordinates_unchecked(self.seq.get(0))
    }

    /// The last point, or the empty Point when the LineString is empty.
    pub fn end_point(&self) -> Point {
        if self.is_empty() {
            return Point::empty(self.coordinates_type());
        }
        Point::from_coordinates_unchecked(self.seq.get(self.seq.len() - 1))
    }

    /// True iff non-empty with coincident start and end XY values.
    pub fn is_closed(&self) -> bool {
        !self.is_empty() && self.seq.get_xy(0) == self.seq.get_xy(self.seq.len() - 1)
    }

    /// True iff the curve does not pass through the same point twice, other
    /// than coincident endpoints.
    pub fn is_simple(&self) -> bool {
        is_simple_line_string(&self.seq)
    }

    /// True iff this LineString is a linear ring: closed and simple.
    pub fn is_ring(&self) -> bool {
        self.is_closed() && self.is_simple()
    }

    pub fn envelope(&self) -> Envelope {
        self.seq.envelope()
    }

    /// Sum of the segment lengths.
    pub fn length(&self) -> f64 {
        self.seq.lines().iter().map(|ln| ln.length()).sum()
    }

    /// Length-weighted centroid of the curve, or the empty Point when there
    /// is no curve to average over.
    pub fn centroid(&self) -> Point {
        let (sum, total) = self.centroid_contribution();
        if total == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / total)).into())
    }

    pub(crate) fn centroid_contribution(&self) -> (XY, f64) {
        let mut sum = XY::default();
        let mut total = 0.;
        for ln in self.seq.lines() {
            let length = ln.length();
            sum = sum + ln.midpoint() * length;
            total += length;
        }
        (sum, total)
    }

    /// The two endpoints, or the empty MultiPoint for closed and empty
    /// LineStrings.
    pub fn boundary(&self) -> MultiPoint {
        if self.is_empty() || self.is_closed() {
            return MultiPoint::empty(self.coordinates_type());
        }
        MultiPoint::from_points(vec![self.start_point(), self.end_point()])
    }

    /// The same curve traced in the opposite direction.
    pub fn reverse(&self) -> LineString {
        LineString {
            seq: self.seq.reverse(),
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> LineString {
        LineString {
            seq: self.seq.force_coordinates_type(ctype),
        }
    }

    pub fn force_2d(&self) -> LineString {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

fn validate_sequence(seq: &Sequence) -> Result<(), ValidationError> {
    if !has_at_least_2_distinct_points(seq) {
        return Err(ValidationError::OneDistinctXY);
    }
    seq.validate()
}

fn has_at_least_2_distinct_points(seq: &Sequence) -> bool {
    if seq.is_empty() {
        return false;
    }
    let first = seq.get_xy(0);
    (1..seq.len()).any(|i| seq.get_xy(i) != first)
}

impl fmt::Display for LineString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Geometry::from(self.clone()).as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ls(coords: Vec<(f64, f64)>) -> LineString {
        LineString::from_xys(
            coords.into_iter().map(XY::from),
            ConstructorOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty() {
        let empty = LineString::empty(CoordinatesType::XYM);
        assert!(empty.is_empty());
        assert!(!empty.is_closed());
        assert!(empty.envelope().is_empty());
        assert!(empty.start_point().is_empty());
        assert_eq!(empty.boundary(), MultiPoint::empty(CoordinatesType::XYM));
    }

    #[test]
    fn test_one_distinct_xy_rejected() {
        let seq = Sequence::from_xys(vec![XY::new(0., 0.), XY::new(0., 0.)]);
        let err = LineString::new(seq.clone(), ConstructorOptions::default()).unwrap_err();
        assert_eq!(err, ValidationError::OneDistinctXY);

        let omitted = LineString::new(seq.clone(), ConstructorOptions::omit_invalid()).unwrap();
        assert!(omitted.is_empty());

        let skipped = LineString::new(seq, ConstructorOptions::skip_validations()).unwrap();
        assert_eq!(skipped.num_points(), 2);
    }

    #[test]
    fn test_single_point_rejected() {
        let seq = Sequence::from_xys(vec![XY::new(1., 1.)]);
        assert!(LineString::new(seq, ConstructorOptions::default()).is_err());
    }

    #[test]
    fn test_adjacent_duplicates_legal() {
        let line = ls(vec![(0., 0.), (1., 1.), (1., 1.), (2., 0.)]);
        assert_eq!(line.num_points(), 4);
        assert!(line.is_simple());
    }

    #[test]
    fn test_closed_and_ring() {
        let open = ls(vec![(0., 0.), (1., 1.), (2., 0.)]);
        assert!(!open.is_closed());
        assert!(!open.is_ring());
        assert_eq!(open.boundary().num_points(), 2);

        let ring = ls(vec![(0., 0.), (1., 0.), (1., 1.), (0., 1.), (0., 0.)]);
        assert!(ring.is_closed());
        assert!(ring.is_ring());
        assert!(ring.boundary().is_empty());
    }

    #[test]
    fn test_length_and_centroid() {
        use approx::assert_relative_eq;
        let line = ls(vec![(0., 0.), (4., 0.)]);
        assert_relative_eq!(line.length(), 4.);
        let centroid = line.centroid();
        assert_eq!(centroid.xy(), Some(XY::new(2., 0.)));

        let bent = ls(vec![(0., 0.), (2., 0.), (2., 2.)]);
        assert_relative_eq!(bent.length(), 4.);
        assert_eq!(bent.centroid().xy(), Some(XY::new(1.5, 0.5)));
    }

    #[test]
    fn test_reverse_involution() {
        let line = ls(vec![(0., 0.), (1., 1.), (2., 0.)]);
        assert_eq!(line.reverse().reverse(), line);
        assert_eq!(line.reverse().start_point(), line.end_point());
    }
}
