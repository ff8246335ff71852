use crate::errors::{DimensionError, ValidationError};
use crate::{Coordinates, CoordinatesType, Envelope, Segment, XY};

/// An immutable sequence of positions, stored as a packed float array tagged
/// with its coordinates type.
///
/// The float slice length must be a multiple of the coordinates type's
/// dimension; the point count is `floats.len() / dimension`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    floats: Vec<f64>,
    ctype: CoordinatesType,
}

impl Sequence {
    /// Wraps a packed float array. The length must divide evenly into
    /// points of the given type.
    pub fn new(floats: Vec<f64>, ctype: CoordinatesType) -> Result<Self, DimensionError> {
        if floats.len() % ctype.dimension() != 0 {
            return Err(DimensionError::SequenceLength {
                length: floats.len(),
                ctype,
            });
        }
        Ok(Sequence { floats, ctype })
    }

    pub fn new_empty(ctype: CoordinatesType) -> Self {
        Sequence {
            floats: Vec::new(),
            ctype,
        }
    }

    /// Builds an XY sequence from plain positions.
    pub fn from_xys<I: IntoIterator<Item = XY>>(xys: I) -> Self {
        let mut floats = Vec::new();
        for xy in xys {
            floats.push(xy.x);
            floats.push(xy.y);
        }
        Sequence {
            floats,
            ctype: CoordinatesType::XY,
        }
    }

    /// Builds a sequence from positions, all of which must match the given
    /// coordinates type.
    pub fn from_coordinates(
        coords: &[Coordinates],
        ctype: CoordinatesType,
    ) -> Result<Self, DimensionError> {
        let mut floats = Vec::with_capacity(coords.len() * ctype.dimension());
        for c in coords {
            if c.coordinates_type() != ctype {
                return Err(DimensionError::MixedCoordinatesTypes {
                    expected: ctype,
                    found: c.coordinates_type(),
                });
            }
            c.append_floats(&mut floats);
        }
        Ok(Sequence { floats, ctype })
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    /// Number of points in the sequence.
    pub fn len(&self) -> usize {
        self.floats.len() / self.ctype.dimension()
    }

    pub fn is_empty(&self) -> bool {
        self.floats.is_empty()
    }

    pub(crate) fn floats(&self) -> &[f64] {
        &self.floats
    }

    /// The XY location of the i'th point. Panics if out of bounds.
    pub fn get_xy(&self, i: usize) -> XY {
        let d = self.ctype.dimension();
        XY::new(self.floats[i * d], self.floats[i * d + 1])
    }

    /// The full position of the i'th point. Panics if out of bounds.
    pub fn get(&self, i: usize) -> Coordinates {
        let d = self.ctype.dimension();
        let base = i * d;
        let mut next = base + 2;
        let z = self.ctype.is_3d().then(|| {
            let z = self.floats[next];
            next += 1;
            z
        });
        let m = self.ctype.is_measured().then(|| self.floats[next]);
        Coordinates {
            xy: self.get_xy(i),
            z,
            m,
        }
    }

    /// Checks that every ordinate is finite.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.floats.iter().any(|f| !f.is_finite()) {
            return Err(ValidationError::NonFiniteCoordinate);
        }
        Ok(())
    }

    pub fn envelope(&self) -> Envelope {
        let mut env = Envelope::new_empty();
        for i in 0..self.len() {
            env = env.extend(self.get_xy(i));
        }
        env
    }

    /// A copy of the sequence with its points in the opposite order.
    pub fn reverse(&self) -> Sequence {
        let d = self.ctype.dimension();
        let mut floats = Vec::with_capacity(self.floats.len());
        for chunk in self.floats.chunks_exact(d).rev() {
            floats.extend_from_slice(chunk);
        }
        Sequence {
            floats,
            ctype: self.ctype,
        }
    }

    /// A copy of the sequence adapted to a new coordinates type. Added
    /// ordinates are zero filled; removed ordinates are dropped.
    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> Sequence {
        if ctype == self.ctype {
            return self.clone();
        }
        let mut floats = Vec::with_capacity(self.len() * ctype.dimension());
        for i in 0..self.len() {
            self.get(i).force_coordinates_type(ctype).append_floats(&mut floats);
        }
        Sequence { floats, ctype }
    }

    /// A copy of the sequence with each XY location mapped through `f`. Z and
    /// M ordinates are untouched.
    pub fn transform_xy<F: Fn(XY) -> XY>(&self, f: F) -> Sequence {
        let d = self.ctype.dimension();
        let mut floats = self.floats.clone();
        for chunk in floats.chunks_exact_mut(d) {
            let xy = f(XY::new(chunk[0], chunk[1]));
            chunk[0] = xy.x;
            chunk[1] = xy.y;
        }
        Sequence {
            floats,
            ctype: self.ctype,
        }
    }

    /// The segment from point i to point i+1, or `None` when i is the final
    /// point or the two endpoints share an XY location. Degenerate segments
    /// are invisible to simplicity and intersection analysis.
    pub fn get_line(&self, i: usize) -> Option<Segment> {
        if i + 1 >= self.len() {
            return None;
        }
        let start = self.get_xy(i);
        let end = self.get_xy(i + 1);
        if start == end {
            return None;
        }
        Some(Segment::new(start, end))
    }

    /// Index of the closest non-degenerate segment before i, if any.
    pub(crate) fn prev_line(&self, i: usize) -> Option<usize> {
        (0..i).rev().find(|&j| self.get_line(j).is_some())
    }

    /// Index of the closest non-degenerate segment after i, if any.
    pub(crate) fn next_line(&self, i: usize) -> Option<usize> {
        (i + 1..self.len()).find(|&j| self.get_line(j).is_some())
    }

    /// Indices of the first and last non-degenerate segments, or `None` when
    /// the sequence traces no curve at all.
    pub(crate) fn first_and_last_lines(&self) -> Option<(usize, usize)> {
        let first = (0..self.len()).find(|&i| self.get_line(i).is_some())?;
        let last = (0..self.len()).rev().find(|&i| self.get_line(i).is_some())?;
        Some((first, last))
    }

    /// All non-degenerate segments in order.
    pub(crate) fn lines(&self) -> Vec<Segment> {
        (0..self.len()).filter_map(|i| self.get_line(i)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_mismatch() {
        assert!(Sequence::new(vec![1., 2., 3.], CoordinatesType::XY).is_err());
        assert!(Sequence::new(vec![1., 2., 3.], CoordinatesType::XYZ).is_ok());
        assert!(Sequence::new(vec![1., 2., 3.], CoordinatesType::XYZM).is_err());
    }

    #[test]
    fn test_accessors() {
        let seq = Sequence::new(vec![1., 2., 3., 4., 5., 6., 7., 8.], CoordinatesType::XYZM).unwrap();
        assert_eq!(seq.len(), 2);
        assert_eq!(seq.get_xy(1), XY::new(5., 6.));
        assert_eq!(seq.get(0), Coordinates::new_xyzm(1., 2., 3., 4.));
        assert_eq!(seq.get(1), Coordinates::new_xyzm(5., 6., 7., 8.));
    }

    #[test]
    fn test_validate() {
        let seq = Sequence::new(vec![0., f64::NAN], CoordinatesType::XY).unwrap();
        assert_eq!(seq.validate(), Err(ValidationError::NonFiniteCoordinate));
        let seq = Sequence::new(vec![0., f64::INFINITY], CoordinatesType::XY).unwrap();
        assert_eq!(seq.validate(), Err(ValidationError::NonFiniteCoordinate));
        let seq = Sequence::from_xys(vec![XY::new(0., 0.), XY::new(1., 1.)]);
        assert_eq!(seq.validate(), Ok(()));
    }

    #[test]
    fn test_reverse_roundtrip() {
        let seq = Sequence::new(vec![1., 2., 3., 4., 5., 6.], CoordinatesType::XYZ).unwrap();
        let rev = seq.reverse();
        assert_eq!(rev.get(0), Coordinates::new_xyz(4., 5., 6.));
        assert_eq!(rev.reverse(), seq);
    }

    #[test]
    fn test_force_coordinates_type() {
        let seq = Sequence::new(vec![1., 2., 3., 4., 5., 6.], CoordinatesType::XYZ).unwrap();
        let forced = seq.force_coordinates_type(CoordinatesType::XYM);
        assert_eq!(forced.get(0), Coordinates::new_xym(1., 2., 0.));
        let back = forced.force_coordinates_type(CoordinatesType::XY);
        assert_eq!(back.floats(), &[1., 2., 4., 5.]);
    }

    #[test]
    fn test_degenerate_lines_suppressed() {
        let seq = Sequence::from_xys(vec![
            XY::new(0., 0.),
            XY::new(1., 1.),
            XY::new(1., 1.),
            XY::new(2., 0.),
        ]);
        assert!(seq.get_line(0).is_some());
        assert!(seq.get_line(1).is_none());
        assert!(seq.get_line(2).is_some());
        assert!(seq.get_line(3).is_none());
        assert_eq!(seq.prev_line(2), Some(0));
        assert_eq!(seq.next_line(0), Some(2));
        assert_eq!(seq.first_and_last_lines(), Some((0, 2)));
        assert_eq!(seq.lines().len(), 2);
    }

    #[test]
    fn test_transform_xy() {
        let seq = Sequence::new(vec![1., 2., 9., 3., 4., 9.], CoordinatesType::XYM).unwrap();
        let moved = seq.transform_xy(|xy| xy + XY::new(10., 20.));
        assert_eq!(moved.get(1), Coordinates::new_xym(13., 24., 9.));
    }
}
