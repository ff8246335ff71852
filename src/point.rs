use std::fmt;

use crate::errors::ValidationError;
use crate::options::ConstructorOptions;
use crate::{Coordinates, CoordinatesType, Envelope, XY};

/// A single location on the plane, or the empty Point.
///
/// An empty Point holds no position but still carries a coordinates type.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Point {
    coords: Option<Coordinates>,
    ctype: CoordinatesType,
}

impl Point {
    /// Creates a Point from a position. Every ordinate must be finite.
    pub fn new(coords: Coordinates, opts: ConstructorOptions) -> Result<Point, ValidationError> {
        let ctype = coords.coordinates_type();
        if !opts.skip_validations {
            let finite = coords.xy.is_finite()
                && coords.z.map_or(true, f64::is_finite)
                && coords.m.map_or(true, f64::is_finite);
            if !finite {
                if opts.omit_invalid {
                    return Ok(Point::empty(ctype));
                }
                return Err(ValidationError::NonFiniteCoordinate);
            }
        }
        Ok(Point {
            coords: Some(coords),
            ctype,
        })
    }

    /// The empty Point of the given coordinates type.
    pub fn empty(ctype: CoordinatesType) -> Point {
        Point {
            coords: None,
            ctype,
        }
    }

    /// Creates an XY Point from raw ordinates.
    pub fn from_xy(x: f64, y: f64) -> Result<Point, ValidationError> {
        Point::new(Coordinates::new_xy(x, y), ConstructorOptions::default())
    }

    /// Builds a Point without validation, for internal call sites that
    /// already hold a known-finite position.
    pub(crate) fn from_coordinates_unchecked(coords: Coordinates) -> Point {
        Point {
            ctype: coords.coordinates_type(),
            coords: Some(coords),
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_none()
    }

    /// The Point's XY location, or `None` when empty.
    pub fn xy(&self) -> Option<XY> {
        self.coords.map(|c| c.xy)
    }

    /// The Point's full position, or `None` when empty.
    pub fn coordinates(&self) -> Option<Coordinates> {
        self.coords
    }

    pub fn envelope(&self) -> Envelope {
        match self.coords {
            Some(c) => Envelope::of_point(c.xy),
            None => Envelope::new_empty(),
        }
    }

    /// The boundary of a Point is empty.
    pub fn boundary(&self) -> Point {
        Point::empty(self.ctype)
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> Point {
        Point {
            coords: self.coords.map(|c| c.force_coordinates_type(ctype)),
            ctype,
        }
    }

    pub fn force_2d(&self) -> Point {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::Geometry::from(self.clone()).as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_point() {
        let pt = Point::empty(CoordinatesType::XYZ);
        assert!(pt.is_empty());
        assert_eq!(pt.coordinates_type(), CoordinatesType::XYZ);
        assert_eq!(pt.xy(), None);
        assert!(pt.envelope().is_empty());
    }

    #[test]
    fn test_nan_rejected() {
        let err = Point::from_xy(f64::NAN, 2.).unwrap_err();
        assert_eq!(err, ValidationError::NonFiniteCoordinate);

        let bad_z = Coordinates::new_xyz(1., 2., f64::INFINITY);
        assert!(Point::new(bad_z, ConstructorOptions::default()).is_err());

        let pt = Point::new(
            Coordinates::new_xy(f64::NAN, 2.),
            ConstructorOptions::omit_invalid(),
        )
        .unwrap();
        assert!(pt.is_empty());
        assert_eq!(pt.coordinates_type(), CoordinatesType::XY);
    }

    #[test]
    fn test_force_coordinates_type() {
        let pt = Point::new(Coordinates::new_xyz(1., 2., 3.), ConstructorOptions::default()).unwrap();
        let forced = pt.force_coordinates_type(CoordinatesType::XYZM);
        assert_eq!(forced.coordinates(), Some(Coordinates::new_xyzm(1., 2., 3., 0.)));
        assert_eq!(pt.force_2d().coordinates(), Some(Coordinates::new_xy(1., 2.)));
    }
}
