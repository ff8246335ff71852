use std::fmt;

use crate::XY;

/// Indicates which ordinate slots are present in a geometry's coordinates.
///
/// The low bit flags Z, the next bit flags M. The "lowest common" type of a
/// set of geometries (used when constructing containers from mixed inputs)
/// is the bitwise AND of their types.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CoordinatesType {
    #[default]
    XY = 0b00,
    XYZ = 0b01,
    XYM = 0b10,
    XYZM = 0b11,
}

impl CoordinatesType {
    pub fn is_3d(self) -> bool {
        self as u8 & 0b01 != 0
    }

    pub fn is_measured(self) -> bool {
        self as u8 & 0b10 != 0
    }

    /// Number of f64 slots per point: 2, 3 or 4.
    pub fn dimension(self) -> usize {
        2 + self.is_3d() as usize + self.is_measured() as usize
    }

    /// The greatest type whose ordinates are present in both inputs.
    pub fn meet(self, other: CoordinatesType) -> CoordinatesType {
        Self::from_flags(self.is_3d() && other.is_3d(), self.is_measured() && other.is_measured())
    }

    pub(crate) fn from_flags(has_z: bool, has_m: bool) -> CoordinatesType {
        match (has_z, has_m) {
            (false, false) => CoordinatesType::XY,
            (true, false) => CoordinatesType::XYZ,
            (false, true) => CoordinatesType::XYM,
            (true, true) => CoordinatesType::XYZM,
        }
    }

    /// The WKT modifier between the geometry tag and its body ("", "Z", "M"
    /// or "ZM").
    pub(crate) fn wkt_modifier(self) -> &'static str {
        match self {
            CoordinatesType::XY => "",
            CoordinatesType::XYZ => "Z",
            CoordinatesType::XYM => "M",
            CoordinatesType::XYZM => "ZM",
        }
    }
}

impl fmt::Display for CoordinatesType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoordinatesType::XY => "XY",
            CoordinatesType::XYZ => "XYZ",
            CoordinatesType::XYM => "XYM",
            CoordinatesType::XYZM => "XYZM",
        };
        f.write_str(s)
    }
}

/// A single position: an XY location plus whichever of the Z and M ordinates
/// its coordinates type carries.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Coordinates {
    pub xy: XY,
    pub z: Option<f64>,
    pub m: Option<f64>,
}

impl Coordinates {
    pub fn new_xy(x: f64, y: f64) -> Self {
        Coordinates {
            xy: XY::new(x, y),
            z: None,
            m: None,
        }
    }

    pub fn new_xyz(x: f64, y: f64, z: f64) -> Self {
        Coordinates {
            xy: XY::new(x, y),
            z: Some(z),
            m: None,
        }
    }

    pub fn new_xym(x: f64, y: f64, m: f64) -> Self {
        Coordinates {
            xy: XY::new(x, y),
            z: None,
            m: Some(m),
        }
    }

    pub fn new_xyzm(x: f64, y: f64, z: f64, m: f64) -> Self {
        Coordinates {
            xy: XY::new(x, y),
            z: Some(z),
            m: Some(m),
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        CoordinatesType::from_flags(self.z.is_some(), self.m.is_some())
    }

    /// Adapts the position to a new coordinates type. Added ordinates are
    /// zero filled, removed ordinates are dropped.
    pub fn force_coordinates_type(self, ctype: CoordinatesType) -> Coordinates {
        Coordinates {
            xy: self.xy,
            z: ctype.is_3d().then(|| self.z.unwrap_or(0.0)),
            m: ctype.is_measured().then(|| self.m.unwrap_or(0.0)),
        }
    }

    /// Appends the position's ordinates in storage order (X, Y, then Z and M
    /// when present).
    pub(crate) fn append_floats(&self, dst: &mut Vec<f64>) {
        dst.push(self.xy.x);
        dst.push(self.xy.y);
        if let Some(z) = self.z {
            dst.push(z);
        }
        if let Some(m) = self.m {
            dst.push(m);
        }
    }
}

impl From<XY> for Coordinates {
    fn from(xy: XY) -> Self {
        Coordinates { xy, z: None, m: None }
    }
}

impl From<(f64, f64)> for Coordinates {
    fn from(c: (f64, f64)) -> Self {
        Coordinates::new_xy(c.0, c.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension() {
        assert_eq!(CoordinatesType::XY.dimension(), 2);
        assert_eq!(CoordinatesType::XYZ.dimension(), 3);
        assert_eq!(CoordinatesType::XYM.dimension(), 3);
        assert_eq!(CoordinatesType::XYZM.dimension(), 4);
    }

    #[test]
    fn test_meet() {
        use CoordinatesType::*;
        assert_eq!(XYZM.meet(XYZM), XYZM);
        assert_eq!(XYZM.meet(XYZ), XYZ);
        assert_eq!(XYZ.meet(XYM), XY);
        assert_eq!(XYM.meet(XYZM), XYM);
        assert_eq!(XY.meet(XYZM), XY);
    }

    #[test]
    fn test_force_coordinates_type() {
        let c = Coordinates::new_xyz(1., 2., 3.);
        assert_eq!(c.coordinates_type(), CoordinatesType::XYZ);
        assert_eq!(
            c.force_coordinates_type(CoordinatesType::XYZM),
            Coordinates::new_xyzm(1., 2., 3., 0.),
        );
        assert_eq!(
            c.force_coordinates_type(CoordinatesType::XYM),
            Coordinates::new_xym(1., 2., 0.),
        );
        assert_eq!(
            c.force_coordinates_type(CoordinatesType::XY),
            Coordinates::new_xy(1., 2.),
        );
    }
}
