use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use super::{decode_type_code, WkbGeometryType};
use crate::errors::{DecodeError, Error};
use crate::options::ConstructorOptions;
use crate::{
    Coordinates, CoordinatesType, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Sequence, XY,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum ByteOrder {
    Big,
    Little,
}

pub(super) fn parse(input: &[u8], opts: ConstructorOptions) -> Result<Geometry, Error> {
    let mut reader = WkbReader {
        cursor: Cursor::new(input),
        opts,
    };
    let geometry = reader.geometry()?;
    if reader.cursor.position() != input.len() as u64 {
        return Err(DecodeError::WkbTrailingBytes.into());
    }
    Ok(geometry)
}

struct WkbReader<'a> {
    cursor: Cursor<&'a [u8]>,
    opts: ConstructorOptions,
}

impl<'a> WkbReader<'a> {
    // One complete WKB record: byte order flag, type code, then the body.
    // Nested records recurse.
    fn geometry(&mut self) -> Result<Geometry, Error> {
        let order = self.byte_order()?;
        let code = self.read_u32(order)?;
        let (base, ctype) = decode_type_code(code)?;

        match base {
            WkbGeometryType::Point => Ok(self.point(order, ctype)?.into()),
            WkbGeometryType::LineString => {
                let seq = self.sequence(order, ctype)?;
                Ok(LineString::new(seq, self.opts)?.into())
            }
            WkbGeometryType::Polygon => Ok(self.polygon(order, ctype)?.into()),
            WkbGeometryType::MultiPoint => {
                let n = self.read_u32(order)?;
                let mut points = Vec::new();
                for _ in 0..n {
                    match self.geometry()? {
                        Geometry::Point(point) => points.push(point),
                        other => {
                            return Err(DecodeError::WkbUnexpectedChild {
                                found: other.geometry_type(),
                            }
                            .into())
                        }
                    }
                }
                Ok(MultiPoint::new(points, self.opts).into())
            }
            WkbGeometryType::MultiLineString => {
                let n = self.read_u32(order)?;
                let mut members = Vec::new();
                for _ in 0..n {
                    match self.geometry()? {
                        Geometry::LineString(ls) => members.push(ls),
                        other => {
                            return Err(DecodeError::WkbUnexpectedChild {
                                found: other.geometry_type(),
                            }
                            .into())
                        }
                    }
                }
                Ok(MultiLineString::new(members, self.opts).into())
            }
            WkbGeometryType::MultiPolygon => {
                let n = self.read_u32(order)?;
                let mut members = Vec::new();
                for _ in 0..n {
                    match self.geometry()? {
                        Geometry::Polygon(polygon) => members.push(polygon),
                        other => {
                            return Err(DecodeError::WkbUnexpectedChild {
                                found: other.geometry_type(),
                            }
                            .into())
                        }
                    }
                }
                Ok(MultiPolygon::new(members, self.opts)?.into())
            }
            WkbGeometryType::GeometryCollection => {
                let n = self.read_u32(order)?;
                let mut members = Vec::new();
                for _ in 0..n {
                    members.push(self.geometry()?);
                }
                Ok(GeometryCollection::new(members, self.opts).into())
            }
        }
    }

    fn point(&mut self, order: ByteOrder, ctype: CoordinatesType) -> Result<Point, Error> {
        let x = self.read_f64(order)?;
        let y = self.read_f64(order)?;
        let z = if ctype.is_3d() {
            Some(self.read_f64(order)?)
        } else {
            None
        };
        let m = if ctype.is_measured() {
            Some(self.read_f64(order)?)
        } else {
            None
        };
        // NaN ordinates encode the empty Point.
        if x.is_nan() && y.is_nan() {
            return Ok(Point::empty(ctype));
        }
        Ok(Point::new(
            Coordinates {
                xy: XY::new(x, y),
                z,
                m,
            },
            self.opts,
        )?)
    }

    fn polygon(&mut self, order: ByteOrder, ctype: CoordinatesType) -> Result<Polygon, Error> {
        let num_rings = self.read_u32(order)?;
        let mut rings = Vec::new();
        for _ in 0..num_rings {
            let seq = self.sequence(order, ctype)?;
            rings.push(LineString::new(seq, self.opts)?);
        }
        Ok(Polygon::from_rings(rings, self.opts)?)
    }

    fn sequence(&mut self, order: ByteOrder, ctype: CoordinatesType) -> Result<Sequence, Error> {
        let num_points = self.read_u32(order)? as usize;
        // Counts are attacker controlled: let the vector grow rather than
        // trusting them for a single huge allocation.
        let mut floats = Vec::new();
        for _ in 0..num_points * ctype.dimension() {
            floats.push(self.read_f64(order)?);
        }
        Ok(Sequence::new(floats, ctype)?)
    }

    fn byte_order(&mut self) -> Result<ByteOrder, DecodeError> {
        match self.read_u8()? {
            0 => Ok(ByteOrder::Big),
            1 => Ok(ByteOrder::Little),
            other => Err(DecodeError::WkbInvalidByteOrder(other)),
        }
    }

    fn read_u8(&mut self) -> Result<u8, DecodeError> {
        self.cursor.read_u8().map_err(|_| DecodeError::WkbTruncated)
    }

    fn read_u32(&mut self, order: ByteOrder) -> Result<u32, DecodeError> {
        match order {
            ByteOrder::Big => self.cursor.read_u32::<BigEndian>(),
            ByteOrder::Little => self.cursor.read_u32::<LittleEndian>(),
        }
        .map_err(|_| DecodeError::WkbTruncated)
    }

    fn read_f64(&mut self, order: ByteOrder) -> Result<f64, DecodeError> {
        match order {
            ByteOrder::Big => self.cursor.read_f64::<BigEndian>(),
            ByteOrder::Little => self.cursor.read_f64::<LittleEndian>(),
        }
        .map_err(|_| DecodeError::WkbTruncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryType;

    fn hex(bytes: &str) -> Vec<u8> {
        (0..bytes.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&bytes[i..i + 2], 16).unwrap())
            .collect()
    }

    #[test]
    fn test_little_endian_point() {
        // 01 (little) 01000000 (point) x=1.0 y=2.0
        let buf = hex("0101000000000000000000F03F0000000000000040");
        let g = Geometry::from_wkb(&buf).unwrap();
        assert_eq!(g, Geometry::Point(Point::from_xy(1., 2.).unwrap()));
    }

    #[test]
    fn test_big_endian_point() {
        let buf = hex("00000000013FF00000000000004000000000000000");
        let g = Geometry::from_wkb(&buf).unwrap();
        assert_eq!(g, Geometry::Point(Point::from_xy(1., 2.).unwrap()));
    }

    #[test]
    fn test_nan_point_is_empty() {
        let mut buf = vec![1u8];
        buf.extend_from_slice(&1u32.to_le_bytes());
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        buf.extend_from_slice(&f64::NAN.to_le_bytes());
        let g = Geometry::from_wkb(&buf).unwrap();
        assert_eq!(g, Geometry::Point(Point::empty(CoordinatesType::XY)));
    }

    #[test]
    fn test_invalid_byte_order() {
        let buf = hex("0201000000");
        assert_eq!(
            Geometry::from_wkb(&buf).unwrap_err(),
            Error::Decode(DecodeError::WkbInvalidByteOrder(2))
        );
    }

    #[test]
    fn test_truncated() {
        let buf = hex("010100000000");
        assert_eq!(
            Geometry::from_wkb(&buf).unwrap_err(),
            Error::Decode(DecodeError::WkbTruncated)
        );
    }

    #[test]
    fn test_unknown_type_code() {
        let buf = hex("0163000000");
        assert_eq!(
            Geometry::from_wkb(&buf).unwrap_err(),
            Error::Decode(DecodeError::WkbUnknownType(99))
        );
    }

    #[test]
    fn test_trailing_bytes() {
        let buf = hex("0101000000000000000000F03F000000000000004000");
        assert_eq!(
            Geometry::from_wkb(&buf).unwrap_err(),
            Error::Decode(DecodeError::WkbTrailingBytes)
        );
    }

    #[test]
    fn test_typed_scan() {
        let buf = hex("0101000000000000000000F03F0000000000000040");
        let g = crate::wkb::parse_as(&buf, GeometryType::Point, ConstructorOptions::default())
            .unwrap();
        assert_eq!(g.geometry_type(), GeometryType::Point);

        let err = crate::wkb::parse_as(
            &buf,
            GeometryType::LineString,
            ConstructorOptions::default(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            Error::TypeMismatch(crate::TypeMismatchError {
                expected: GeometryType::LineString,
                found: GeometryType::Point,
            })
        );
    }
}
