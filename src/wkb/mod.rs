//! Well-Known Binary codec.
//!
//! The reader honours the per-record byte order flag and accepts geometry
//! type codes in both the offset form (base + 1000 for Z, + 2000 for M,
//! + 3000 for ZM) and the OGC flag form (`0x80000000` for Z, `0x40000000`
//! for M). The writer always emits little-endian records in the offset
//! form. The empty Point is encoded with all-NaN ordinates; NaN X and Y on
//! read mean the empty Point.

mod reader;
mod writer;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::errors::{DecodeError, Error, TypeMismatchError};
use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Geometry, GeometryType};

/// Base WKB geometry type codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u32)]
pub(crate) enum WkbGeometryType {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
    GeometryCollection = 7,
}

const FLAG_Z: u32 = 0x8000_0000;
const FLAG_M: u32 = 0x4000_0000;

pub(crate) fn decode_type_code(
    code: u32,
) -> Result<(WkbGeometryType, CoordinatesType), DecodeError> {
    let mut has_z = code & FLAG_Z != 0;
    let mut has_m = code & FLAG_M != 0;
    let numeric = code & !(FLAG_Z | FLAG_M);
    match numeric / 1000 {
        0 => {}
        1 => has_z = true,
        2 => has_m = true,
        3 => {
            has_z = true;
            has_m = true;
        }
        _ => return Err(DecodeError::WkbUnknownType(code)),
    }
    let base = WkbGeometryType::try_from(numeric % 1000)
        .map_err(|_| DecodeError::WkbUnknownType(code))?;
    Ok((base, CoordinatesType::from_flags(has_z, has_m)))
}

pub(crate) fn encode_type_code(base: WkbGeometryType, ctype: CoordinatesType) -> u32 {
    let offset = match ctype {
        CoordinatesType::XY => 0,
        CoordinatesType::XYZ => 1000,
        CoordinatesType::XYM => 2000,
        CoordinatesType::XYZM => 3000,
    };
    u32::from(base) + offset
}

/// Parses a WKB byte stream into a validated geometry.
pub fn parse(input: &[u8], opts: ConstructorOptions) -> Result<Geometry, Error> {
    reader::parse(input, opts)
}

/// Parses a WKB byte stream, requiring the given top-level geometry type.
/// This is the entry point for typed scan targets.
pub fn parse_as(
    input: &[u8],
    expected: GeometryType,
    opts: ConstructorOptions,
) -> Result<Geometry, Error> {
    let geometry = parse(input, opts)?;
    if geometry.geometry_type() != expected {
        return Err(TypeMismatchError {
            expected,
            found: geometry.geometry_type(),
        }
        .into());
    }
    Ok(geometry)
}

/// Writes a geometry as little-endian WKB.
pub fn write(geometry: &Geometry) -> Vec<u8> {
    let mut buf = Vec::new();
    writer::append_geometry(&mut buf, geometry);
    buf
}
