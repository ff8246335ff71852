use thiserror::Error;

use crate::{CoordinatesType, GeometryType};

/// A geometry invariant was violated during validated construction.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("coordinate is NaN or inf")]
    NonFiniteCoordinate,

    #[error("non-empty linestring contains only one distinct XY value")]
    OneDistinctXY,

    #[error("polygon ring must not be empty")]
    EmptyRing,

    #[error("polygon ring not closed: first and last points differ")]
    RingNotClosed,

    #[error("polygon ring is not simple")]
    RingNotSimple,

    #[error("polygon rings must not intersect at multiple points")]
    RingsIntersectAtMultiplePoints,

    #[error("hole must be inside outer ring")]
    HoleOutsideShell,

    #[error("polygon interiors must be connected")]
    InteriorNotConnected,

    #[error("the boundaries of the polygon elements of multipolygons must only intersect at points")]
    BoundariesCross,

    #[error("polygon interiors must not intersect")]
    InteriorsIntersect,
}

/// A byte stream or text document could not be decoded as a geometry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("invalid WKT: {0}")]
    Wkt(String),

    #[error("WKB is truncated")]
    WkbTruncated,

    #[error("unknown WKB geometry type code: {0}")]
    WkbUnknownType(u32),

    #[error("invalid WKB byte order flag: {0}")]
    WkbInvalidByteOrder(u8),

    #[error("WKB has trailing bytes")]
    WkbTrailingBytes,

    #[error("unexpected child geometry type in WKB: {found}")]
    WkbUnexpectedChild { found: GeometryType },

    #[error("invalid GeoJSON: {0}")]
    GeoJson(String),
}

/// A coordinate tuple or packed array had an impossible size.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DimensionError {
    #[error("coordinate tuple has {found} ordinates: must be 2, 3, or 4")]
    TupleLength { found: usize },

    #[error("packed array of {length} floats does not divide into {ctype} points")]
    SequenceLength { length: usize, ctype: CoordinatesType },

    #[error("expected {expected} coordinates but found {found}")]
    MixedCoordinatesTypes {
        expected: CoordinatesType,
        found: CoordinatesType,
    },
}

/// A typed decode saw a different top-level geometry type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected} but input is {found}")]
pub struct TypeMismatchError {
    pub expected: GeometryType,
    pub found: GeometryType,
}

/// Any error surfaced by this crate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatchError),
}
