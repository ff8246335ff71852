//! Well-Known Text codec.
//!
//! The parser accepts the OGC grammar with `Z` / `M` / `ZM` modifiers and
//! `EMPTY` in any geometry position, case-insensitively. The writer emits
//! the canonical form: no space before `(` for XY geometries, modifier
//! variants as `TAG Z (…)`, no space after commas, one space between
//! ordinates, `TAG EMPTY` for empty geometries, and shortest-round-trip
//! floats.

mod lexer;
mod parser;
mod writer;

use crate::errors::Error;
use crate::options::ConstructorOptions;
use crate::Geometry;

/// Parses a WKT document into a validated geometry.
pub fn parse(input: &str, opts: ConstructorOptions) -> Result<Geometry, Error> {
    parser::parse(input, opts)
}

/// Writes a geometry as canonical WKT.
pub fn write(geometry: &Geometry) -> String {
    let mut out = String::new();
    writer::append_geometry(&mut out, geometry);
    out
}
