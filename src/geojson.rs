//! GeoJSON codec (RFC 7946).
//!
//! Geometries are JSON objects with `type` and `coordinates` (or
//! `geometries` for collections). Positions are arrays of 2 to 4 finite
//! numbers; a third ordinate reads as Z and a fourth as M. On write, X, Y
//! and Z are emitted; M has no GeoJSON representation and is dropped.
//! Empty geometries use empty arrays, including `"coordinates":[]` for the
//! empty Point.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Number, Value};

use crate::errors::{DecodeError, DimensionError, Error, ValidationError};
use crate::options::ConstructorOptions;
use crate::{
    Coordinates, CoordinatesType, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Sequence, XY,
};

/// Parses a GeoJSON document into a validated geometry.
pub fn parse(input: &str, opts: ConstructorOptions) -> Result<Geometry, Error> {
    let value: Value =
        serde_json::from_str(input).map_err(|e| DecodeError::GeoJson(e.to_string()))?;
    geometry_from_value(&value, opts)
}

/// Writes a geometry as a GeoJSON document.
pub fn write(geometry: &Geometry) -> Result<String, Error> {
    let value = geometry_to_value(geometry)?;
    serde_json::to_string(&value).map_err(|e| Error::Decode(DecodeError::GeoJson(e.to_string())))
}

impl Serialize for Geometry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let value = geometry_to_value(self).map_err(S::Error::custom)?;
        value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Geometry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Geometry, D::Error> {
        let value = Value::deserialize(deserializer)?;
        geometry_from_value(&value, ConstructorOptions::default()).map_err(D::Error::custom)
    }
}

fn geometry_from_value(value: &Value, opts: ConstructorOptions) -> Result<Geometry, Error> {
    let object = value
        .as_object()
        .ok_or_else(|| DecodeError::GeoJson("document is not an object".to_string()))?;
    let gtype = match object.get("type") {
        Some(Value::String(gtype)) if !gtype.is_empty() => gtype.as_str(),
        Some(Value::String(_)) | None => {
            return Err(DecodeError::GeoJson("type field missing or empty".to_string()).into())
        }
        Some(_) => return Err(DecodeError::GeoJson("type field is not a string".to_string()).into()),
    };

    if gtype == "GeometryCollection" {
        let members = object
            .get("geometries")
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::GeoJson("geometries field missing".to_string()))?;
        let geometries = members
            .iter()
            .map(|child| geometry_from_value(child, opts))
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(GeometryCollection::new(geometries, opts).into());
    }

    let coords = object
        .get("coordinates")
        .and_then(Value::as_array)
        .ok_or_else(|| DecodeError::GeoJson("coordinates field missing".to_string()))?;

    match gtype {
        "Point" => Ok(point_from_coords(coords, opts)?.into()),
        "LineString" => {
            let seq = sequence_from_coords(coords)?;
            Ok(LineString::new(seq, opts)?.into())
        }
        "MultiPoint" => {
            let points = coords
                .iter()
                .map(|member| point_from_coords(nested_array(member)?, opts))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiPoint::new(points, opts).into())
        }
        "Polygon" => Ok(polygon_from_coords(coords, opts)?.into()),
        "MultiLineString" => {
            let members = coords
                .iter()
                .map(|member| {
                    let seq = sequence_from_coords(nested_array(member)?)?;
                    LineString::new(seq, opts).map_err(Error::from)
                })
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiLineString::new(members, opts).into())
        }
        "MultiPolygon" => {
            let members = coords
                .iter()
                .map(|member| polygon_from_coords(nested_array(member)?, opts))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(MultiPolygon::new(members, opts)?.into())
        }
        other => Err(DecodeError::GeoJson(format!("unknown geojson type: {}", other)).into()),
    }
}

fn nested_array(value: &Value) -> Result<&Vec<Value>, Error> {
    value
        .as_array()
        .ok_or_else(|| DecodeError::GeoJson("coordinates nesting is malformed".to_string()).into())
}

// An empty coordinates array is the empty Point (the same extension the
// WKB codec makes with NaN ordinates).
fn point_from_coords(coords: &[Value], opts: ConstructorOptions) -> Result<Point, Error> {
    if coords.is_empty() {
        return Ok(Point::empty(CoordinatesType::XY));
    }
    Ok(Point::new(position(coords)?, opts)?)
}

fn polygon_from_coords(coords: &[Value], opts: ConstructorOptions) -> Result<Polygon, Error> {
    let rings = coords
        .iter()
        .map(|ring| {
            let seq = sequence_from_coords(nested_array(ring)?)?;
            LineString::new(seq, opts).map_err(Error::from)
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::from_rings(rings, opts)?)
}

fn sequence_from_coords(coords: &[Value]) -> Result<Sequence, Error> {
    let positions = coords
        .iter()
        .map(|member| position(nested_array(member)?))
        .collect::<Result<Vec<_>, Error>>()?;
    if positions.is_empty() {
        return Ok(Sequence::new_empty(CoordinatesType::XY));
    }
    let ctype = positions
        .iter()
        .fold(CoordinatesType::XYZM, |acc, c| acc.meet(c.coordinates_type()));
    let mut floats = Vec::with_capacity(positions.len() * ctype.dimension());
    for coords in positions {
        coords.force_coordinates_type(ctype).append_floats(&mut floats);
    }
    Ok(Sequence::new(floats, ctype)?)
}

fn position(values: &[Value]) -> Result<Coordinates, Error> {
    if values.len() < 2 || values.len() > 4 {
        return Err(DimensionError::TupleLength {
            found: values.len(),
        }
        .into());
    }
    let mut ordinates = [0.0f64; 4];
    for (i, value) in values.iter().enumerate() {
        let number = value
            .as_f64()
            .ok_or_else(|| DecodeError::GeoJson("coordinate is not a number".to_string()))?;
        if !number.is_finite() {
            return Err(DecodeError::GeoJson("coordinate is NaN or inf".to_string()).into());
        }
        ordinates[i] = number;
    }
    Ok(Coordinates {
        xy: XY::new(ordinates[0], ordinates[1]),
        z: (values.len() >= 3).then(|| ordinates[2]),
        m: (values.len() == 4).then(|| ordinates[3]),
    })
}

fn geometry_to_value(geometry: &Geometry) -> Result<Value, Error> {
    let (type_name, coordinates) = match geometry {
        Geometry::Point(g) => ("Point", point_value(g)?),
        Geometry::LineString(g) => ("LineString", sequence_value(g.coordinates())?),
        Geometry::Polygon(g) => ("Polygon", polygon_value(g)?),
        Geometry::MultiPoint(g) => (
            "MultiPoint",
            Value::Array(
                g.points()
                    .iter()
                    .map(point_value)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        ),
        Geometry::MultiLineString(g) => (
            "MultiLineString",
            Value::Array(
                g.line_strings()
                    .iter()
                    .map(|ls| sequence_value(ls.coordinates()))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        ),
        Geometry::MultiPolygon(g) => (
            "MultiPolygon",
            Value::Array(
                g.polygons()
                    .iter()
                    .map(polygon_value)
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        ),
        Geometry::GeometryCollection(g) => {
            let members = g
                .geometries()
                .iter()
                .map(geometry_to_value)
                .collect::<Result<Vec<_>, _>>()?;
            let mut object = Map::new();
            object.insert("type".to_string(), Value::from("GeometryCollection"));
            object.insert("geometries".to_string(), Value::Array(members));
            return Ok(Value::Object(object));
        }
    };
    let mut object = Map::new();
    object.insert("type".to_string(), Value::from(type_name));
    object.insert("coordinates".to_string(), coordinates);
    Ok(Value::Object(object))
}

fn number(value: f64) -> Result<Value, Error> {
    Number::from_f64(value)
        .map(Value::Number)
        .ok_or_else(|| ValidationError::NonFiniteCoordinate.into())
}

fn point_value(point: &Point) -> Result<Value, Error> {
    match point.coordinates() {
        None => Ok(Value::Array(Vec::new())),
        Some(coords) => position_value(&coords),
    }
}

fn position_value(coords: &Coordinates) -> Result<Value, Error> {
    let mut values = vec![number(coords.xy.x)?, number(coords.xy.y)?];
    if let Some(z) = coords.z {
        values.push(number(z)?);
    }
    Ok(Value::Array(values))
}

fn sequence_value(seq: &Sequence) -> Result<Value, Error> {
    let mut positions = Vec::with_capacity(seq.len());
    for i in 0..seq.len() {
        positions.push(position_value(&seq.get(i))?);
    }
    Ok(Value::Array(positions))
}

fn polygon_value(polygon: &Polygon) -> Result<Value, Error> {
    let rings = polygon
        .rings()
        .iter()
        .map(|ring| sequence_value(ring.coordinates()))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Value::Array(rings))
}
