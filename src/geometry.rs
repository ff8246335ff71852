use std::fmt;

use crate::errors::Error;
use crate::options::ConstructorOptions;
use crate::{
    CoordinatesType, Envelope, GeometryCollection, LineString, MultiLineString, MultiPoint,
    MultiPolygon, Point, Polygon, XY,
};

/// The tag of a geometry variant.
///
/// The declaration order doubles as the dispatch rank used by the
/// `intersects` pair table (collections sort last and are handled by
/// recursion).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GeometryType {
    Point,
    LineString,
    Polygon,
    MultiPoint,
    MultiLineString,
    MultiPolygon,
    GeometryCollection,
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            GeometryType::Point => "POINT",
            GeometryType::LineString => "LINESTRING",
            GeometryType::Polygon => "POLYGON",
            GeometryType::MultiPoint => "MULTIPOINT",
            GeometryType::MultiLineString => "MULTILINESTRING",
            GeometryType::MultiPolygon => "MULTIPOLYGON",
            GeometryType::GeometryCollection => "GEOMETRYCOLLECTION",
        };
        f.write_str(tag)
    }
}

/// Any of the seven geometry variants.
///
/// Geometries are immutable once constructed; every derived geometry is a
/// newly allocated value, and equality is value based.
#[derive(Clone, Debug, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    pub fn geometry_type(&self) -> GeometryType {
        match self {
            Geometry::Point(_) => GeometryType::Point,
            Geometry::LineString(_) => GeometryType::LineString,
            Geometry::Polygon(_) => GeometryType::Polygon,
            Geometry::MultiPoint(_) => GeometryType::MultiPoint,
            Geometry::MultiLineString(_) => GeometryType::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryType::MultiPolygon,
            Geometry::GeometryCollection(_) => GeometryType::GeometryCollection,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        match self {
            Geometry::Point(g) => g.coordinates_type(),
            Geometry::LineString(g) => g.coordinates_type(),
            Geometry::Polygon(g) => g.coordinates_type(),
            Geometry::MultiPoint(g) => g.coordinates_type(),
            Geometry::MultiLineString(g) => g.coordinates_type(),
            Geometry::MultiPolygon(g) => g.coordinates_type(),
            Geometry::GeometryCollection(g) => g.coordinates_type(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
            Geometry::GeometryCollection(g) => g.is_empty(),
        }
    }

    pub fn envelope(&self) -> Envelope {
        match self {
            Geometry::Point(g) => g.envelope(),
            Geometry::LineString(g) => g.envelope(),
            Geometry::Polygon(g) => g.envelope(),
            Geometry::MultiPoint(g) => g.envelope(),
            Geometry::MultiLineString(g) => g.envelope(),
            Geometry::MultiPolygon(g) => g.envelope(),
            Geometry::GeometryCollection(g) => g.envelope(),
        }
    }

    /// Topological dimension: 0 for point sets, 1 for curves, 2 for
    /// surfaces. A collection reports its largest member dimension.
    pub fn dimension(&self) -> usize {
        match self {
            Geometry::Point(_) | Geometry::MultiPoint(_) => 0,
            Geometry::LineString(_) | Geometry::MultiLineString(_) => 1,
            Geometry::Polygon(_) | Geometry::MultiPolygon(_) => 2,
            Geometry::GeometryCollection(g) => g.dimension(),
        }
    }

    /// Whether the geometry contains no anomalous points such as self
    /// intersections. `None` for GeometryCollection, where simplicity is
    /// not defined.
    pub fn is_simple(&self) -> Option<bool> {
        match self {
            Geometry::Point(_) => Some(true),
            Geometry::LineString(g) => Some(g.is_simple()),
            Geometry::Polygon(_) => Some(true),
            Geometry::MultiPoint(g) => Some(g.is_simple()),
            Geometry::MultiLineString(g) => Some(g.is_simple()),
            Geometry::MultiPolygon(_) => Some(true),
            Geometry::GeometryCollection(_) => None,
        }
    }

    /// True iff the two geometries share at least one point.
    pub fn intersects(&self, other: &Geometry) -> bool {
        crate::algorithms::intersects(self, other)
    }

    pub fn length(&self) -> f64 {
        match self {
            Geometry::LineString(g) => g.length(),
            Geometry::MultiLineString(g) => g.length(),
            Geometry::GeometryCollection(g) => g.length(),
            _ => 0.,
        }
    }

    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(g) => g.area(),
            Geometry::MultiPolygon(g) => g.area(),
            Geometry::GeometryCollection(g) => g.area(),
            _ => 0.,
        }
    }

    /// The centroid, weighted by area for surfaces, by length for curves and
    /// by count for point sets. A collection is averaged over its highest
    /// dimension members only. Empty input gives the empty Point.
    pub fn centroid(&self) -> Point {
        let (sum, weight, _) = self.centroid_parts();
        if weight == 0. {
            return Point::empty(CoordinatesType::XY);
        }
        Point::from_coordinates_unchecked((sum * (1. / weight)).into())
    }

    // (weighted position sum, total weight, dimension of the contribution)
    fn centroid_parts(&self) -> (XY, f64, usize) {
        match self {
            Geometry::Point(g) => match g.xy() {
                Some(xy) => (xy, 1., 0),
                None => (XY::default(), 0., 0),
            },
            Geometry::MultiPoint(g) => {
                let (sum, count) = g.centroid_contribution();
                (sum, count, 0)
            }
            Geometry::LineString(g) => {
                let (sum, len) = g.centroid_contribution();
                (sum, len, 1)
            }
            Geometry::MultiLineString(g) => {
                let (sum, len) = g.centroid_contribution();
                (sum, len, 1)
            }
            Geometry::Polygon(g) => {
                let (sum, area) = g.centroid_contribution();
                (sum, area, 2)
            }
            Geometry::MultiPolygon(g) => {
                let (sum, area) = g.centroid_contribution();
                (sum, area, 2)
            }
            Geometry::GeometryCollection(g) => {
                let mut best_dim = 0;
                let mut sum = XY::default();
                let mut weight = 0.;
                for child in g.geometries() {
                    let (s, w, d) = child.centroid_parts();
                    if w == 0. {
                        continue;
                    }
                    if d > best_dim || weight == 0. {
                        best_dim = d;
                        sum = s;
                        weight = w;
                    } else if d == best_dim {
                        sum = sum + s;
                        weight += w;
                    }
                }
                (sum, weight, best_dim)
            }
        }
    }

    /// The combinatorial boundary. Empty operands produce an empty geometry
    /// of the most specific applicable type.
    pub fn boundary(&self) -> Geometry {
        match self {
            Geometry::Point(g) => g.boundary().into(),
            Geometry::MultiPoint(g) => g.boundary().into(),
            Geometry::LineString(g) => g.boundary().into(),
            Geometry::MultiLineString(g) => g.boundary().into(),
            Geometry::Polygon(g) => g.boundary(),
            Geometry::MultiPolygon(g) => g.boundary().into(),
            Geometry::GeometryCollection(g) => {
                GeometryCollection::empty(g.coordinates_type()).into()
            }
        }
    }

    /// The same geometry with every coordinate sequence reversed. Member
    /// order within containers is preserved.
    pub fn reverse(&self) -> Geometry {
        match self {
            Geometry::Point(g) => g.clone().into(),
            Geometry::LineString(g) => g.reverse().into(),
            Geometry::Polygon(g) => g.reverse().into(),
            Geometry::MultiPoint(g) => g.reverse().into(),
            Geometry::MultiLineString(g) => g.reverse().into(),
            Geometry::MultiPolygon(g) => g.reverse().into(),
            Geometry::GeometryCollection(g) => g.reverse().into(),
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> Geometry {
        match self {
            Geometry::Point(g) => g.force_coordinates_type(ctype).into(),
            Geometry::LineString(g) => g.force_coordinates_type(ctype).into(),
            Geometry::Polygon(g) => g.force_coordinates_type(ctype).into(),
            Geometry::MultiPoint(g) => g.force_coordinates_type(ctype).into(),
            Geometry::MultiLineString(g) => g.force_coordinates_type(ctype).into(),
            Geometry::MultiPolygon(g) => g.force_coordinates_type(ctype).into(),
            Geometry::GeometryCollection(g) => g.force_coordinates_type(ctype).into(),
        }
    }

    /// A copy with Z and M values removed.
    pub fn force_2d(&self) -> Geometry {
        self.force_coordinates_type(CoordinatesType::XY)
    }

    /// The WKT representation.
    pub fn as_text(&self) -> String {
        crate::wkt::write(self)
    }

    /// Parses a WKT document.
    pub fn from_wkt(input: &str) -> Result<Geometry, Error> {
        crate::wkt::parse(input, ConstructorOptions::default())
    }

    pub fn from_wkt_with(input: &str, opts: ConstructorOptions) -> Result<Geometry, Error> {
        crate::wkt::parse(input, opts)
    }

    /// The WKB representation (little-endian).
    pub fn as_binary(&self) -> Vec<u8> {
        crate::wkb::write(self)
    }

    /// Parses a WKB byte stream.
    pub fn from_wkb(input: &[u8]) -> Result<Geometry, Error> {
        crate::wkb::parse(input, ConstructorOptions::default())
    }

    pub fn from_wkb_with(input: &[u8], opts: ConstructorOptions) -> Result<Geometry, Error> {
        crate::wkb::parse(input, opts)
    }

    /// The GeoJSON representation.
    pub fn to_geojson(&self) -> Result<String, Error> {
        crate::geojson::write(self)
    }

    /// Parses a GeoJSON document.
    pub fn from_geojson(input: &str) -> Result<Geometry, Error> {
        crate::geojson::parse(input, ConstructorOptions::default())
    }

    pub fn from_geojson_with(input: &str, opts: ConstructorOptions) -> Result<Geometry, Error> {
        crate::geojson::parse(input, opts)
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_text())
    }
}

impl From<Point> for Geometry {
    fn from(g: Point) -> Geometry {
        Geometry::Point(g)
    }
}

impl From<LineString> for Geometry {
    fn from(g: LineString) -> Geometry {
        Geometry::LineString(g)
    }
}

impl From<Polygon> for Geometry {
    fn from(g: Polygon) -> Geometry {
        Geometry::Polygon(g)
    }
}

impl From<MultiPoint> for Geometry {
    fn from(g: MultiPoint) -> Geometry {
        Geometry::MultiPoint(g)
    }
}

impl From<MultiLineString> for Geometry {
    fn from(g: MultiLineString) -> Geometry {
        Geometry::MultiLineString(g)
    }
}

impl From<MultiPolygon> for Geometry {
    fn from(g: MultiPolygon) -> Geometry {
        Geometry::MultiPolygon(g)
    }
}

impl From<GeometryCollection> for Geometry {
    fn from(g: GeometryCollection) -> Geometry {
        Geometry::GeometryCollection(g)
    }
}
