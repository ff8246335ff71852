//! OGC Simple Features geometry for the Euclidean plane: the seven
//! canonical geometry types with validated construction, spatial
//! predicates over a bulk-loaded R-tree, and WKT / WKB / GeoJSON codecs.

mod coordinate;
mod coordinates;
mod envelope;
mod errors;
mod geometry;
mod geometry_collection;
mod line_string;
mod multi_line_string;
mod multi_point;
mod multi_polygon;
mod options;
mod point;
mod polygon;
mod rtree;
mod segment;
mod sequence;

pub mod algorithms;
pub mod geojson;
pub mod wkb;
pub mod wkt;

pub use coordinate::XY;
pub use coordinates::{Coordinates, CoordinatesType};
pub use envelope::Envelope;
pub use errors::{DecodeError, DimensionError, Error, TypeMismatchError, ValidationError};
pub use geometry::{Geometry, GeometryType};
pub use geometry_collection::GeometryCollection;
pub use line_string::LineString;
pub use multi_line_string::MultiLineString;
pub use multi_point::MultiPoint;
pub use multi_polygon::MultiPolygon;
pub use options::ConstructorOptions;
pub use point::Point;
pub use polygon::Polygon;
pub use rtree::{BulkItem, RTree};
pub use segment::Segment;
pub use sequence::Sequence;
