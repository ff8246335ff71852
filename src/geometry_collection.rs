use std::fmt;

use crate::options::ConstructorOptions;
use crate::{CoordinatesType, Envelope, Geometry};

/// A heterogeneous, possibly nested, collection of geometries.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeometryCollection {
    geometries: Vec<Geometry>,
    ctype: CoordinatesType,
}

impl GeometryCollection {
    /// Creates a collection. Its coordinates type is the lowest common
    /// coordinates type of its children, and the children are upconverted
    /// to it.
    pub fn new(geometries: Vec<Geometry>, _opts: ConstructorOptions) -> GeometryCollection {
        GeometryCollection::from_geometries(geometries)
    }

    pub fn from_geometries(geometries: Vec<Geometry>) -> GeometryCollection {
        if geometries.is_empty() {
            return GeometryCollection::empty(CoordinatesType::XY);
        }
        let ctype = geometries
            .iter()
            .map(Geometry::coordinates_type)
            .fold(CoordinatesType::XYZM, CoordinatesType::meet);
        let geometries = geometries
            .iter()
            .map(|g| g.force_coordinates_type(ctype))
            .collect();
        GeometryCollection { geometries, ctype }
    }

    pub fn empty(ctype: CoordinatesType) -> GeometryCollection {
        GeometryCollection {
            geometries: Vec::new(),
            ctype,
        }
    }

    pub fn coordinates_type(&self) -> CoordinatesType {
        self.ctype
    }

    pub fn num_geometries(&self) -> usize {
        self.geometries.len()
    }

    pub fn geometries(&self) -> &[Geometry] {
        &self.geometries
    }

    /// The nth (zero indexed) child. Panics when out of bounds.
    pub fn geometry_n(&self, n: usize) -> &Geometry {
        &self.geometries[n]
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.iter().all(Geometry::is_empty)
    }

    pub fn envelope(&self) -> Envelope {
        self.geometries
            .iter()
            .fold(Envelope::new_empty(), |env, g| env.merge(g.envelope()))
    }

    /// Largest dimension among the children; 0 when there are none.
    pub fn dimension(&self) -> usize {
        self.geometries
            .iter()
            .map(Geometry::dimension)
            .max()
            .unwrap_or(0)
    }

    pub fn length(&self) -> f64 {
        self.geometries.iter().map(Geometry::length).sum()
    }

    pub fn area(&self) -> f64 {
        self.geometries.iter().map(Geometry::area).sum()
    }

    pub fn reverse(&self) -> GeometryCollection {
        GeometryCollection {
            geometries: self.geometries.iter().map(Geometry::reverse).collect(),
            ctype: self.ctype,
        }
    }

    pub fn force_coordinates_type(&self, ctype: CoordinatesType) -> GeometryCollection {
        GeometryCollection {
            geometries: self
                .geometries
                .iter()
                .map(|g| g.force_coordinates_type(ctype))
                .collect(),
            ctype,
        }
    }

    pub fn force_2d(&self) -> GeometryCollection {
        self.force_coordinates_type(CoordinatesType::XY)
    }
}

impl fmt::Display for GeometryCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Geometry::from(self.clone()).as_text())
    }
}
