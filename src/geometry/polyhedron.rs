// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Polyhedra and tessellations.
//!
//! A [`Polyhedron`] is an ordered list of cube corners. Its length selects a
//! [`Shape`], and the shape's face table turns the ordered corners into
//! outward-facing [`Face`]s:
//!
//! | Shape       | Corners | Faces                        |
//! |-------------|---------|------------------------------|
//! | Tetrahedron | 4       | 4 triangles                  |
//! | Pyramid     | 5       | 1 quad, 4 triangles          |
//! | Wedge       | 6       | 2 triangles, 3 quads         |
//! | X solid     | 7       | 3 quads, 4 triangles         |
//! | Hexahedron  | 8       | 6 quads                      |
//!
//! The X solid is a hexahedron with one corner cut off.

use std::fmt;

use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::NCORNERS;
use crate::geometry::Face;

/// The cell shapes a tessellation may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumCountMacro, EnumIter, Display)]
#[repr(u8)]
pub enum Shape {
    Tetrahedron,
    Pyramid,
    Wedge,
    #[strum(to_string = "X solid")]
    XSolid,
    Hexahedron,
}

const TETRAHEDRON_FACES: &[&[usize]] = &[&[0, 1, 3], &[1, 2, 3], &[2, 0, 3], &[0, 2, 1]];

const PYRAMID_FACES: &[&[usize]] = &[&[0, 3, 2, 1], &[0, 1, 4], &[1, 2, 4], &[2, 3, 4], &[3, 0, 4]];

const WEDGE_FACES: &[&[usize]] = &[
    &[0, 1, 2],
    &[3, 5, 4],
    &[0, 3, 4, 1],
    &[1, 4, 5, 2],
    &[2, 5, 3, 0],
];

const X_SOLID_FACES: &[&[usize]] = &[
    &[0, 1, 5, 4],
    &[2, 6, 5, 1],
    &[3, 4, 5, 6],
    &[3, 6, 2],
    &[0, 4, 3],
    &[2, 1, 0],
    &[0, 3, 2],
];

const HEXAHEDRON_FACES: &[&[usize]] = &[
    &[0, 4, 7, 3],
    &[1, 2, 6, 5],
    &[0, 1, 5, 4],
    &[3, 7, 6, 2],
    &[0, 3, 2, 1],
    &[4, 5, 6, 7],
];

impl Shape {
    /// The shape with this many corners, if any.
    pub fn from_vertex_count(n: usize) -> Option<Shape> {
        match n {
            4 => Some(Shape::Tetrahedron),
            5 => Some(Shape::Pyramid),
            6 => Some(Shape::Wedge),
            7 => Some(Shape::XSolid),
            8 => Some(Shape::Hexahedron),
            _ => None,
        }
    }

    pub fn vertex_count(self) -> usize {
        self as usize + 4
    }

    /// Outward faces as cycles of slot indices into the corner list.
    pub fn face_slots(self) -> &'static [&'static [usize]] {
        match self {
            Shape::Tetrahedron => TETRAHEDRON_FACES,
            Shape::Pyramid => PYRAMID_FACES,
            Shape::Wedge => WEDGE_FACES,
            Shape::XSolid => X_SOLID_FACES,
            Shape::Hexahedron => HEXAHEDRON_FACES,
        }
    }
}

/// One cell of a tessellation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Polyhedron {
    shape: Shape,
    vertices: Vec<u8>,
}

impl Polyhedron {
    /// Build a polyhedron from its ordered corners.
    ///
    /// Fails unless there are 4 to 8 corners, each below 8.
    pub fn new(vertices: &[u8]) -> GeneratorResult<Self> {
        let shape = Shape::from_vertex_count(vertices.len())
            .filter(|_| vertices.iter().all(|&v| (v as usize) < NCORNERS))
            .ok_or_else(|| GeneratorError::BadShape {
                vertices: vertices.to_vec(),
            })?;
        Ok(Polyhedron {
            shape,
            vertices: vertices.to_vec(),
        })
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn vertices(&self) -> &[u8] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Apply a vertex relabeling, keeping the slot order.
    pub fn mapped(&self, map: impl Fn(u8) -> u8) -> Polyhedron {
        Polyhedron {
            shape: self.shape,
            vertices: self.vertices.iter().map(|&v| map(v)).collect(),
        }
    }

    /// Outward faces, as raw vertex cycles.
    pub fn face_cycles(&self) -> impl Iterator<Item = Vec<u8>> + '_ {
        self.shape
            .face_slots()
            .iter()
            .map(|slots| slots.iter().map(|&s| self.vertices[s]).collect())
    }

    /// Outward faces in canonical rotation.
    pub fn faces(&self) -> Vec<Face> {
        self.face_cycles().map(|cycle| Face::new(&cycle)).collect()
    }

    /// True when two slots name the same vertex.
    pub fn has_repeated_vertex(&self) -> bool {
        let mut seen = [false; NCORNERS];
        for &v in &self.vertices {
            if seen[v as usize] {
                return true;
            }
            seen[v as usize] = true;
        }
        false
    }

    /// Six times the signed volume, with corners placed at `positions`.
    ///
    /// Uses the divergence theorem over fan-triangulated faces, so it is
    /// exact in integers and positive when every face points outward.
    pub fn signed_volume6(&self, positions: &[[i64; 3]; NCORNERS]) -> i64 {
        self.face_cycles()
            .map(|cycle| {
                let p0 = positions[cycle[0] as usize];
                (1..cycle.len() - 1)
                    .map(|i| {
                        let p1 = positions[cycle[i] as usize];
                        let p2 = positions[cycle[i + 1] as usize];
                        dot(p0, cross(p1, p2))
                    })
                    .sum::<i64>()
            })
            .sum()
    }
}

impl fmt::Display for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.shape, self.vertices)
    }
}

fn cross(a: [i64; 3], b: [i64; 3]) -> [i64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn dot(a: [i64; 3], b: [i64; 3]) -> i64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// The cells filling one (case, subcase).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tessellation {
    polyhedra: Vec<Polyhedron>,
}

impl Tessellation {
    pub fn new(polyhedra: Vec<Polyhedron>) -> Self {
        Tessellation { polyhedra }
    }

    /// Build from raw corner lists, checking each shape.
    pub fn from_lists(lists: &[&[u8]]) -> GeneratorResult<Self> {
        lists
            .iter()
            .map(|vertices| Polyhedron::new(vertices))
            .collect::<GeneratorResult<Vec<_>>>()
            .map(Tessellation::new)
    }

    pub fn polyhedra(&self) -> &[Polyhedron] {
        &self.polyhedra
    }

    pub fn len(&self) -> usize {
        self.polyhedra.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polyhedra.is_empty()
    }

    /// Apply a vertex relabeling to every polyhedron.
    pub fn mapped(&self, map: impl Fn(u8) -> u8 + Copy) -> Tessellation {
        Tessellation {
            polyhedra: self.polyhedra.iter().map(|p| p.mapped(map)).collect(),
        }
    }
}

impl fmt::Display for Tessellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, polyhedron) in self.polyhedra.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{polyhedron}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::constants::CORNER_POSITIONS;
    use strum::{EnumCount, IntoEnumIterator};

    fn unit_positions() -> [[i64; 3]; NCORNERS] {
        CORNER_POSITIONS
    }

    #[test]
    fn test_shape_vertex_counts() {
        assert_eq!(Shape::COUNT, 5);
        for shape in Shape::iter() {
            assert_eq!(Shape::from_vertex_count(shape.vertex_count()), Some(shape));
            let max_slot = shape
                .face_slots()
                .iter()
                .flat_map(|f| f.iter())
                .max()
                .copied();
            assert_eq!(max_slot, Some(shape.vertex_count() - 1));
        }
        assert_eq!(Shape::from_vertex_count(3), None);
        assert_eq!(Shape::from_vertex_count(9), None);
    }

    #[test]
    fn test_each_shape_is_closed() {
        // Every edge of a closed surface is used once in each direction.
        for shape in Shape::iter() {
            let mut edges = Vec::new();
            for face in shape.face_slots() {
                for i in 0..face.len() {
                    edges.push((face[i], face[(i + 1) % face.len()]));
                }
            }
            for &(a, b) in &edges {
                assert_eq!(edges.iter().filter(|&&e| e == (a, b)).count(), 1, "{shape}");
                assert_eq!(edges.iter().filter(|&&e| e == (b, a)).count(), 1, "{shape}");
            }
        }
    }

    #[test]
    fn test_hexahedron_volume() {
        let cube = Polyhedron::new(&[0, 1, 2, 3, 4, 5, 6, 7]).unwrap();
        assert_eq!(cube.shape(), Shape::Hexahedron);
        assert_eq!(cube.signed_volume6(&unit_positions()), 6);
    }

    #[test]
    fn test_tetrahedron_volume_sign() {
        let positive = Polyhedron::new(&[0, 1, 2, 5]).unwrap();
        assert_eq!(positive.signed_volume6(&unit_positions()), 1);
        let inverted = Polyhedron::new(&[1, 0, 2, 5]).unwrap();
        assert_eq!(inverted.signed_volume6(&unit_positions()), -1);
    }

    #[test]
    fn test_pyramid_and_x_solid_volume() {
        let pyramid = Polyhedron::new(&[1, 5, 6, 2, 0]).unwrap();
        assert_eq!(pyramid.signed_volume6(&unit_positions()), 2);
        let x_solid = Polyhedron::new(&[3, 2, 6, 4, 0, 1, 5]).unwrap();
        assert_eq!(x_solid.signed_volume6(&unit_positions()), 5);
    }

    #[test]
    fn test_bad_shapes_rejected() {
        assert!(matches!(
            Polyhedron::new(&[0, 1, 2]),
            Err(GeneratorError::BadShape { .. })
        ));
        assert!(Polyhedron::new(&[0, 1, 2, 9]).is_err());
    }

    #[test]
    fn test_repeated_vertex() {
        let p = Polyhedron::new(&[0, 1, 2, 4]).unwrap();
        assert!(!p.has_repeated_vertex());
        assert!(p.mapped(|v| if v == 2 { 1 } else { v }).has_repeated_vertex());
    }

    #[test]
    fn test_faces_are_canonical() {
        let tet = Polyhedron::new(&[0, 1, 2, 5]).unwrap();
        let faces = tet.faces();
        assert_eq!(faces.len(), 4);
        assert!(faces.contains(&Face::new(&[0, 1, 5])));
        assert!(faces.contains(&Face::new(&[0, 2, 1])));
    }
}
