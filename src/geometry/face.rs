// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Oriented polygon faces.
//!
//! A [`Face`] is a cyclic list of 3 or 4 corner indices. The cyclic order
//! gives its orientation: counter-clockwise when seen from the side the face
//! points to. Faces are stored in canonical rotation (smallest index first),
//! so two faces are equal exactly when they have the same vertices in the same
//! cyclic order.
//!
//! Faces exist only to be compared. The validator counts them: an interior
//! face of a tessellation appears once in each orientation.

use std::fmt;

/// Marker for the unused fourth slot of a triangle.
const UNUSED: u8 = u8::MAX;

/// An oriented triangle or quadrilateral in canonical rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Face {
    vertices: [u8; 4],
    len: u8,
}

impl Face {
    /// Build a face from a vertex cycle, rotating it to canonical form.
    ///
    /// # Panics
    ///
    /// Panics if the cycle does not have 3 or 4 vertices. Callers build faces
    /// from fixed shape tables, so a wrong length is a programming error.
    pub fn new(cycle: &[u8]) -> Self {
        assert!(
            cycle.len() == 3 || cycle.len() == 4,
            "a face has 3 or 4 vertices, got {cycle:?}"
        );
        let start = cycle
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| v)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let mut vertices = [UNUSED; 4];
        for (k, slot) in vertices.iter_mut().take(cycle.len()).enumerate() {
            *slot = cycle[(start + k) % cycle.len()];
        }
        Face {
            vertices,
            len: cycle.len() as u8,
        }
    }

    /// Reduce a cycle after some of its vertices have been identified.
    ///
    /// Consecutive repeats (including around the wrap) are removed. Returns
    /// `None` when fewer than three distinct vertices remain.
    pub fn collapsed(cycle: &[u8]) -> Option<Self> {
        let mut reduced: Vec<u8> = Vec::with_capacity(cycle.len());
        for &v in cycle {
            if reduced.last() != Some(&v) {
                reduced.push(v);
            }
        }
        while reduced.len() > 1 && reduced.first() == reduced.last() {
            reduced.pop();
        }
        let mut distinct = reduced.clone();
        distinct.sort_unstable();
        distinct.dedup();
        if distinct.len() < 3 || reduced.len() > 4 {
            return None;
        }
        Some(Face::new(&reduced))
    }

    /// The same face seen from the other side.
    pub fn reversed(&self) -> Face {
        let mut cycle: Vec<u8> = self.vertices().to_vec();
        cycle.reverse();
        Face::new(&cycle)
    }

    pub fn vertices(&self) -> &[u8] {
        &self.vertices[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_triangle(&self) -> bool {
        self.len == 3
    }

    /// Apply a vertex relabeling, keeping the cyclic order.
    pub fn mapped(&self, map: impl Fn(u8) -> u8) -> Face {
        let cycle: Vec<u8> = self.vertices().iter().map(|&v| map(v)).collect();
        Face::new(&cycle)
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.vertices().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
