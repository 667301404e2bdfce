// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The rotation group of the cube.
//!
//! The 24 rotations are generated from two quarter turns:
//!
//! - `Y`: (x, y, z) → (z, y, 1−x)
//! - `Z`: (x, y, z) → (1−y, x, z)
//!
//! Each group member is the product of a fixed word over {Y, Z}, evaluated
//! left to right from the identity. Every rotation carries both its corner
//! permutation and the axis relabeling it induces, since subcases are
//! indexed by axis.

use log::debug;

use crate::error::{GeneratorError, GeneratorResult};
use crate::geometry::constants::{NAXES, NCORNERS, NROTATIONS};

/// Where each cube corner goes under one rotation.
pub type VertexPermutation = [u8; NCORNERS];

/// How the axes are relabeled by the same rotation.
pub type AxisPermutation = [u8; NAXES];

/// Quarter turn about the Y axis.
pub const ROTATE_Y: Rotation = Rotation {
    vertices: [4, 0, 3, 7, 5, 1, 2, 6],
    axes: [2, 1, 0],
};

/// Quarter turn about the Z axis.
pub const ROTATE_Z: Rotation = Rotation {
    vertices: [1, 2, 3, 0, 5, 6, 7, 4],
    axes: [1, 0, 2],
};

/// The words generating the group, in group order.
///
/// Breadth-first by length, each word extended by `Y` before `Z`.
pub const ROTATION_WORDS: [&str; NROTATIONS] = [
    "", "Y", "Z", "YY", "YZ", "ZY", "ZZ", "YYY", "YYZ", "YZY", "YZZ", "ZYY", "ZZY", "ZZZ",
    "YYYZ", "YYZY", "YYZZ", "YZYY", "YZZZ", "ZYYY", "ZZZY", "YYYZY", "YZYYY", "YZZZY",
];

/// Compose two permutations: `apply(a, b)[i] = b[a[i]]`.
pub fn apply<const N: usize>(a: &[u8; N], b: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for (slot, &ai) in result.iter_mut().zip(a.iter()) {
        *slot = b[ai as usize];
    }
    result
}

/// The inverse permutation.
pub fn inverse<const N: usize>(p: &[u8; N]) -> [u8; N] {
    let mut result = [0u8; N];
    for (i, &pi) in p.iter().enumerate() {
        result[pi as usize] = i as u8;
    }
    result
}

fn identity<const N: usize>() -> [u8; N] {
    let mut result = [0u8; N];
    for (i, slot) in result.iter_mut().enumerate() {
        *slot = i as u8;
    }
    result
}

/// A rotation of the cube, as paired corner and axis permutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rotation {
    pub vertices: VertexPermutation,
    pub axes: AxisPermutation,
}

impl Rotation {
    pub fn identity() -> Self {
        Rotation {
            vertices: identity(),
            axes: identity(),
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Rotation::identity()
    }

    /// `self` followed by `other`, in the sense of [`apply`].
    pub fn then(&self, other: &Rotation) -> Rotation {
        Rotation {
            vertices: apply(&self.vertices, &other.vertices),
            axes: apply(&self.axes, &other.axes),
        }
    }

    /// Evaluate a word over {Y, Z}.
    pub fn from_word(word: &str) -> GeneratorResult<Rotation> {
        word.chars().try_fold(Rotation::identity(), |current, letter| {
            let generator = match letter {
                'Y' => ROTATE_Y,
                'Z' => ROTATE_Z,
                other => return Err(GeneratorError::UnknownGenerator(other)),
            };
            Ok(current.then(&generator))
        })
    }

    /// Inverse corner permutation, used to carry a base tessellation into
    /// the numbering of a derived case.
    pub fn inverse_vertices(&self) -> VertexPermutation {
        inverse(&self.vertices)
    }
}

/// The 24 rotations of the cube, identity first.
#[derive(Debug, Clone)]
pub struct SymmetryGroup {
    rotations: Vec<Rotation>,
}

impl SymmetryGroup {
    /// Build the group from [`ROTATION_WORDS`].
    pub fn generate() -> GeneratorResult<Self> {
        let group = Self::from_words(&ROTATION_WORDS)?;
        group.check_closure()?;
        debug!("symmetry group: {} rotations, closed", group.len());
        Ok(group)
    }

    /// Build a group from an explicit word list.
    ///
    /// Fails unless the words evaluate to exactly 24 distinct rotations,
    /// the first being the identity.
    pub fn from_words(words: &[&str]) -> GeneratorResult<Self> {
        let mut rotations: Vec<Rotation> = Vec::with_capacity(words.len());
        for word in words {
            let rotation = Rotation::from_word(word)?;
            if !rotations.contains(&rotation) {
                rotations.push(rotation);
            }
        }
        if rotations.len() != NROTATIONS || words.len() != NROTATIONS {
            return Err(GeneratorError::SymmetryGroup {
                distinct: rotations.len(),
                expected: NROTATIONS,
            });
        }
        if !rotations[0].is_identity() {
            return Err(GeneratorError::IdentityNotFirst);
        }
        Ok(SymmetryGroup { rotations })
    }

    /// Verify that composing any two members yields a member.
    pub fn check_closure(&self) -> GeneratorResult<()> {
        for (i, a) in self.rotations.iter().enumerate() {
            for (j, b) in self.rotations.iter().enumerate() {
                if self.index_of(&a.then(b)).is_none() {
                    return Err(GeneratorError::NotClosed { left: i, right: j });
                }
            }
        }
        Ok(())
    }

    pub fn index_of(&self, rotation: &Rotation) -> Option<usize> {
        self.rotations.iter().position(|r| r == rotation)
    }

    pub fn get(&self, index: usize) -> &Rotation {
        &self.rotations[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rotation> {
        self.rotations.iter()
    }

    pub fn len(&self) -> usize {
        self.rotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rotations.is_empty()
    }
}
