// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Rotational symmetry of the cube.
//!
//! ## Module Structure
//!
//! - `rotation`: generators, group words, and the 24-member `SymmetryGroup`
//! - `mod`: Public API and re-exports

pub mod rotation;

pub use rotation::{
    apply, inverse, AxisPermutation, Rotation, SymmetryGroup, VertexPermutation, ROTATE_Y,
    ROTATE_Z, ROTATION_WORDS,
};
