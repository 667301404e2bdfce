// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed geometry of the unit cube.
//!
//! # Corner numbering
//!
//! ```text
//!        7 -------- 6
//!       /|         /|
//!      4 -------- 5 |        z
//!      | |        | |        |  y
//!      | 3 -------|-2        | /
//!      |/         |/         |/
//!      0 -------- 1          +---- x
//! ```
//!
//! Corner `i` of a case configuration is bit `i` of the case number.

/// Number of cube corners.
pub const NCORNERS: usize = 8;

/// Number of corner refinement configurations (2^NCORNERS).
pub const NCASES: usize = 1 << NCORNERS;

/// Number of coordinate axes.
pub const NAXES: usize = 3;

/// Number of square faces of the cube.
pub const NCUBE_FACES: usize = 6;

/// Number of corners of a square face.
pub const NFACE_CORNERS: usize = 4;

/// Number of square-face configurations (2^NFACE_CORNERS).
pub const NFACE_CONFIGS: usize = 1 << NFACE_CORNERS;

/// Number of rotations of the cube.
pub const NROTATIONS: usize = 24;

/// Largest number of subcases any case can have.
pub const MAX_SUBCASES: usize = 4;

/// Unit coordinates of each corner.
pub const CORNER_POSITIONS: [[i64; 3]; NCORNERS] = [
    [0, 0, 0],
    [1, 0, 0],
    [1, 1, 0],
    [0, 1, 0],
    [0, 0, 1],
    [1, 0, 1],
    [1, 1, 1],
    [0, 1, 1],
];

/// The six cube faces as corner cycles, counter-clockwise seen from outside.
///
/// Order: x=0, x=1, y=0, y=1, z=0, z=1.
pub const CUBE_FACES: [[u8; NFACE_CORNERS]; NCUBE_FACES] = [
    [0, 4, 7, 3],
    [1, 2, 6, 5],
    [0, 1, 5, 4],
    [3, 7, 6, 2],
    [0, 3, 2, 1],
    [4, 5, 6, 7],
];

/// The four cube edges parallel to each axis, as (low, high) corner pairs.
pub const AXIS_PAIRS: [[(u8, u8); 4]; NAXES] = [
    [(0, 1), (3, 2), (4, 5), (7, 6)],
    [(0, 3), (1, 2), (4, 7), (5, 6)],
    [(0, 4), (1, 5), (2, 6), (3, 7)],
];

/// The corners on the low face of each axis.
pub const AXIS_LOW_CORNERS: [[u8; 4]; NAXES] = [[0, 3, 4, 7], [0, 1, 4, 5], [0, 1, 2, 3]];
