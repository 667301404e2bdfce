// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Geometric types for stitch cells.
//!
//! - CaseConfig: which of the 8 cube corners are refined
//! - Face: oriented triangle or quad, compared in canonical rotation
//! - Polyhedron: ordered corner list of one of five shapes
//! - Tessellation: the polyhedra filling one (case, subcase)

pub mod case_config;
pub mod constants;
pub mod face;
pub mod polyhedron;

pub use case_config::{case_number_for_config, config_for_case, CaseConfig};
pub use constants::*;
pub use face::Face;
pub use polyhedron::{Polyhedron, Shape, Tessellation};
