// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator for the stitch-cell case tables of adaptive mesh refinement.
//!
//! Where a refined AMR patch meets a coarser one, each cube-shaped stitch
//! cell has some corners on the fine level ("refined") and some on the coarse
//! level. The stitching runtime looks the cell up by its 8-bit corner pattern
//! and emits the polyhedra listed for it. This crate builds, verifies and
//! serializes that lookup table.
//!
//! # Architecture
//!
//! ## Precomputed data (immutable)
//!
//! Built once, leaf-first:
//! - The 24-member rotation group of the cube
//! - The 23 base cases and the record of every configuration
//! - Subcase counts and directions for ambiguous configurations
//! - Square-face tessellations, which fix every cell's boundary
//! - The hand-authored tessellations of the base cases
//!
//! ## Pipeline
//!
//! 1. Validate each base case tessellation against its boundary
//! 2. Carry base tessellations to all 256 configurations by rotation
//! 3. Validate every (case, subcase)
//! 4. Flatten into the direction, stream and offset tables
//!
//! A validation failure anywhere is fatal: no table is emitted.

pub mod context;
pub mod emit;
pub mod error;
pub mod geometry;
pub mod memo;
pub mod statistics;
pub mod symmetry;
pub mod tessellation;

// Re-export commonly used types
pub use context::{CaseTables, MemoizedData};
pub use emit::{OutputFormat, OutputTables};
pub use error::{GeneratorError, GeneratorResult};
pub use geometry::{CaseConfig, Polyhedron, Shape, Tessellation};
