// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Immutable precomputed data.
//!
//! Everything here is computed once, in dependency order, and never
//! changes afterwards:
//! - Base cases and the record of every configuration
//! - Subcase counts, directions and merge classes
//! - Square-face tessellations
//! - The hand-authored base case tessellations

pub mod base_table;
pub mod canonical;
pub mod faces;
pub mod subcases;

pub use base_table::{BaseEntry, BaseTessellationTable, BASE_TESSELLATIONS};
pub use canonical::{CaseRecord, Canonicalizer};
pub use faces::{FaceLookup, FaceTessellator, CANONICAL_FACE_CONFIGS};
pub use subcases::{Axis, MergeClasses, SubcaseResolver};
